//! Catalog listing module.
//!
//! Turns a raw catalog URL into a page of products: query-string parsing,
//! filter and sort evaluation, and pagination. Deterministic domain logic
//! with no IO; callers bring the product set.

pub mod page;
pub mod params;
pub mod query;

pub use page::{DEFAULT_PAGE_SIZE, Page, Paginator};
pub use params::{PageLocation, QueryString};
pub use query::{ListingQuery, ListingSort};
