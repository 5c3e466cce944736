//! Products domain module.
//!
//! This crate contains the storefront's product and category read shapes,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod category;
pub mod product;

pub use category::{Category, CategoryId};
pub use product::{Product, ProductId};
