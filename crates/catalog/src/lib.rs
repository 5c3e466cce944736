//! `vitrine-catalog` — the catalog filter/sort widget.
//!
//! A page wires its three controls (search box, category selector, sort
//! selector) to a [`CatalogWidget`] holding one of two behaviors: the
//! local engine hides and reorders cards in place, the redirector rewrites
//! the query string and reloads. Both speak through injected ports, so
//! nothing here touches a real page.

pub mod card;
pub mod config;
pub mod controls;
pub mod criteria;
pub mod engine;
pub mod ports;
pub mod redirect;
pub mod strategy;

pub use card::{Card, CardMetadata};
pub use config::{CatalogConfig, CatalogMode};
pub use controls::{ControlEvent, ControlValues};
pub use criteria::{CategoryFilter, FilterCriteria, SortKey};
pub use engine::{LocalEngine, Selection, select};
pub use ports::{CatalogView, Navigator};
pub use redirect::Redirector;
pub use strategy::{CatalogStrategy, CatalogWidget};
