//! `vitrine-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog
//! crates: the error taxonomy, entity/value-object markers, id support, and
//! the `Money`/`Slug` value objects. No rendering, transport, or storage
//! concerns live here.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod slug;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use slug::Slug;
pub use value_object::ValueObject;
