//! Pricing rules for the storefront.
//!
//! Display formatting and installment math over integer cents, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod format;
pub mod installments;

pub use format::money_brl;
pub use installments::{InstallmentPlan, InstallmentPolicy};
