//! Monetary amounts in integer cents.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Monetary amount in the smallest currency unit (cents).
///
/// Prices travel through the system as unsigned integer cents. Comparison is
/// a total order; float and NaN semantics stop at the parsing boundary.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Strict parse for string-encoded price metadata.
    ///
    /// Accepts a plain decimal with `.` or `,` as the decimal separator and
    /// at most two fraction digits (`"50"`, `"12.34"`, `"12,34"`), with
    /// surrounding whitespace tolerated. Signs, exponents, grouping, and
    /// anything else fail with [`DomainError::InvalidPrice`].
    pub fn parse_decimal(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_price("empty amount"));
        }

        let normalized = trimmed.replace(',', ".");
        let (whole, fraction) = match normalized.split_once('.') {
            Some((w, f)) => (w, f),
            None => (normalized.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(DomainError::invalid_price(format!("not a number: {trimmed:?}")));
        }
        if fraction.contains('.') {
            return Err(DomainError::invalid_price(format!(
                "multiple decimal separators: {trimmed:?}"
            )));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(DomainError::invalid_price(format!("not a number: {trimmed:?}")));
        }
        if fraction.len() > 2 {
            return Err(DomainError::invalid_price(format!(
                "more than two fraction digits: {trimmed:?}"
            )));
        }

        let whole_units: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| DomainError::invalid_price(format!("amount out of range: {trimmed:?}")))?
        };
        let fraction_cents: u64 = match fraction.len() {
            0 => 0,
            // One fraction digit means tenths: "1.5" is 150 cents.
            1 => fraction.parse::<u64>().unwrap_or(0) * 10,
            _ => fraction.parse().unwrap_or(0),
        };

        whole_units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .map(Money)
            .ok_or_else(|| DomainError::invalid_price(format!("amount out of range: {trimmed:?}")))
    }

    /// Lenient parse for tolerated query parameters.
    ///
    /// Mirrors the permissive server-side reading of price bounds: any
    /// string a float parser accepts (after `,` → `.`) is taken, rounded to
    /// whole cents; malformed, non-finite, or negative input yields `None`
    /// and the bound is simply not applied.
    pub fn parse_lenient(input: &str) -> Option<Self> {
        let normalized = input.trim().replace(',', ".");
        if normalized.is_empty() {
            return None;
        }
        let value: f64 = normalized.parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Money(cents as u64))
    }
}

impl ValueObject for Money {}
