use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use vitrine_core::{DomainResult, Money};

use crate::format::money_brl;

pub const DEFAULT_MAX_INSTALLMENTS: u32 = 6;
pub const DEFAULT_MIN_INSTALLMENT: Money = Money::from_cents(1_000);

/// One way to split a price: `installments` payments of `per_installment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub installments: u32,
    pub per_installment: Money,
}

impl fmt::Display for InstallmentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x de {}",
            self.installments,
            money_brl(self.per_installment)
        )
    }
}

/// Installment configuration. The defaults mirror the storefront settings:
/// up to 6 installments, each worth at least R$ 10,00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPolicy {
    max_installments: u32,
    min_installment: Money,
}

impl Default for InstallmentPolicy {
    fn default() -> Self {
        Self {
            max_installments: DEFAULT_MAX_INSTALLMENTS,
            min_installment: DEFAULT_MIN_INSTALLMENT,
        }
    }
}

impl InstallmentPolicy {
    pub fn new(max_installments: u32, min_installment: Money) -> DomainResult<Self> {
        if max_installments == 0 {
            return Err(vitrine_core::DomainError::validation(
                "max_installments must be at least 1",
            ));
        }

        Ok(Self {
            max_installments,
            min_installment,
        })
    }

    pub fn max_installments(&self) -> u32 {
        self.max_installments
    }

    pub fn min_installment(&self) -> Money {
        self.min_installment
    }

    /// All valid plans, in ascending installment count.
    ///
    /// 1x is always offered, even when the price sits below the minimum
    /// installment. From 2x up to the configured maximum, a plan is offered
    /// while each installment stays at or above the minimum.
    pub fn plans(&self, price: Money) -> Vec<InstallmentPlan> {
        let mut plans = vec![InstallmentPlan {
            installments: 1,
            per_installment: price,
        }];

        for n in 2..=self.max_installments {
            if self.covers_minimum(price, n) {
                plans.push(InstallmentPlan {
                    installments: n,
                    per_installment: Money::from_cents(split_cents(price.cents(), u64::from(n))),
                });
            }
        }

        plans
    }

    /// The plan a product card advertises: the highest valid installment
    /// count.
    pub fn best(&self, price: Money) -> InstallmentPlan {
        self.plans(price).pop().unwrap_or(InstallmentPlan {
            installments: 1,
            per_installment: price,
        })
    }

    fn covers_minimum(&self, price: Money, n: u32) -> bool {
        self.min_installment
            .cents()
            .checked_mul(u64::from(n))
            .is_some_and(|floor| price.cents() >= floor)
    }
}

/// Divides `cents` into `n` equal parts, rounded to the nearest whole cent.
/// Exact halves round to the even cent.
fn split_cents(cents: u64, n: u64) -> u64 {
    let quotient = cents / n;
    let remainder = cents % n;
    match (remainder * 2).cmp(&n) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    }
}
