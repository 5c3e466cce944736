use vitrine_core::Money;

/// Formats a price the way the storefront prints it: `R$ 12,34`.
///
/// Always two fraction digits, comma as the decimal separator, no thousands
/// grouping.
pub fn money_brl(price: Money) -> String {
    let cents = price.cents();
    format!("R$ {},{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fraction() {
        assert_eq!(money_brl(Money::from_cents(1_234)), "R$ 12,34");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(money_brl(Money::ZERO), "R$ 0,00");
    }

    #[test]
    fn pads_single_digit_cents() {
        assert_eq!(money_brl(Money::from_cents(5)), "R$ 0,05");
    }

    #[test]
    fn large_amounts_have_no_grouping() {
        assert_eq!(money_brl(Money::from_cents(123_456_789)), "R$ 1234567,89");
    }
}
