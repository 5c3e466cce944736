//! Product cards as the widget sees them.

use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, DomainResult, Money};

/// Raw card attributes as the page embeds them: three strings per card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    pub name: String,
    pub category: String,
    pub price: String,
}

impl CardMetadata {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
        }
    }
}

/// A validated card. The price is parsed into [`Money`] up front, so the
/// comparators downstream never see a malformed number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    name: String,
    category: String,
    price: Money,
}

impl Card {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    /// Parses the string-encoded metadata of one card. A malformed price is
    /// a hard error naming the offending card.
    pub fn from_metadata(metadata: &CardMetadata) -> DomainResult<Self> {
        let price = Money::parse_decimal(&metadata.price).map_err(|err| match err {
            DomainError::InvalidPrice(detail) => DomainError::invalid_price(format!(
                "card {:?}: {detail}",
                metadata.name
            )),
            other => other,
        })?;

        Ok(Self::new(&metadata.name, &metadata.category, price))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_price_metadata() {
        let card = Card::from_metadata(&CardMetadata::new("Mouse", "eletronicos", "49.90")).unwrap();

        assert_eq!(card.price(), Money::from_cents(4_990));
        assert_eq!(card.name(), "Mouse");
        assert_eq!(card.category(), "eletronicos");
    }

    #[test]
    fn accepts_comma_decimal_separator() {
        let card = Card::from_metadata(&CardMetadata::new("Teclado", "eletronicos", "30,00")).unwrap();

        assert_eq!(card.price(), Money::from_cents(3_000));
    }

    #[test]
    fn malformed_price_names_the_card() {
        let err = Card::from_metadata(&CardMetadata::new("Caneca", "casa", "um real")).unwrap_err();

        match err {
            DomainError::InvalidPrice(detail) => assert!(detail.contains("Caneca")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
