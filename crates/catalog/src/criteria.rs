//! Filter criteria derived from the three catalog controls.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Category selector value meaning "no category filter".
pub const CATEGORY_ALL: &str = "todas";
/// Sort selector value meaning "no reordering".
pub const SORT_RELEVANCE: &str = "relevancia";
/// Sort selector value for cheapest first.
pub const SORT_PRICE_ASC: &str = "preco-asc";
/// Sort selector value for most expensive first.
pub const SORT_PRICE_DESC: &str = "preco-desc";

/// Ordering applied to the visible cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Keep insertion order.
    #[default]
    #[serde(rename = "relevancia")]
    Relevance,
    #[serde(rename = "preco-asc")]
    PriceAscending,
    #[serde(rename = "preco-desc")]
    PriceDescending,
}

impl SortKey {
    /// Maps a sort selector value. Anything unrecognized sorts nothing,
    /// exactly like the relevance sentinel.
    pub fn from_control_value(value: &str) -> Self {
        match value {
            SORT_PRICE_ASC => Self::PriceAscending,
            SORT_PRICE_DESC => Self::PriceDescending,
            _ => Self::Relevance,
        }
    }

    pub fn control_value(&self) -> &'static str {
        match self {
            Self::Relevance => SORT_RELEVANCE,
            Self::PriceAscending => SORT_PRICE_ASC,
            Self::PriceDescending => SORT_PRICE_DESC,
        }
    }
}

/// Category restriction taken from the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// The `todas` sentinel: every category matches.
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_control_value(value: &str) -> Self {
        if value == CATEGORY_ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// One snapshot of the three controls, ready to evaluate against cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Builds criteria from the raw control values.
    pub fn from_controls(search: &str, category: &str, sort: &str) -> Self {
        Self {
            search: search.to_owned(),
            category: CategoryFilter::from_control_value(category),
            sort: SortKey::from_control_value(sort),
        }
    }

    /// A card shows iff its category passes the selector and its name
    /// contains the search text, case-insensitively. Empty search matches
    /// everything.
    pub fn matches(&self, card: &Card) -> bool {
        self.category.matches(card.category())
            && card
                .name()
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::Money;

    fn card(name: &str, category: &str) -> Card {
        Card::new(name, category, Money::from_cents(1_000))
    }

    #[test]
    fn all_sentinel_matches_every_category() {
        let criteria = FilterCriteria::from_controls("", CATEGORY_ALL, SORT_RELEVANCE);

        assert!(criteria.matches(&card("Mouse", "eletronicos")));
        assert!(criteria.matches(&card("Romance", "livros")));
    }

    #[test]
    fn category_selection_is_exact() {
        let criteria = FilterCriteria::from_controls("", "livros", SORT_RELEVANCE);

        assert!(criteria.matches(&card("Romance", "livros")));
        assert!(!criteria.matches(&card("Mouse", "eletronicos")));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let criteria = FilterCriteria::from_controls("MOU", CATEGORY_ALL, SORT_RELEVANCE);

        assert!(criteria.matches(&card("Mouse", "eletronicos")));
        assert!(!criteria.matches(&card("Teclado", "eletronicos")));
    }

    #[test]
    fn empty_search_matches_everything() {
        let criteria = FilterCriteria::from_controls("", CATEGORY_ALL, SORT_RELEVANCE);

        assert!(criteria.matches(&card("", "qualquer")));
    }

    #[test]
    fn unknown_sort_value_reads_as_relevance() {
        assert_eq!(SortKey::from_control_value("alfabetico"), SortKey::Relevance);
        assert_eq!(SortKey::from_control_value(""), SortKey::Relevance);
    }

    #[test]
    fn sort_values_round_trip() {
        for key in [
            SortKey::Relevance,
            SortKey::PriceAscending,
            SortKey::PriceDescending,
        ] {
            assert_eq!(SortKey::from_control_value(key.control_value()), key);
        }
    }
}
