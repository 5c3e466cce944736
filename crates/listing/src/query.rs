//! The catalog listing: filter, order, paginate.

use serde::{Deserialize, Serialize};

use vitrine_core::Money;
use vitrine_products::Product;

use crate::page::{Page, Paginator};
use crate::params::QueryString;

/// Orderings the listing accepts, addressed by wire token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingSort {
    #[serde(rename = "created")]
    CreatedAsc,
    #[default]
    #[serde(rename = "-created")]
    CreatedDesc,
    #[serde(rename = "price")]
    PriceAsc,
    #[serde(rename = "-price")]
    PriceDesc,
    #[serde(rename = "pop")]
    Popularity,
}

impl ListingSort {
    /// Maps a `sort` parameter to an ordering. Unknown or empty tokens fall
    /// back to newest first.
    pub fn from_token(token: &str) -> Self {
        match token {
            "created" => Self::CreatedAsc,
            "-created" => Self::CreatedDesc,
            "price" => Self::PriceAsc,
            "-price" => Self::PriceDesc,
            "pop" => Self::Popularity,
            _ => Self::default(),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::CreatedAsc => "created",
            Self::CreatedDesc => "-created",
            Self::PriceAsc => "price",
            Self::PriceDesc => "-price",
            Self::Popularity => "pop",
        }
    }
}

/// A parsed catalog request.
///
/// Construction is as forgiving as the query string itself: blank filters
/// disappear, malformed prices are ignored, unknown sort tokens fall back
/// to the default ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub search: String,
    pub category: Option<String>,
    pub featured: bool,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub sort: ListingSort,
    pub page: Option<i64>,
}

impl ListingQuery {
    /// Reads the `q`, `cat`, `featured`, `min_price`, `max_price`, `sort`
    /// and `page` parameters.
    pub fn from_query_string(query: &QueryString) -> Self {
        let search = query.get("q").unwrap_or_default().trim().to_owned();
        let category = query
            .get("cat")
            .map(str::trim)
            .filter(|cat| !cat.is_empty())
            .map(ToOwned::to_owned);
        let featured = query.get("featured") == Some("1");
        let min_price = query.get("min_price").and_then(Money::parse_lenient);
        let max_price = query.get("max_price").and_then(Money::parse_lenient);
        let sort = query
            .get("sort")
            .map(|token| ListingSort::from_token(token.trim()))
            .unwrap_or_default();
        let page = query.get("page").and_then(|raw| raw.trim().parse().ok());

        Self {
            search,
            category,
            featured,
            min_price,
            max_price,
            sort,
            page,
        }
    }

    /// Runs the query over the product set and returns the requested page.
    ///
    /// Inactive products never appear. The text filter matches title or
    /// description, case-insensitively. Price bounds are inclusive. Every
    /// ordering is a stable sort, so equal keys keep their input order.
    pub fn run(&self, products: &[Product]) -> Page<Product> {
        let mut selected: Vec<&Product> = products.iter().filter(|p| p.is_listed()).collect();
        let listed = selected.len();

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            selected.retain(|p| {
                p.title().to_lowercase().contains(&needle)
                    || p.description().to_lowercase().contains(&needle)
            });
        }
        if let Some(category) = &self.category {
            selected.retain(|p| {
                p.category_slug()
                    .is_some_and(|slug| slug.as_ref() == category.as_str())
            });
        }
        if self.featured {
            selected.retain(|p| p.is_featured());
        }
        if let Some(min) = self.min_price {
            selected.retain(|p| p.price() >= min);
        }
        if let Some(max) = self.max_price {
            selected.retain(|p| p.price() <= max);
        }

        tracing::debug!(
            listed,
            matched = selected.len(),
            sort = self.sort.token(),
            "catalog query filtered"
        );

        match self.sort {
            ListingSort::CreatedAsc => selected.sort_by_key(|p| p.created_at()),
            ListingSort::CreatedDesc => {
                selected.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
            }
            ListingSort::PriceAsc => selected.sort_by_key(|p| p.price()),
            ListingSort::PriceDesc => selected.sort_by(|a, b| b.price().cmp(&a.price())),
            ListingSort::Popularity => selected.sort_by(|a, b| b.views().cmp(&a.views())),
        }

        let matched: Vec<Product> = selected.into_iter().cloned().collect();
        Paginator::default().get_page(&matched, self.page)
    }
}
