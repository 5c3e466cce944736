//! The query-string redirector: translate control state into URL
//! parameters and hand the rest to the server.

use vitrine_core::DomainResult;
use vitrine_listing::{ListingSort, PageLocation};

use crate::controls::{ControlEvent, ControlValues};
use crate::criteria::{CategoryFilter, SortKey};
use crate::ports::Navigator;
use crate::strategy::CatalogStrategy;

/// Server-side catalog behavior. Category and sort changes rewrite the
/// `cat` and `sort` parameters and reload the page; every unrelated
/// parameter survives untouched.
pub struct Redirector<N> {
    location: PageLocation,
    navigator: N,
}

impl<N: Navigator> Redirector<N> {
    pub fn new(location: PageLocation, navigator: N) -> Self {
        Self {
            location,
            navigator,
        }
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    /// Maps control values onto the query string without navigating.
    ///
    /// Sentinels remove their parameter, anything else sets it verbatim.
    /// An absent control leaves its parameter exactly as it was.
    pub fn rewrite(&self, values: &ControlValues) -> PageLocation {
        let mut next = self.location.clone();

        if let Some(category) = values.category.as_deref() {
            match CategoryFilter::from_control_value(category) {
                CategoryFilter::All => next.query.remove("cat"),
                CategoryFilter::Only(selected) => next.query.set("cat", &selected),
            }
        }
        if let Some(sort) = values.sort.as_deref() {
            match SortKey::from_control_value(sort) {
                SortKey::Relevance => next.query.remove("sort"),
                SortKey::PriceAscending => next.query.set("sort", ListingSort::PriceAsc.token()),
                SortKey::PriceDescending => next.query.set("sort", ListingSort::PriceDesc.token()),
            }
        }

        next
    }
}

impl<N: Navigator> CatalogStrategy for Redirector<N> {
    fn bindings(&self) -> &'static [ControlEvent] {
        &[ControlEvent::CategoryChanged, ControlEvent::SortChanged]
    }

    fn on_control_change(
        &mut self,
        _event: ControlEvent,
        values: &ControlValues,
    ) -> DomainResult<()> {
        let next = self.rewrite(values);
        tracing::debug!(location = %next, "catalog redirect");
        self.navigator.navigate(&next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CATEGORY_ALL, SORT_PRICE_ASC, SORT_PRICE_DESC, SORT_RELEVANCE};

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, location: &PageLocation) {
            self.visited.push(location.to_string());
        }
    }

    fn redirector(url: &str) -> Redirector<RecordingNavigator> {
        Redirector::new(PageLocation::parse(url), RecordingNavigator::default())
    }

    #[test]
    fn sort_descending_keeps_unrelated_parameters() {
        let values = ControlValues::new()
            .with_category(CATEGORY_ALL)
            .with_sort(SORT_PRICE_DESC);

        let next = redirector("/catalog?x=1").rewrite(&values);

        assert_eq!(next.to_string(), "/catalog?x=1&sort=-price");
    }

    #[test]
    fn category_value_is_set_verbatim() {
        let values = ControlValues::new().with_category("livros");

        let next = redirector("/catalog").rewrite(&values);

        assert_eq!(next.to_string(), "/catalog?cat=livros");
    }

    #[test]
    fn all_sentinel_removes_the_category_parameter() {
        let values = ControlValues::new().with_category(CATEGORY_ALL);

        let next = redirector("/catalog?cat=livros&page=2").rewrite(&values);

        assert_eq!(next.to_string(), "/catalog?page=2");
    }

    #[test]
    fn relevance_sentinel_removes_the_sort_parameter() {
        let values = ControlValues::new().with_sort(SORT_RELEVANCE);

        let next = redirector("/catalog?sort=price&q=mouse").rewrite(&values);

        assert_eq!(next.to_string(), "/catalog?q=mouse");
    }

    #[test]
    fn absent_control_leaves_its_parameter_alone() {
        let values = ControlValues::new().with_sort(SORT_PRICE_ASC);

        let next = redirector("/catalog?cat=livros").rewrite(&values);

        assert_eq!(next.to_string(), "/catalog?cat=livros&sort=price");
    }

    #[test]
    fn replaced_sort_keeps_its_position() {
        let values = ControlValues::new().with_sort(SORT_PRICE_DESC);

        let next = redirector("/catalog?sort=price&x=1").rewrite(&values);

        assert_eq!(next.to_string(), "/catalog?sort=-price&x=1");
    }

    #[test]
    fn change_event_navigates_to_the_rewritten_location() {
        let mut redirector = redirector("/catalog?x=1");
        let values = ControlValues::new()
            .with_category("jogos")
            .with_sort(SORT_PRICE_ASC);

        redirector
            .on_control_change(ControlEvent::SortChanged, &values)
            .unwrap();

        assert_eq!(
            redirector.navigator.visited,
            vec!["/catalog?x=1&cat=jogos&sort=price"]
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_values() -> impl Strategy<Value = ControlValues> {
            let category = proptest::option::of(prop_oneof![
                Just(CATEGORY_ALL.to_owned()),
                "[a-z]{1,8}",
            ]);
            let sort = proptest::option::of(prop_oneof![
                Just(SORT_RELEVANCE.to_owned()),
                Just(SORT_PRICE_ASC.to_owned()),
                Just(SORT_PRICE_DESC.to_owned()),
                "[a-z]{1,8}",
            ]);

            (category, sort).prop_map(|(category, sort)| ControlValues {
                search: None,
                category,
                sort,
            })
        }

        fn arb_query() -> impl Strategy<Value = String> {
            proptest::collection::vec(("[a-z]{1,4}", "[a-z0-9]{0,4}"), 0..5)
                .prop_map(|pairs| {
                    pairs
                        .into_iter()
                        .map(|(k, v)| format!("{k}={v}"))
                        .collect::<Vec<_>>()
                        .join("&")
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                // Use deterministic seed for CI reproducibility
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: applying the mapping twice with the same control
            /// values lands on the same query string as applying it once.
            #[test]
            fn rewrite_is_idempotent(query in arb_query(), values in arb_values()) {
                let url = format!("/catalog?{query}");

                let once = redirector(&url).rewrite(&values);
                let twice = Redirector::new(once.clone(), RecordingNavigator::default())
                    .rewrite(&values);

                prop_assert_eq!(once.to_string(), twice.to_string());
            }
        }
    }
}
