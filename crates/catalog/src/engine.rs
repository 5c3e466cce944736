//! The local filter/sort engine: recompute everything on every change,
//! never leave the page.

use vitrine_core::DomainResult;

use crate::card::{Card, CardMetadata};
use crate::controls::{ControlEvent, ControlValues};
use crate::criteria::{FilterCriteria, SortKey};
use crate::ports::CatalogView;
use crate::strategy::CatalogStrategy;

/// Outcome of evaluating criteria over a card set: one visibility flag per
/// card, plus the display order of the visible ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    visibility: Vec<bool>,
    order: Vec<usize>,
}

impl Selection {
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility.get(index).copied().unwrap_or(false)
    }

    pub fn visibility(&self) -> &[bool] {
        &self.visibility
    }

    /// Card indices in display order. Hidden cards are absent.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn visible_count(&self) -> usize {
        self.order.len()
    }
}

/// Evaluates `criteria` over `cards`.
///
/// Ordering is a stable sort over the visible cards only: relevance keeps
/// insertion order, and price ties keep theirs.
pub fn select(cards: &[Card], criteria: &FilterCriteria) -> Selection {
    let visibility: Vec<bool> = cards.iter().map(|card| criteria.matches(card)).collect();
    let mut order: Vec<usize> = visibility
        .iter()
        .enumerate()
        .filter_map(|(index, &visible)| visible.then_some(index))
        .collect();

    match criteria.sort {
        SortKey::Relevance => {}
        SortKey::PriceAscending => order.sort_by_key(|&index| cards[index].price()),
        SortKey::PriceDescending => {
            order.sort_by(|&a, &b| cards[b].price().cmp(&cards[a].price()));
        }
    }

    Selection { visibility, order }
}

/// Client-side catalog behavior. Cards are ingested once; every bound
/// control change recomputes visibility and order for the whole grid
/// through the injected view.
pub struct LocalEngine<V> {
    cards: Vec<Card>,
    view: V,
}

impl<V: CatalogView> LocalEngine<V> {
    pub fn new(cards: Vec<Card>, view: V) -> Self {
        Self { cards, view }
    }

    /// Parses raw card metadata and ingests the result. Any malformed
    /// price fails the whole initialization.
    pub fn from_metadata(metadata: &[CardMetadata], view: V) -> DomainResult<Self> {
        let cards = metadata
            .iter()
            .map(Card::from_metadata)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self::new(cards, view))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn criteria_from(values: &ControlValues) -> DomainResult<FilterCriteria> {
        let search = values
            .search
            .as_deref()
            .ok_or_else(|| vitrine_core::DomainError::validation("search control is missing"))?;
        let category = values
            .category
            .as_deref()
            .ok_or_else(|| vitrine_core::DomainError::validation("category control is missing"))?;
        let sort = values
            .sort
            .as_deref()
            .ok_or_else(|| vitrine_core::DomainError::validation("sort control is missing"))?;

        Ok(FilterCriteria::from_controls(search, category, sort))
    }

    fn reflow(&mut self, criteria: &FilterCriteria) {
        let selection = select(&self.cards, criteria);

        for (index, &visible) in selection.visibility().iter().enumerate() {
            self.view.set_visible(index, visible);
        }
        self.view.reorder(selection.order());

        tracing::debug!(
            total = self.cards.len(),
            visible = selection.visible_count(),
            "catalog reflowed"
        );
    }
}

impl<V: CatalogView> CatalogStrategy for LocalEngine<V> {
    fn bindings(&self) -> &'static [ControlEvent] {
        &[
            ControlEvent::SearchChanged,
            ControlEvent::CategoryChanged,
            ControlEvent::SortChanged,
        ]
    }

    fn on_control_change(
        &mut self,
        _event: ControlEvent,
        values: &ControlValues,
    ) -> DomainResult<()> {
        let criteria = Self::criteria_from(values)?;
        self.reflow(&criteria);
        Ok(())
    }
}
