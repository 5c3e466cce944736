//! Ports the widget drives. The page supplies implementations at
//! initialization; tests supply fakes.

use vitrine_listing::PageLocation;

/// Rendering surface for the local engine: a grid of cards addressed by the
/// index they were ingested with.
pub trait CatalogView {
    /// Shows or hides one card.
    fn set_visible(&mut self, index: usize, visible: bool);

    /// Rewrites the display order of the visible cards. `order` carries
    /// card indices; hidden cards are never listed.
    fn reorder(&mut self, order: &[usize]);
}

impl<V: CatalogView + ?Sized> CatalogView for &mut V {
    fn set_visible(&mut self, index: usize, visible: bool) {
        (**self).set_visible(index, visible);
    }

    fn reorder(&mut self, order: &[usize]) {
        (**self).reorder(order);
    }
}

/// Page navigation for the redirector. Navigating replaces the current
/// page, so implementations should expect at most one call per event.
pub trait Navigator {
    fn navigate(&mut self, location: &PageLocation);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, location: &PageLocation) {
        (**self).navigate(location);
    }
}
