//! The strategy seam: one widget, two interchangeable catalog behaviors.

use std::fmt;

use vitrine_core::DomainResult;
use vitrine_listing::PageLocation;

use crate::card::CardMetadata;
use crate::config::{CatalogConfig, CatalogMode};
use crate::controls::{ControlEvent, ControlValues};
use crate::engine::LocalEngine;
use crate::ports::{CatalogView, Navigator};
use crate::redirect::Redirector;

/// One catalog behavior. Implementations declare which control events they
/// bind and react to each bound change.
pub trait CatalogStrategy {
    /// Control events this behavior listens to.
    fn bindings(&self) -> &'static [ControlEvent];

    /// Reacts to one bound control change.
    fn on_control_change(
        &mut self,
        event: ControlEvent,
        values: &ControlValues,
    ) -> DomainResult<()>;
}

/// The widget a page wires its controls to. Holds the selected behavior
/// and routes control events to it.
pub struct CatalogWidget {
    strategy: Box<dyn CatalogStrategy>,
}

impl fmt::Debug for CatalogWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogWidget").finish_non_exhaustive()
    }
}

impl CatalogWidget {
    pub fn new(strategy: Box<dyn CatalogStrategy>) -> Self {
        Self { strategy }
    }

    /// Local filter/sort over the given cards.
    pub fn local<V>(metadata: &[CardMetadata], view: V) -> DomainResult<Self>
    where
        V: CatalogView + 'static,
    {
        Ok(Self::new(Box::new(LocalEngine::from_metadata(
            metadata, view,
        )?)))
    }

    /// Query-string redirection away from the given location.
    pub fn redirecting<N>(location: PageLocation, navigator: N) -> Self
    where
        N: Navigator + 'static,
    {
        Self::new(Box::new(Redirector::new(location, navigator)))
    }

    /// Picks whichever behavior the configuration asks for.
    pub fn from_config<V, N>(
        config: &CatalogConfig,
        metadata: &[CardMetadata],
        view: V,
        location: PageLocation,
        navigator: N,
    ) -> DomainResult<Self>
    where
        V: CatalogView + 'static,
        N: Navigator + 'static,
    {
        match config.mode {
            CatalogMode::Local => Self::local(metadata, view),
            CatalogMode::Redirect => Ok(Self::redirecting(location, navigator)),
        }
    }

    pub fn bindings(&self) -> &'static [ControlEvent] {
        self.strategy.bindings()
    }

    /// Routes one control event. Events the behavior does not bind are
    /// dropped, same as a listener that was never attached.
    pub fn handle(&mut self, event: ControlEvent, values: &ControlValues) -> DomainResult<()> {
        if !self.strategy.bindings().contains(&event) {
            tracing::debug!(?event, "control not bound, ignoring");
            return Ok(());
        }

        self.strategy.on_control_change(event, values)
    }
}
