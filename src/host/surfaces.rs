use serde::Serialize;
use std::collections::BTreeMap;

use crate::dashboard::{ChartView, SurfaceProvider};

/// A canvas element the page has mounted for one chart view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasSurface {
    pub view: ChartView,
    pub element_id: String,
}

/// Surfaces reported by the page, keyed by view.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    mounted: BTreeMap<ChartView, CanvasSurface>,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mounted canvas. Re-mounting a view replaces its element id.
    pub fn mount(&mut self, view: ChartView, element_id: impl Into<String>) {
        let element_id = element_id.into();
        tracing::debug!(view = view.as_str(), element_id = %element_id, "surface_mounted");
        self.mounted.insert(view, CanvasSurface { view, element_id });
    }

    /// A canvas without an element id cannot be drawn on and counts as missing.
    fn resolves(&self, view: ChartView) -> bool {
        self.surface(view).is_some()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        ChartView::ALL.into_iter().all(|view| self.resolves(view))
    }

    #[must_use]
    pub fn missing(&self) -> Vec<ChartView> {
        ChartView::ALL
            .into_iter()
            .filter(|view| !self.resolves(*view))
            .collect()
    }
}

impl SurfaceProvider for SurfaceRegistry {
    type Surface = CanvasSurface;

    fn surface(&self, view: ChartView) -> Option<CanvasSurface> {
        self.mounted
            .get(&view)
            .filter(|s| !s.element_id.trim().is_empty())
            .cloned()
    }
}
