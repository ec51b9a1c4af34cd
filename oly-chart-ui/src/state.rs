//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::adapter::D3Adapter;
use dioxus::prelude::*;
use oly_data::ChartEngine;
use oly_medals::MedalRecord;

/// Shared application state for the medal chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the CSV is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Loaded records, handed over to the engine once the chart is mounted
    pub records: Signal<Option<Vec<MedalRecord>>>,
    /// Chart engine (None until the chart is mounted). Owns the selection.
    pub engine: Signal<Option<ChartEngine<D3Adapter>>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            records: Signal::new(None),
            engine: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
