//! The whole medal chart page, parameterised by a `ChartConfig`.
//!
//! Data flow:
//! 1. On mount: load the CSV from the `DataSource` (the only async step).
//! 2. Once loading is done and the chart container is in the DOM: build the
//!    `ChartEngine`, which mounts the D3 chart and draws the total lens and
//!    the first country.
//! 3. The country dropdown and the reference toggle call into the engine,
//!    which redraws only the affected layer.

use crate::adapter::D3Adapter;
use crate::components::{
    ChartContainer, ChartNotes, CountrySelector, ErrorDisplay, LoadingSpinner, ReferenceToggle,
};
use crate::js_bridge;
use crate::source::DataSource;
use crate::state::AppState;
use dioxus::prelude::*;
use oly_data::{ChartConfig, ChartEngine, REFERENCE_COUNTRY};

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "visualization";

#[component]
pub fn MedalChartApp(config: ChartConfig, source: DataSource) -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load the records once ───
    use_future(move || async move {
        match source.load_records().await {
            Ok(records) => {
                state.records.set(Some(records));
            }
            Err(e) => {
                log::error!("[OLY] Failed to load medal data: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load medal data: {:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Build the engine once the container has been rendered ───
    let engine_config = config.clone();
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let Some(records) = state.records.write().take() else {
            return;
        };

        match ChartEngine::new(engine_config.clone(), records, D3Adapter::new(CHART_ID)) {
            Ok(engine) => {
                state.engine.set(Some(engine));
            }
            Err(e) => {
                log::error!("[OLY] Chart initialization failed: {:#}", e);
                js_bridge::destroy_chart(CHART_ID);
                state
                    .error_msg
                    .set(Some(format!("Chart initialization failed: {:#}", e)));
            }
        }
    });

    let titled = config.title.is_some();
    let (selector_prompt, toggle_prompt, toggle_text) = if titled {
        (
            "Select another country to compare:".to_string(),
            format!("Add/Remove {}:", REFERENCE_COUNTRY),
            format!("Toggle {}", REFERENCE_COUNTRY),
        )
    } else {
        (
            String::new(),
            String::new(),
            format!("Add/Remove {}", REFERENCE_COUNTRY),
        )
    };
    let engine_ready = state.engine.read().is_some();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartContainer {
                    id: CHART_ID.to_string(),
                    loading: !engine_ready,
                    min_height: 500,
                }

                if engine_ready {
                    ChartNotes { notes: config.notes.clone() }
                    CountrySelector { prompt: selector_prompt.clone() }
                    ReferenceToggle { prompt: toggle_prompt.clone(), button_text: toggle_text.clone() }
                }
            }
        }
    }
}
