//! Silver Medals in the Olympics Over the Years
//!
//! Line chart of Silver medals per games year, with a dropdown to compare
//! one country against the total and a toggle for the USA line.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/medals.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. `MedalChartApp` parses it on mount and hands the records to the
//!    chart engine.

use dioxus::prelude::*;
use oly_chart_ui::components::MedalChartApp;
use oly_chart_ui::DataSource;
use oly_data::ChartConfig;

// Embed the medal CSV at compile time.
const MEDALS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/medals.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("starting chart-silver-medals");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("silver-medals-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        MedalChartApp {
            config: ChartConfig::silver(),
            source: DataSource::Embedded(MEDALS_CSV),
        }
    }
}
