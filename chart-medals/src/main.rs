//! Olympic Gold Medals
//!
//! The undecorated variant: no title, legend or permanent labels, and the
//! total line's tooltip shows the medal count instead of the venue.
//!
//! Unlike the other charts, the CSV is not embedded. It is fetched from
//! `data.csv` next to the page (served from `public/`) when the app mounts.

use dioxus::prelude::*;
use oly_chart_ui::components::MedalChartApp;
use oly_chart_ui::DataSource;
use oly_data::ChartConfig;
use oly_medals::MedalType;

const DATA_URL: &str = "data.csv";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("starting chart-medals, data from {}", DATA_URL);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("medals-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        MedalChartApp {
            config: ChartConfig::generic(MedalType::Gold),
            source: DataSource::Fetch(DATA_URL),
        }
    }
}
