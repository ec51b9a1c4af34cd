//! Reusable Dioxus RSX components for the medal chart apps.

mod chart_container;
mod chart_notes;
mod country_selector;
mod error_display;
mod loading_spinner;
mod medal_chart_app;
mod reference_toggle;

pub use chart_container::ChartContainer;
pub use chart_notes::ChartNotes;
pub use country_selector::CountrySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use medal_chart_app::MedalChartApp;
pub use reference_toggle::ReferenceToggle;
