//! Medal data processing for the chart apps.
//!
//! This crate turns loaded [`MedalRecord`](oly_medals::MedalRecord)s into the
//! per-year series the charts draw, and keeps the three chart layers in step
//! with the operator's selection:
//!
//! - `series`: `YearSeriesPoint` and the ordered `Series` container
//! - `aggregate`: per-year counting for the total, country and reference lenses
//! - `reconcile`: keyed diff between the rendered and the next series of a layer
//! - `config`: per-variant chart configuration (medal column, palette, labels)
//! - `sync`: `ChartEngine`, the selection state machine driving a `RenderAdapter`

pub mod aggregate;
pub mod config;
pub mod reconcile;
pub mod series;
pub mod sync;

pub use aggregate::{aggregate_by_year, aggregate_total_by_year, distinct_countries, filter_by_country};
pub use config::{ChartConfig, Palette, TooltipMode};
pub use reconcile::{reconcile, LayerPatch};
pub use series::{Series, YearSeriesPoint};
pub use sync::{
    ChartEngine, ChartFrame, LabelMode, LayerStyle, LayerUpdate, LegendEntry, Lens, RenderAdapter,
    SelectionState, REFERENCE_COUNTRY,
};
