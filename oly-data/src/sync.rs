//! Selection state and the protocol keeping the three chart layers in step
//! with it.
//!
//! A chart shows up to three lenses over the same records:
//!
//! - `Total`: every record, computed once when the engine is built
//! - `Country`: records of the country picked in the dropdown
//! - `Reference`: records of [`REFERENCE_COUNTRY`], only while toggled on
//!
//! [`ChartEngine`] owns the records, the selection and what each layer
//! currently shows. Every transition recomputes the affected lens and sends
//! the keyed diff against the rendered layer to a [`RenderAdapter`].

use crate::aggregate::{aggregate_by_year, aggregate_total_by_year, distinct_countries, filter_by_country};
use crate::config::{ChartConfig, TooltipMode};
use crate::reconcile::{reconcile, LayerPatch};
use crate::series::Series;
use anyhow::Context;
use oly_medals::MedalRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// The fixed comparison country of the reference lens.
pub const REFERENCE_COUNTRY: &str = "USA";

const MARKER_RADIUS: f64 = 4.0;
const HOVER_RADIUS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lens {
    Total,
    Country,
    Reference,
}

impl Lens {
    pub const ALL: [Lens; 3] = [Lens::Total, Lens::Country, Lens::Reference];

    /// Prefix of the SVG class names of this lens (`countryLine`, `usaPoint`...).
    pub fn class_prefix(&self) -> &'static str {
        match self {
            Lens::Total => "total",
            Lens::Country => "country",
            Lens::Reference => "usa",
        }
    }

    pub fn legend_label(&self) -> &'static str {
        match self {
            Lens::Total => "Total Medals",
            Lens::Country => "Selected Country",
            Lens::Reference => REFERENCE_COUNTRY,
        }
    }
}

/// Operator-controlled state of one chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub selected_country: Option<String>,
    pub reference_visible: bool,
}

/// How a lens draws its point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// Always visible above the point.
    Always,
    /// Revealed while the point is hovered.
    OnHover,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStyle {
    pub lens: Lens,
    pub class_prefix: &'static str,
    pub color: String,
    pub marker_radius: f64,
    pub hover_radius: f64,
    pub labels: LabelMode,
    /// Tooltip shown on hover, if any. Only the total lens has one.
    pub tooltip: Option<TooltipMode>,
    /// Used by `TooltipMode::Count`, e.g. "Gold Medals".
    pub count_label: String,
}

impl LayerStyle {
    fn for_lens(lens: Lens, config: &ChartConfig) -> Self {
        let (color, labels, tooltip) = match lens {
            Lens::Total => (
                &config.palette.total,
                if config.total_labels { LabelMode::Always } else { LabelMode::None },
                Some(config.total_tooltip),
            ),
            Lens::Country => (&config.palette.country, LabelMode::OnHover, None),
            Lens::Reference => (&config.palette.reference, LabelMode::OnHover, None),
        };
        Self {
            lens,
            class_prefix: lens.class_prefix(),
            color: color.clone(),
            marker_radius: MARKER_RADIUS,
            hover_radius: HOVER_RADIUS,
            labels,
            tooltip,
            count_label: config.count_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Everything needed to set up the chart before any layer is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub title: Option<String>,
    pub x_axis_label: String,
    pub y_axis_label: String,
    /// Horizontal band domain: the years of the total lens.
    pub years: Vec<i32>,
    /// Upper bound of the vertical domain before "nice" rounding.
    pub y_max: u32,
    pub legend: Vec<LegendEntry>,
}

impl ChartFrame {
    pub fn new(config: &ChartConfig, total: &Series) -> Self {
        let legend = if config.legend {
            [Lens::Total, Lens::Reference, Lens::Country]
                .iter()
                .map(|lens| LegendEntry {
                    label: lens.legend_label().to_string(),
                    color: LayerStyle::for_lens(*lens, config).color,
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            title: config.title.clone(),
            x_axis_label: "Year".to_string(),
            y_axis_label: config.y_axis_label.clone(),
            years: total.years(),
            y_max: total.max_count(),
            legend,
        }
    }
}

/// One layer redraw: the style, the full series for the line and the keyed
/// patch for markers and labels.
#[derive(Debug, Clone, Serialize)]
pub struct LayerUpdate<'a> {
    pub style: &'a LayerStyle,
    pub series: &'a Series,
    pub patch: &'a LayerPatch,
}

/// Draws chart layers. Implemented by the D3.js bridge in the web apps.
pub trait RenderAdapter {
    /// Build axes, title and legend. A failure here means no chart can be
    /// shown at all.
    fn mount(&mut self, frame: &ChartFrame) -> anyhow::Result<()>;

    /// Redraw the line of `update.style.lens` and apply the marker patch.
    fn render_layer(&mut self, update: &LayerUpdate<'_>);

    /// Remove every element of a lens.
    fn clear_layer(&mut self, lens: Lens);
}

/// One chart instance: records, selection and rendered layers.
pub struct ChartEngine<A> {
    config: ChartConfig,
    records: Vec<MedalRecord>,
    countries: Vec<String>,
    total: Series,
    selection: SelectionState,
    rendered: BTreeMap<Lens, Series>,
    adapter: A,
}

impl<A: RenderAdapter> ChartEngine<A> {
    /// Aggregate the total lens, mount the adapter and draw the initial state:
    /// the total line and the first country of the dataset.
    pub fn new(config: ChartConfig, records: Vec<MedalRecord>, mut adapter: A) -> anyhow::Result<Self> {
        let total = aggregate_total_by_year(&records, config.medal);
        let countries = distinct_countries(&records);
        log::info!(
            "engine: {} chart over {} records, {} years, {} countries",
            config.medal,
            records.len(),
            total.len(),
            countries.len()
        );

        adapter
            .mount(&ChartFrame::new(&config, &total))
            .context("failed to mount chart")?;

        let selection = SelectionState {
            selected_country: countries.first().cloned(),
            reference_visible: false,
        };
        let mut engine = Self {
            config,
            records,
            countries,
            total,
            selection,
            rendered: BTreeMap::new(),
            adapter,
        };
        engine.sync_layer(Lens::Total);
        engine.sync_layer(Lens::Country);
        Ok(engine)
    }

    pub fn select_country(&mut self, country: &str) {
        log::info!("engine: selecting country {}", country);
        self.selection.selected_country = Some(country.to_string());
        self.sync_layer(Lens::Country);
    }

    pub fn toggle_reference(&mut self) {
        self.selection.reference_visible = !self.selection.reference_visible;
        log::info!(
            "engine: reference lens {}",
            if self.selection.reference_visible { "shown" } else { "hidden" }
        );
        self.sync_layer(Lens::Reference);
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Distinct countries in first-seen order, for the dropdown.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn total(&self) -> &Series {
        &self.total
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// What a lens currently shows, `None` when nothing is drawn for it.
    pub fn rendered(&self, lens: Lens) -> Option<&Series> {
        self.rendered.get(&lens)
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    fn lens_series(&self, lens: Lens) -> Series {
        let medal = self.config.medal;
        match lens {
            Lens::Total => self.total.clone(),
            Lens::Country => match &self.selection.selected_country {
                Some(country) => aggregate_by_year(filter_by_country(&self.records, country), medal),
                None => Series::empty(),
            },
            Lens::Reference if self.selection.reference_visible => {
                aggregate_by_year(filter_by_country(&self.records, REFERENCE_COUNTRY), medal)
            }
            Lens::Reference => Series::empty(),
        }
    }

    /// Bring one layer in line with the current selection.
    fn sync_layer(&mut self, lens: Lens) {
        let next = self.lens_series(lens);
        let rendered = self.rendered.remove(&lens).unwrap_or_default();

        // An empty lens draws nothing at all, not even an empty line.
        if next.is_empty() {
            if !rendered.is_empty() {
                log::debug!("engine: clearing {:?} layer", lens);
                self.adapter.clear_layer(lens);
            }
            return;
        }

        let patch = reconcile(&rendered, &next);
        if !patch.is_noop() {
            log::debug!(
                "engine: {:?} layer +{} ~{} -{}",
                lens,
                patch.enter.len(),
                patch.update.len(),
                patch.exit.len()
            );
            let style = LayerStyle::for_lens(lens, &self.config);
            self.adapter.render_layer(&LayerUpdate {
                style: &style,
                series: &next,
                patch: &patch,
            });
        }
        self.rendered.insert(lens, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oly_medals::MedalType;

    /// Keeps a retained model of every layer by applying the patches it
    /// receives, so tests can check what a real adapter would be showing.
    #[derive(Default)]
    struct RecordingAdapter {
        frame: Option<ChartFrame>,
        layers: BTreeMap<Lens, Series>,
        lines: BTreeMap<Lens, Series>,
        styles: BTreeMap<Lens, LayerStyle>,
        calls: usize,
    }

    impl RenderAdapter for RecordingAdapter {
        fn mount(&mut self, frame: &ChartFrame) -> anyhow::Result<()> {
            self.frame = Some(frame.clone());
            Ok(())
        }

        fn render_layer(&mut self, update: &LayerUpdate<'_>) {
            let lens = update.style.lens;
            let current = self.layers.remove(&lens).unwrap_or_default();
            self.layers.insert(lens, update.patch.apply(&current));
            self.lines.insert(lens, update.series.clone());
            self.styles.insert(lens, update.style.clone());
            self.calls += 1;
        }

        fn clear_layer(&mut self, lens: Lens) {
            self.layers.remove(&lens);
            self.lines.remove(&lens);
            self.calls += 1;
        }
    }

    struct MissingMountPoint;

    impl RenderAdapter for MissingMountPoint {
        fn mount(&mut self, _frame: &ChartFrame) -> anyhow::Result<()> {
            anyhow::bail!("mount point #chart not found")
        }
        fn render_layer(&mut self, _update: &LayerUpdate<'_>) {}
        fn clear_layer(&mut self, _lens: Lens) {}
    }

    fn rows() -> Vec<MedalRecord> {
        vec![
            MedalRecord::new(1996, "USA", "Atlanta", Some(MedalType::Gold)),
            MedalRecord::new(1996, "USA", "Atlanta", Some(MedalType::Silver)),
            MedalRecord::new(1996, "FRA", "Atlanta", Some(MedalType::Gold)),
            MedalRecord::new(2000, "USA", "Sydney", Some(MedalType::Gold)),
            MedalRecord::new(2000, "GER", "Sydney", Some(MedalType::Bronze)),
        ]
    }

    fn engine() -> ChartEngine<RecordingAdapter> {
        ChartEngine::new(ChartConfig::gold(), rows(), RecordingAdapter::default()).unwrap()
    }

    fn shown(engine: &ChartEngine<RecordingAdapter>, lens: Lens) -> Option<Series> {
        let adapter = engine.adapter();
        assert_eq!(adapter.layers.get(&lens), adapter.lines.get(&lens));
        adapter.layers.get(&lens).cloned()
    }

    #[test]
    fn initial_state() {
        let engine = engine();
        assert_eq!(engine.countries(), &["USA", "FRA", "GER"]);
        assert_eq!(
            engine.selection(),
            &SelectionState {
                selected_country: Some("USA".to_string()),
                reference_visible: false,
            }
        );

        let frame = engine.adapter().frame.clone().unwrap();
        assert_eq!(frame.years, vec![1996, 2000]);
        assert_eq!(frame.y_max, 2);
        assert_eq!(frame.legend.len(), 3);

        assert_eq!(shown(&engine, Lens::Total).as_ref(), Some(engine.total()));
        assert_eq!(shown(&engine, Lens::Country).map(|s| s.years()), Some(vec![1996, 2000]));
        assert!(shown(&engine, Lens::Reference).is_none());
    }

    #[test]
    fn select_country_replaces_layer() {
        let mut engine = engine();
        engine.select_country("FRA");
        let fra = shown(&engine, Lens::Country).unwrap();
        assert_eq!(fra.points().len(), 1);
        assert_eq!(fra.get(1996).map(|p| p.count), Some(1));
        // FRA has no rows in 2000, so no point rather than a zero point
        assert!(fra.get(2000).is_none());
        assert_eq!(engine.rendered(Lens::Country), Some(&fra));
    }

    #[test]
    fn select_country_is_idempotent() {
        let mut once = engine();
        once.select_country("GER");
        let mut twice = engine();
        twice.select_country("GER");
        let calls = twice.adapter().calls;
        twice.select_country("GER");

        assert_eq!(shown(&once, Lens::Country), shown(&twice, Lens::Country));
        assert_eq!(once.selection(), twice.selection());
        // nothing changed, so nothing was redrawn
        assert_eq!(twice.adapter().calls, calls);
    }

    #[test]
    fn country_without_rows_renders_nothing() {
        let mut engine = engine();
        engine.select_country("JAM");
        assert!(shown(&engine, Lens::Country).is_none());
        assert!(engine.rendered(Lens::Country).is_none());
        assert_eq!(engine.selection().selected_country.as_deref(), Some("JAM"));

        engine.select_country("FRA");
        assert!(shown(&engine, Lens::Country).is_some());
    }

    #[test]
    fn toggle_reference_on_and_off() {
        let mut engine = engine();
        let before: Vec<_> = Lens::ALL.iter().map(|l| shown(&engine, *l)).collect();

        engine.toggle_reference();
        assert!(engine.selection().reference_visible);
        let usa = shown(&engine, Lens::Reference).unwrap();
        assert_eq!(usa.get(1996).map(|p| p.count), Some(1));
        assert_eq!(usa.get(2000).map(|p| p.count), Some(1));

        engine.toggle_reference();
        assert!(!engine.selection().reference_visible);
        let after: Vec<_> = Lens::ALL.iter().map(|l| shown(&engine, *l)).collect();
        assert_eq!(before, after);
        assert!(engine.rendered(Lens::Reference).is_none());
    }

    #[test]
    fn reference_is_independent_of_selection() {
        let mut engine = engine();
        engine.toggle_reference();
        engine.select_country("FRA");
        assert!(shown(&engine, Lens::Reference).is_some());
        assert_eq!(shown(&engine, Lens::Country).map(|s| s.years()), Some(vec![1996]));
    }

    #[test]
    fn layer_styles_follow_config() {
        let mut engine = engine();
        engine.toggle_reference();
        let styles = &engine.adapter().styles;
        assert_eq!(styles[&Lens::Total].labels, LabelMode::Always);
        assert_eq!(styles[&Lens::Total].tooltip, Some(TooltipMode::Venue));
        assert_eq!(styles[&Lens::Country].color, "indianred");
        assert_eq!(styles[&Lens::Country].labels, LabelMode::OnHover);
        assert_eq!(styles[&Lens::Reference].color, "steelblue");
        assert_eq!(styles[&Lens::Reference].class_prefix, "usa");
    }

    #[test]
    fn generic_total_has_count_tooltip_and_no_labels() {
        let engine = ChartEngine::new(
            ChartConfig::generic(MedalType::Gold),
            rows(),
            RecordingAdapter::default(),
        )
        .unwrap();
        let style = &engine.adapter().styles[&Lens::Total];
        assert_eq!(style.labels, LabelMode::None);
        assert_eq!(style.tooltip, Some(TooltipMode::Count));
        assert_eq!(style.count_label, "Gold Medals");
        assert!(engine.adapter().frame.as_ref().unwrap().legend.is_empty());
    }

    #[test]
    fn empty_dataset_is_not_an_error() {
        let engine =
            ChartEngine::new(ChartConfig::silver(), Vec::new(), RecordingAdapter::default()).unwrap();
        assert!(engine.countries().is_empty());
        assert!(engine.selection().selected_country.is_none());
        assert!(engine.total().is_empty());
        assert!(Lens::ALL.iter().all(|l| shown(&engine, *l).is_none()));
    }

    #[test]
    fn mount_failure_is_fatal() {
        let err = ChartEngine::new(ChartConfig::gold(), rows(), MissingMountPoint)
            .err()
            .expect("mount failure should abort engine creation");
        assert!(format!("{:#}", err).contains("mount point #chart not found"));
    }
}
