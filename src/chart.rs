//! Chart surface lifecycle.
//!
//! A [`ChartSurface`] is the data the line chart draws from: time labels, one
//! dataset per series and the vertical axis bounds. [`ChartRenderer`] owns at
//! most one surface. A full render discards the current surface and builds a
//! new instance (dropping any retained plot state such as zoom memory), while
//! an update refreshes the existing instance in place.

use crate::appearance::{AppearanceConfig, AxisBounds};
use crate::color::Rgba;
use crate::series::TimeSeries;
use crate::state::SeriesKind;

/// Width of plotted lines in points
pub const LINE_WIDTH: f32 = 2.0;

/// Fraction of the data span added above and below when auto-fitting
pub const AUTO_FIT_GRACE: f64 = 0.05;

/// Axis titles
pub const X_AXIS_TITLE: &str = "Time (seconds)";
pub const Y_AXIS_TITLE: &str = "Control Signal";

/// How an update is presented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Regular redraw, used after styling changes
    #[default]
    Default,
    /// Redraw without transition, used for live ticks
    None,
}

/// One plotted series
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub kind: SeriesKind,
    pub points: Vec<[f64; 2]>,
    pub border: Rgba,
    pub fill: Rgba,
    pub width: f32,
    /// Point markers are hidden
    pub show_points: bool,
}

impl Dataset {
    fn build(kind: SeriesKind, series: &TimeSeries, appearance: &AppearanceConfig) -> Self {
        let style = appearance.style(kind);
        Self {
            kind,
            points: series.points(kind),
            border: style.border,
            fill: style.fill,
            width: LINE_WIDTH,
            show_points: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// A constructed chart instance
#[derive(Clone, Debug)]
pub struct ChartSurface {
    instance: u64,
    labels: Vec<u64>,
    datasets: Vec<Dataset>,
    y_bounds: Option<AxisBounds>,
    last_mode: UpdateMode,
    update_count: u64,
}

impl ChartSurface {
    fn build(instance: u64, series: &TimeSeries, appearance: &AppearanceConfig) -> Self {
        Self {
            instance,
            labels: series.labels().iter().copied().collect(),
            datasets: vec![
                Dataset::build(SeriesKind::Mv, series, appearance),
                Dataset::build(SeriesKind::Output, series, appearance),
            ],
            y_bounds: appearance.y_bounds(),
            last_mode: UpdateMode::Default,
            update_count: 0,
        }
    }

    /// Instance number, unique per full render
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Plot widget id; changes on every full render
    pub fn plot_id(&self) -> String {
        format!("control_signal_chart_{}", self.instance)
    }

    pub fn labels(&self) -> &[u64] {
        &self.labels
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn dataset(&self, kind: SeriesKind) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.kind == kind)
    }

    /// Explicit vertical bounds, if any
    pub fn y_bounds(&self) -> Option<AxisBounds> {
        self.y_bounds
    }

    pub fn last_mode(&self) -> UpdateMode {
        self.last_mode
    }

    /// Number of in-place updates since this instance was built
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Horizontal range covering exactly the current labels
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = *self.labels.first()? as f64;
        let last = *self.labels.last()? as f64;
        if first < last {
            Some((first, last))
        } else {
            Some((first - 0.5, last + 0.5))
        }
    }

    /// Vertical range to display: explicit bounds or a fit of the data
    pub fn y_range(&self) -> Option<(f64, f64)> {
        if let Some(bounds) = self.y_bounds {
            return Some((bounds.min, bounds.max));
        }
        let (lo, hi) = self
            .datasets
            .iter()
            .flat_map(|d| d.points.iter().map(|p| p[1]))
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        let grace = ((hi - lo) * AUTO_FIT_GRACE).max(0.5);
        Some((lo - grace, hi + grace))
    }

    fn refresh_data(&mut self, series: &TimeSeries) {
        self.labels.clear();
        self.labels.extend(series.labels().iter().copied());
        for dataset in &mut self.datasets {
            dataset.points = series.points(dataset.kind);
        }
    }

    fn refresh_style(&mut self, appearance: &AppearanceConfig) {
        for dataset in &mut self.datasets {
            let style = appearance.style(dataset.kind);
            dataset.border = style.border;
            dataset.fill = style.fill;
        }
        self.y_bounds = appearance.y_bounds();
    }
}

/// Owner of the chart surface
#[derive(Debug, Default)]
pub struct ChartRenderer {
    surface: Option<ChartSurface>,
    next_instance: u64,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any existing surface and build a new one
    pub fn render(&mut self, series: &TimeSeries, appearance: &AppearanceConfig) -> &ChartSurface {
        if let Some(old) = self.surface.take() {
            tracing::debug!("Destroying chart instance {}", old.instance);
        }
        let instance = self.next_instance;
        self.next_instance += 1;
        tracing::debug!(
            "Rendering chart instance {} with {} points",
            instance,
            series.len()
        );
        self.surface
            .insert(ChartSurface::build(instance, series, appearance))
    }

    /// Refresh the current surface from the buffer.
    ///
    /// Returns `false` when there is no surface to update.
    pub fn update(&mut self, series: &TimeSeries, mode: UpdateMode) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            tracing::warn!("Chart update requested before the chart was rendered");
            return false;
        };
        surface.refresh_data(series);
        surface.last_mode = mode;
        surface.update_count += 1;
        true
    }

    /// Copy styling (colors, explicit bounds) onto the current surface.
    ///
    /// Returns `false` when there is no surface to restyle.
    pub fn restyle(&mut self, appearance: &AppearanceConfig) -> bool {
        match self.surface.as_mut() {
            Some(surface) => {
                surface.refresh_style(appearance);
                true
            }
            None => false,
        }
    }

    pub fn surface(&self) -> Option<&ChartSurface> {
        self.surface.as_ref()
    }
}
