//! Chart appearance: line colors and the vertical zoom window.
//!
//! Appearance is independent of the plotted data. Changing a line color sets
//! the border to the picked color and derives a translucent fill from it; the
//! zoom factor narrows or widens a fixed reference window around its center.

use thiserror::Error;

use crate::color::{ColorError, Rgba};
use crate::state::{SeriesKind, REFERENCE_Y_MAX, REFERENCE_Y_MIN};

/// Alpha of the default border colors
pub const BORDER_ALPHA: f32 = 0.8;

/// Alpha of every fill color
pub const FILL_ALPHA: f32 = 0.2;

/// Default MV color (teal)
pub const DEFAULT_MV_COLOR: Rgba = Rgba::new(0, 255, 192, BORDER_ALPHA);

/// Default Output color (orange)
pub const DEFAULT_OUTPUT_COLOR: Rgba = Rgba::new(219, 127, 38, BORDER_ALPHA);

/// Errors raised by appearance changes
#[derive(Debug, Error, PartialEq)]
pub enum AppearanceError {
    #[error("Scale factor must be a positive number, got {0}")]
    InvalidScale(f64),

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Explicit vertical axis bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Visible window for a zoom factor applied to the reference window
    pub fn zoomed(scale: f64) -> Self {
        let center = (REFERENCE_Y_MIN + REFERENCE_Y_MAX) / 2.0;
        let half_range = (REFERENCE_Y_MAX - REFERENCE_Y_MIN) / (2.0 * scale);
        Self {
            min: center - half_range,
            max: center + half_range,
        }
    }
}

/// Border and fill colors of one series
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub border: Rgba,
    pub fill: Rgba,
}

impl SeriesStyle {
    /// Style whose fill is the border color at [`FILL_ALPHA`]
    pub fn from_border(border: Rgba) -> Self {
        Self {
            border,
            fill: border.with_alpha(FILL_ALPHA),
        }
    }

    pub fn default_for(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Mv => Self::from_border(DEFAULT_MV_COLOR),
            SeriesKind::Output => Self::from_border(DEFAULT_OUTPUT_COLOR),
        }
    }
}

/// Styling state of the chart
#[derive(Clone, Debug, PartialEq)]
pub struct AppearanceConfig {
    mv: SeriesStyle,
    output: SeriesStyle,
    scale: f64,
    y_bounds: Option<AxisBounds>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            mv: SeriesStyle::default_for(SeriesKind::Mv),
            output: SeriesStyle::default_for(SeriesKind::Output),
            scale: 1.0,
            y_bounds: None,
        }
    }
}

impl AppearanceConfig {
    pub fn style(&self, kind: SeriesKind) -> &SeriesStyle {
        match kind {
            SeriesKind::Mv => &self.mv,
            SeriesKind::Output => &self.output,
        }
    }

    fn style_mut(&mut self, kind: SeriesKind) -> &mut SeriesStyle {
        match kind {
            SeriesKind::Mv => &mut self.mv,
            SeriesKind::Output => &mut self.output,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Explicit vertical bounds, `None` when the chart auto-fits
    pub fn y_bounds(&self) -> Option<AxisBounds> {
        self.y_bounds
    }

    /// Text shown next to the zoom slider
    pub fn scale_label(&self) -> String {
        match self.y_bounds {
            Some(_) => format!("{:.1}x", self.scale),
            None => "1x".to_string(),
        }
    }

    /// Hex value to preload into a series color picker
    pub fn picker_hex(&self, kind: SeriesKind) -> String {
        self.style(kind).border.to_hex()
    }

    /// Set a series line color from picker input and derive its fill.
    ///
    /// On error the current style is left unchanged.
    pub fn set_line_color(
        &mut self,
        kind: SeriesKind,
        color: &str,
    ) -> Result<&SeriesStyle, AppearanceError> {
        let border: Rgba = color.parse()?;
        let style = self.style_mut(kind);
        *style = SeriesStyle::from_border(border);
        Ok(style)
    }

    /// Apply a zoom factor and return the resulting explicit bounds
    pub fn set_scale(&mut self, scale: f64) -> Result<AxisBounds, AppearanceError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(AppearanceError::InvalidScale(scale));
        }
        let bounds = AxisBounds::zoomed(scale);
        self.scale = scale;
        self.y_bounds = Some(bounds);
        Ok(bounds)
    }

    /// Restore default colors and scale, and clear explicit bounds
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
