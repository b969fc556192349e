//! Core dashboard state types and constants.
//!
//! This module contains the fundamental enums shared by the model and the UI:
//! the two plant orders shown as tabs, the plant choices, the loop mode toggle,
//! the discharge state and a few presentation helpers.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

// ============================================================================
// Constants
// ============================================================================

/// Number of samples kept in the sliding window (one per second)
pub const WINDOW_CAPACITY: usize = 60;

/// Period of the sample tick
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long the capacitor stays in the discharging state
pub const DISCHARGE_DELAY: Duration = Duration::from_millis(3000);

/// Lower bound (inclusive) of simulated samples
pub const SAMPLE_MIN: f64 = 20.0;

/// Upper bound (exclusive) of simulated samples
pub const SAMPLE_MAX: f64 = 30.0;

/// Reference vertical window the zoom factor is applied to
pub const REFERENCE_Y_MIN: f64 = 15.0;
pub const REFERENCE_Y_MAX: f64 = 35.0;

/// Range offered by the zoom slider
pub const SCALE_RANGE: RangeInclusive<f64> = 0.5..=3.0;

/// Step of the zoom slider
pub const SCALE_STEP: f64 = 0.1;

/// Set point shown before any parameters are applied
pub const DEFAULT_SET_POINT: f64 = 25.0;

// ============================================================================
// Orders (tabs)
// ============================================================================

/// A plant order, one per dashboard tab
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr,
)]
pub enum OrderTab {
    #[default]
    #[strum(serialize = "ordem1")]
    First,
    #[strum(serialize = "ordem2")]
    Second,
}

impl OrderTab {
    /// Stable identifier of the tab content (`ordem1`, `ordem2`)
    pub fn id(&self) -> &str {
        self.as_ref()
    }

    /// Resolve a tab from its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    /// Display name for the tab button
    pub fn name(&self) -> &'static str {
        match self {
            OrderTab::First => "1st Order",
            OrderTab::Second => "2nd Order",
        }
    }

    /// Position of this tab in declaration order
    pub fn index(&self) -> usize {
        match self {
            OrderTab::First => 0,
            OrderTab::Second => 1,
        }
    }
}

// ============================================================================
// Plants
// ============================================================================

/// A selectable plant in an order's radio group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Plant {
    Plant1,
    Plant2,
}

impl Plant {
    pub fn name(&self) -> &'static str {
        match self {
            Plant::Plant1 => "Plant 1",
            Plant::Plant2 => "Plant 2",
        }
    }
}

// ============================================================================
// Loop mode
// ============================================================================

/// Operating mode toggle (presentational only)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    #[default]
    Open,
    Closed,
}

impl LoopMode {
    /// Map a toggle switch position to a mode (checked = closed loop)
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            LoopMode::Closed
        } else {
            LoopMode::Open
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, LoopMode::Closed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoopMode::Open => "Open Loop",
            LoopMode::Closed => "Closed Loop",
        }
    }
}

// ============================================================================
// Discharge
// ============================================================================

/// Capacitor status of one order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DischargeState {
    #[default]
    Ready,
    Discharging,
}

impl DischargeState {
    pub fn is_ready(&self) -> bool {
        matches!(self, DischargeState::Ready)
    }

    /// Indicator class projected for this state
    pub fn indicator(&self) -> IndicatorClass {
        match self {
            DischargeState::Ready => IndicatorClass::Green,
            DischargeState::Discharging => IndicatorClass::Red,
        }
    }
}

/// Presentational class of the status indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorClass {
    Green,
    Red,
}

impl IndicatorClass {
    pub fn class_name(&self) -> &'static str {
        match self {
            IndicatorClass::Green => "status-green",
            IndicatorClass::Red => "status-red",
        }
    }

    pub fn color(&self) -> [u8; 3] {
        match self {
            IndicatorClass::Green => [46, 204, 113],
            IndicatorClass::Red => [231, 76, 60],
        }
    }
}

// ============================================================================
// Chart series
// ============================================================================

/// The two plotted series
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum SeriesKind {
    Mv,
    Output,
}

impl SeriesKind {
    /// Legend label
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Mv => "MV",
            SeriesKind::Output => "Output",
        }
    }
}

// ============================================================================
// Presentation helpers
// ============================================================================

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastType {
    #[default]
    Info,
    Success,
    Warning,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [28, 43, 71],
            ToastType::Success => [0, 153, 115],
            ToastType::Warning => [253, 193, 73],
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Warning => [30, 30, 30],
            _ => [255, 255, 255],
        }
    }
}

/// Font scale preference for UI elements
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub enum FontScale {
    /// Smaller fonts (0.85x)
    Small,
    /// Default size (1.0x)
    #[default]
    Medium,
    /// Larger fonts (1.2x)
    Large,
}

impl FontScale {
    pub fn multiplier(&self) -> f32 {
        match self {
            FontScale::Small => 0.85,
            FontScale::Medium => 1.0,
            FontScale::Large => 1.2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FontScale::Small => "Small",
            FontScale::Medium => "Medium",
            FontScale::Large => "Large",
        }
    }

    pub fn all() -> &'static [FontScale] {
        &[FontScale::Small, FontScale::Medium, FontScale::Large]
    }
}
