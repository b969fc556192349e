//! Active tab and cross-widget state synchronization.
//!
//! [`TabSet`] is the source of truth for everything a tab shows: which tab is
//! active, each order's discharge state, loop mode and plant selection. The
//! widget projections ([`TabView`]: indicator class, radio group, toggle label
//! emphasis) are re-derived from that state and never consulted for
//! decisions.

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::params::{PidInputs, PidParams};
use crate::state::{DischargeState, IndicatorClass, LoopMode, OrderTab, Plant};

// ============================================================================
// Error Types
// ============================================================================

/// Reasons a plant selection is refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Cannot change plant while the capacitor is discharging")]
    Discharging,
}

// ============================================================================
// Widget projections
// ============================================================================

/// Activation status of a tab
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabStatus {
    Inactive,
    Active,
}

/// Mouse cursor shown over a radio label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    Pointer,
    NotAllowed,
}

/// A radio input together with its label state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadioOption {
    pub plant: Plant,
    pub disabled: bool,
    /// Label carries the disabled style
    pub label_disabled: bool,
    pub cursor: CursorStyle,
}

/// All plant radios of one order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioGroup {
    options: Vec<RadioOption>,
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self {
            options: Plant::iter()
                .map(|plant| RadioOption {
                    plant,
                    disabled: false,
                    label_disabled: false,
                    cursor: CursorStyle::Pointer,
                })
                .collect(),
        }
    }
}

impl RadioGroup {
    /// Enable or disable every radio and restyle its label. Idempotent.
    pub fn set_enabled(&mut self, enabled: bool) {
        for option in &mut self.options {
            option.disabled = !enabled;
            option.label_disabled = !enabled;
            option.cursor = if enabled {
                CursorStyle::Pointer
            } else {
                CursorStyle::NotAllowed
            };
        }
    }

    /// True when every radio accepts input
    pub fn is_enabled(&self) -> bool {
        self.options.iter().all(|o| !o.disabled)
    }

    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }
}

/// Emphasis of the two loop mode labels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleLabels {
    pub open_active: bool,
    pub closed_active: bool,
}

impl ToggleLabels {
    pub fn for_mode(mode: LoopMode) -> Self {
        Self {
            open_active: !mode.is_closed(),
            closed_active: mode.is_closed(),
        }
    }
}

/// Derived visual state of a tab's content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabView {
    pub status: TabStatus,
    pub indicator: IndicatorClass,
    pub radios: RadioGroup,
    pub labels: ToggleLabels,
}

impl Default for TabView {
    fn default() -> Self {
        Self {
            status: TabStatus::Inactive,
            indicator: IndicatorClass::Green,
            radios: RadioGroup::default(),
            labels: ToggleLabels::for_mode(LoopMode::default()),
        }
    }
}

// ============================================================================
// Order state
// ============================================================================

/// Source-of-truth state of one order
#[derive(Clone, Debug, Default)]
pub struct OrderState {
    pub discharge: DischargeState,
    pub loop_mode: LoopMode,
    pub plant: Option<Plant>,
    pub inputs: PidInputs,
    /// Parameters captured by the last apply
    pub applied: Option<PidParams>,
}

// ============================================================================
// TabSet
// ============================================================================

/// The set of order tabs, exactly one of which is active
#[derive(Debug)]
pub struct TabSet {
    active: OrderTab,
    orders: [OrderState; 2],
    views: [TabView; 2],
}

impl Default for TabSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TabSet {
    /// All tabs ready and open-loop, first declared tab active
    pub fn new() -> Self {
        let mut tabs = Self {
            active: OrderTab::default(),
            orders: Default::default(),
            views: Default::default(),
        };
        for tab in OrderTab::iter() {
            tabs.sync_view(tab);
        }
        tabs.activate(OrderTab::default());
        tabs
    }

    pub fn active(&self) -> OrderTab {
        self.active
    }

    pub fn is_active(&self, tab: OrderTab) -> bool {
        self.active == tab
    }

    pub fn status(&self, tab: OrderTab) -> TabStatus {
        self.views[tab.index()].status
    }

    pub fn order(&self, tab: OrderTab) -> &OrderState {
        &self.orders[tab.index()]
    }

    pub fn view(&self, tab: OrderTab) -> &TabView {
        &self.views[tab.index()]
    }

    /// Editable parameter fields of an order
    pub fn inputs_mut(&mut self, tab: OrderTab) -> &mut PidInputs {
        &mut self.orders[tab.index()].inputs
    }

    /// Make `tab` the only active tab and re-derive its view.
    ///
    /// Returns the previously active tab.
    pub fn activate(&mut self, tab: OrderTab) -> OrderTab {
        let previous = self.active;
        for other in OrderTab::iter() {
            self.views[other.index()].status = TabStatus::Inactive;
        }
        self.active = tab;
        self.views[tab.index()].status = TabStatus::Active;
        self.sync_view(tab);
        previous
    }

    /// Activate a tab by its content id; unknown ids are ignored
    pub fn activate_id(&mut self, id: &str) -> Option<OrderTab> {
        match OrderTab::from_id(id) {
            Some(tab) => {
                self.activate(tab);
                Some(tab)
            }
            None => {
                tracing::warn!("No tab with id '{}'", id);
                None
            }
        }
    }

    /// Flip the loop mode toggle of an order
    pub fn set_loop_mode(&mut self, tab: OrderTab, mode: LoopMode) {
        self.orders[tab.index()].loop_mode = mode;
        tracing::info!("Operating mode for {}: {}", tab.name(), mode.name());
        self.sync_view(tab);
    }

    /// Select a plant, refused while the order is discharging
    pub fn select_plant(&mut self, tab: OrderTab, plant: Plant) -> Result<(), SelectionError> {
        let order = &mut self.orders[tab.index()];
        if !order.discharge.is_ready() {
            tracing::warn!("Cannot change plant while the capacitor is discharging");
            return Err(SelectionError::Discharging);
        }
        order.plant = Some(plant);
        tracing::info!("Plant selected for {}: {}", tab.name(), plant.name());
        Ok(())
    }

    /// Set an order's discharge state and re-derive its view
    pub fn set_discharge(&mut self, tab: OrderTab, state: DischargeState) {
        self.orders[tab.index()].discharge = state;
        self.sync_view(tab);
    }

    /// Record parameters captured by an apply
    pub fn record_applied(&mut self, tab: OrderTab, params: PidParams) {
        self.orders[tab.index()].applied = Some(params);
    }

    /// Re-derive indicator, radio enablement and label emphasis of `tab`
    fn sync_view(&mut self, tab: OrderTab) {
        let order = &self.orders[tab.index()];
        let view = &mut self.views[tab.index()];
        view.indicator = order.discharge.indicator();
        view.radios.set_enabled(order.discharge.is_ready());
        view.labels = ToggleLabels::for_mode(order.loop_mode);
    }
}
