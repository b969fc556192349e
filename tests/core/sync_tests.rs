//! Tests for tab and widget state synchronization
//!
//! Tests cover:
//! - Exactly one active tab
//! - Re-deriving a tab's view on activation
//! - Loop mode label emphasis
//! - Plant selection gating

use strum::IntoEnumIterator;

use signal_monitor::state::{DischargeState, IndicatorClass, LoopMode, OrderTab, Plant};
use signal_monitor::sync::{CursorStyle, RadioGroup, SelectionError, TabSet, TabStatus};

fn active_count(tabs: &TabSet) -> usize {
    OrderTab::iter()
        .filter(|&tab| tabs.status(tab) == TabStatus::Active)
        .count()
}

// ============================================
// Activation Tests
// ============================================

#[test]
fn test_exactly_one_tab_active() {
    let mut tabs = TabSet::new();
    assert_eq!(active_count(&tabs), 1);

    for tab in [OrderTab::Second, OrderTab::First, OrderTab::First, OrderTab::Second] {
        tabs.activate(tab);
        assert_eq!(active_count(&tabs), 1, "Only {:?} should be active", tab);
        assert!(tabs.is_active(tab));
    }
}

#[test]
fn test_activate_returns_previous() {
    let mut tabs = TabSet::new();
    assert_eq!(tabs.activate(OrderTab::Second), OrderTab::First);
    assert_eq!(tabs.activate(OrderTab::First), OrderTab::Second);
}

#[test]
fn test_activation_rederives_radio_state() {
    let mut tabs = TabSet::new();
    tabs.set_discharge(OrderTab::Second, DischargeState::Discharging);

    tabs.activate(OrderTab::Second);
    let view = tabs.view(OrderTab::Second);
    assert!(!view.radios.is_enabled());
    assert_eq!(view.indicator, IndicatorClass::Red);

    tabs.activate(OrderTab::First);
    assert_eq!(tabs.status(OrderTab::Second), TabStatus::Inactive);
    assert!(tabs.view(OrderTab::First).radios.is_enabled());
}

#[test]
fn test_activate_by_id() {
    let mut tabs = TabSet::new();
    assert_eq!(tabs.activate_id("ordem2"), Some(OrderTab::Second));
    assert!(tabs.is_active(OrderTab::Second));
}

#[test]
fn test_unknown_id_is_noop() {
    let mut tabs = TabSet::new();
    assert_eq!(tabs.activate_id("ordem9"), None);
    assert!(tabs.is_active(OrderTab::First), "Active tab should not change");
    assert_eq!(active_count(&tabs), 1);
}

// ============================================
// Loop Mode Tests
// ============================================

#[test]
fn test_loop_mode_labels_follow_toggle() {
    let mut tabs = TabSet::new();
    tabs.set_loop_mode(OrderTab::First, LoopMode::Closed);

    let labels = tabs.view(OrderTab::First).labels;
    assert!(labels.closed_active);
    assert!(!labels.open_active);
    assert_eq!(tabs.order(OrderTab::Second).loop_mode, LoopMode::Open);

    tabs.set_loop_mode(OrderTab::First, LoopMode::Open);
    assert!(tabs.view(OrderTab::First).labels.open_active);
}

// ============================================
// Radio Group Tests
// ============================================

#[test]
fn test_radio_group_enable_twice_equals_once() {
    let mut once = RadioGroup::default();
    once.set_enabled(false);
    once.set_enabled(true);

    let mut twice = once.clone();
    twice.set_enabled(true);

    assert_eq!(once, twice);
    assert!(twice
        .options()
        .iter()
        .all(|o| !o.disabled && !o.label_disabled && o.cursor == CursorStyle::Pointer));
}

#[test]
fn test_radio_group_has_one_option_per_plant() {
    let group = RadioGroup::default();
    let plants: Vec<Plant> = group.options().iter().map(|o| o.plant).collect();
    assert_eq!(plants, Plant::iter().collect::<Vec<_>>());
}

// ============================================
// Plant Selection Tests
// ============================================

#[test]
fn test_select_plant_when_ready() {
    let mut tabs = TabSet::new();
    tabs.select_plant(OrderTab::First, Plant::Plant1).unwrap();
    assert_eq!(tabs.order(OrderTab::First).plant, Some(Plant::Plant1));
}

#[test]
fn test_select_plant_refused_while_discharging() {
    let mut tabs = TabSet::new();
    tabs.select_plant(OrderTab::First, Plant::Plant1).unwrap();
    tabs.set_discharge(OrderTab::First, DischargeState::Discharging);

    assert_eq!(
        tabs.select_plant(OrderTab::First, Plant::Plant2),
        Err(SelectionError::Discharging)
    );
    assert_eq!(
        tabs.order(OrderTab::First).plant,
        Some(Plant::Plant1),
        "Selection should be unchanged"
    );

    tabs.set_discharge(OrderTab::First, DischargeState::Ready);
    assert!(tabs.select_plant(OrderTab::First, Plant::Plant2).is_ok());
}
