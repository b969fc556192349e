//! Tests for the dashboard session
//!
//! Tests cover:
//! - Startup state and the initial render
//! - The 1 Hz tick and readouts
//! - Discharge flow through the tab views
//! - Parameter apply
//! - Appearance changes and reset

use std::time::Instant;

use crate::common::{after_millis, after_secs, assert_consecutive, seeded_session};
use signal_monitor::appearance::AppearanceError;
use signal_monitor::chart::UpdateMode;
use signal_monitor::color::ColorError;
use signal_monitor::discharge::DischargeTrigger;
use signal_monitor::state::{IndicatorClass, LoopMode, OrderTab, Plant, SeriesKind};
use signal_monitor::sync::{SelectionError, TabStatus};

// ============================================
// Startup Tests
// ============================================

#[test]
fn test_startup_state() {
    let session = seeded_session(Instant::now());

    assert_eq!(session.series().len(), 60);
    assert_eq!(session.active_tab(), OrderTab::First);
    assert_eq!(session.tabs().status(OrderTab::Second), TabStatus::Inactive);
    assert_eq!(session.tick_count(), 0);

    let surface = session.surface().expect("Chart should be rendered at startup");
    assert_eq!(surface.labels().len(), 60);
    assert_eq!(surface.update_count(), 0);
}

#[test]
fn test_startup_readouts() {
    let session = seeded_session(Instant::now());
    let latest = session.series().latest().unwrap();
    let readouts = session.readouts();

    assert_eq!(readouts.set_point, "25.0");
    assert_eq!(readouts.mv, format!("{:.1}", latest.mv));
    assert_eq!(readouts.output, format!("{:.1}", latest.output));
    assert_eq!(readouts.time, "0 s");
}

// ============================================
// Tick Tests
// ============================================

#[test]
fn test_ticks_keep_window_full_and_consecutive() {
    let start = Instant::now();
    let mut session = seeded_session(start);

    for k in 1..=90 {
        session.poll(after_secs(start, k));
    }

    assert_eq!(session.tick_count(), 90);
    assert_eq!(session.series().len(), 60);
    assert_eq!(session.series().newest_label(), Some(149));
    assert_eq!(session.series().oldest_label(), Some(90));
    let labels: Vec<u64> = session.series().labels().iter().copied().collect();
    assert_consecutive(&labels);
}

#[test]
fn test_tick_updates_chart_in_place() {
    let start = Instant::now();
    let mut session = seeded_session(start);
    let instance = session.surface().unwrap().instance();

    session.tick();

    let surface = session.surface().unwrap();
    assert_eq!(surface.instance(), instance, "Ticks must not rebuild the chart");
    assert_eq!(surface.last_mode(), UpdateMode::None);
    assert_eq!(surface.labels().last(), Some(&60));
    assert_eq!(session.readouts().time, "1 s");
}

#[test]
fn test_tick_readouts_match_latest_sample() {
    let mut session = seeded_session(Instant::now());
    session.tick();
    let latest = session.series().latest().unwrap();
    assert_eq!(session.readouts().mv, format!("{:.1}", latest.mv));
    assert_eq!(session.readouts().output, format!("{:.1}", latest.output));
}

#[test]
fn test_poll_catches_up_missed_ticks() {
    let start = Instant::now();
    let mut session = seeded_session(start);
    let outcome = session.poll(after_millis(start, 5500));
    assert_eq!(outcome.ticks, 5);
    assert_eq!(session.readouts().time, "5 s");
}

// ============================================
// Discharge Flow Tests
// ============================================

#[test]
fn test_discharge_disables_then_reenables_radios() {
    let start = Instant::now();
    let mut session = seeded_session(start);

    assert_eq!(
        session.trigger_discharge(OrderTab::First, start),
        DischargeTrigger::Started
    );
    let view = session.tabs().view(OrderTab::First);
    assert_eq!(view.indicator, IndicatorClass::Red);
    assert!(!view.radios.is_enabled(), "Radios should lock while discharging");
    assert_eq!(
        session.select_plant(OrderTab::First, Plant::Plant2),
        Err(SelectionError::Discharging)
    );

    let outcome = session.poll(after_millis(start, 2999));
    assert!(outcome.recharged.is_empty());
    assert!(session.is_discharging(OrderTab::First));

    let outcome = session.poll(after_secs(start, 3));
    assert_eq!(outcome.recharged, vec![OrderTab::First]);
    let view = session.tabs().view(OrderTab::First);
    assert_eq!(view.indicator, IndicatorClass::Green);
    assert!(view.radios.is_enabled());
    assert!(session.select_plant(OrderTab::First, Plant::Plant2).is_ok());
}

#[test]
fn test_retrigger_extends_discharge() {
    let start = Instant::now();
    let mut session = seeded_session(start);
    session.trigger_discharge(OrderTab::Second, start);
    assert_eq!(
        session.trigger_discharge(OrderTab::Second, after_secs(start, 2)),
        DischargeTrigger::Restarted
    );

    assert!(session.poll(after_secs(start, 3)).recharged.is_empty());
    assert!(session.is_discharging(OrderTab::Second));
    assert_eq!(
        session.poll(after_secs(start, 5)).recharged,
        vec![OrderTab::Second]
    );
}

#[test]
fn test_discharge_on_inactive_tab_survives_switching() {
    let start = Instant::now();
    let mut session = seeded_session(start);
    session.trigger_discharge(OrderTab::First, start);
    session.activate_tab(OrderTab::Second);

    assert!(session.tabs().view(OrderTab::Second).radios.is_enabled());
    session.activate_tab(OrderTab::First);
    assert!(!session.tabs().view(OrderTab::First).radios.is_enabled());
}

// ============================================
// Controls Tests
// ============================================

#[test]
fn test_loop_mode_is_per_order() {
    let mut session = seeded_session(Instant::now());
    session.set_loop_mode(OrderTab::Second, LoopMode::Closed);
    assert_eq!(session.tabs().order(OrderTab::Second).loop_mode, LoopMode::Closed);
    assert_eq!(session.tabs().order(OrderTab::First).loop_mode, LoopMode::Open);
}

#[test]
fn test_unknown_tab_id_is_ignored() {
    let mut session = seeded_session(Instant::now());
    assert_eq!(session.activate_tab_id("missing"), None);
    assert_eq!(session.active_tab(), OrderTab::First);
}

#[test]
fn test_apply_params_updates_set_point() {
    let mut session = seeded_session(Instant::now());
    session.pid_inputs_mut(OrderTab::First).set_point = "30.26".to_string();
    session.pid_inputs_mut(OrderTab::First).p = "2.5".to_string();

    let params = session.apply_params(OrderTab::First);

    assert_eq!(params.set_point, 30.26);
    assert_eq!(params.p, 2.5);
    assert_eq!(session.readouts().set_point, "30.3");
    assert_eq!(session.tabs().order(OrderTab::First).applied, Some(params));
}

#[test]
fn test_apply_invalid_set_point_shows_nan() {
    let mut session = seeded_session(Instant::now());
    session.pid_inputs_mut(OrderTab::Second).set_point = "abc".to_string();
    let params = session.apply_params(OrderTab::Second);
    assert!(params.set_point.is_nan());
    assert_eq!(session.readouts().set_point, "NaN");
}

// ============================================
// Appearance Tests
// ============================================

#[test]
fn test_scale_change_updates_surface_bounds() {
    let mut session = seeded_session(Instant::now());
    let instance = session.surface().unwrap().instance();

    session.set_scale(2.0).unwrap();

    let surface = session.surface().unwrap();
    assert_eq!(surface.instance(), instance);
    assert_eq!(surface.y_range(), Some((20.0, 30.0)));
    assert_eq!(surface.last_mode(), UpdateMode::Default);
    assert_eq!(session.appearance().scale_label(), "2.0x");
}

#[test]
fn test_invalid_color_keeps_surface_style() {
    let mut session = seeded_session(Instant::now());
    let result = session.set_line_color(SeriesKind::Mv, "not-a-color");
    assert!(matches!(
        result,
        Err(AppearanceError::Color(ColorError::Unrecognized(_)))
    ));
    assert_eq!(
        session
            .surface()
            .unwrap()
            .dataset(SeriesKind::Mv)
            .unwrap()
            .border
            .to_string(),
        "rgba(0,255,192,0.8)"
    );
}

#[test]
fn test_reset_appearance_rebuilds_chart() {
    let mut session = seeded_session(Instant::now());
    let first_id = session.surface().unwrap().plot_id();
    session.set_line_color(SeriesKind::Output, "#000000").unwrap();
    session.set_scale(3.0).unwrap();

    session.reset_appearance();

    let surface = session.surface().unwrap();
    assert_ne!(surface.plot_id(), first_id, "Reset should create a new chart");
    assert_eq!(surface.y_bounds(), None);
    assert_eq!(
        surface.dataset(SeriesKind::Output).unwrap().border.to_string(),
        "rgba(219,127,38,0.8)"
    );
    assert_eq!(surface.labels().len(), 60, "Data survives a reset");
}
