//! The dashboard session.
//!
//! [`DashboardSession`] owns every piece of runtime state: the sample window
//! and its generator, the chart renderer, the appearance config, the tab set,
//! the discharge timers and the 1 Hz ticker. The UI holds one session and
//! drives it through `&mut self`, passing the current [`Instant`] to
//! [`DashboardSession::poll`] once per frame.

use std::time::Instant;

use crate::appearance::{AppearanceConfig, AppearanceError, AxisBounds};
use crate::chart::{ChartRenderer, ChartSurface, UpdateMode};
use crate::discharge::{DischargeSimulator, DischargeTrigger};
use crate::params::{format_readout, PidInputs, PidParams};
use crate::sampler::SampleGenerator;
use crate::series::TimeSeries;
use crate::state::{
    DischargeState, LoopMode, OrderTab, Plant, SeriesKind, DEFAULT_SET_POINT, TICK_INTERVAL,
};
use crate::sync::{SelectionError, TabSet};
use crate::timers::Ticker;

/// Text of the four header cards
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readouts {
    pub set_point: String,
    pub mv: String,
    pub output: String,
    pub time: String,
}

impl Default for Readouts {
    fn default() -> Self {
        Self {
            set_point: format_readout(DEFAULT_SET_POINT),
            mv: "-".to_string(),
            output: "-".to_string(),
            time: "0 s".to_string(),
        }
    }
}

/// What a poll did
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Number of ticks run
    pub ticks: u32,
    /// Orders whose capacitor recharged, earliest first
    pub recharged: Vec<OrderTab>,
}

pub struct DashboardSession {
    series: TimeSeries,
    generator: SampleGenerator,
    renderer: ChartRenderer,
    appearance: AppearanceConfig,
    tabs: TabSet,
    discharge: DischargeSimulator,
    ticker: Ticker,
    readouts: Readouts,
    tick_count: u64,
}

impl DashboardSession {
    /// Start a session with an entropy-seeded generator
    pub fn new(now: Instant) -> Self {
        Self::with_generator(SampleGenerator::new(), now)
    }

    /// Start a session: seed a full window, render the chart once and start
    /// the ticker at `now`
    pub fn with_generator(mut generator: SampleGenerator, now: Instant) -> Self {
        let series = TimeSeries::seeded(&mut generator);
        let appearance = AppearanceConfig::default();
        let mut renderer = ChartRenderer::new();
        renderer.render(&series, &appearance);

        let mut readouts = Readouts::default();
        if let Some(latest) = series.latest() {
            readouts.mv = format_readout(latest.mv);
            readouts.output = format_readout(latest.output);
        }

        tracing::info!("Dashboard started with {} seeded samples", series.len());

        Self {
            series,
            generator,
            renderer,
            appearance,
            tabs: TabSet::new(),
            discharge: DischargeSimulator::new(),
            ticker: Ticker::new(TICK_INTERVAL, now),
            readouts,
            tick_count: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------------

    /// Append one sample and refresh the chart without transition
    pub fn tick(&mut self) {
        let (mv, output) = self.generator.sample();
        let t = self.series.append(mv, output);
        self.tick_count += 1;
        self.readouts.mv = format_readout(mv);
        self.readouts.output = format_readout(output);
        self.readouts.time = format!("{} s", self.tick_count);
        self.renderer.update(&self.series, UpdateMode::None);
        tracing::debug!("Tick {}: t={} mv={:.2} output={:.2}", self.tick_count, t, mv, output);
    }

    /// Run every due tick, then complete every due discharge
    pub fn poll(&mut self, now: Instant) -> PollOutcome {
        let ticks = self.ticker.take_due(now);
        for _ in 0..ticks {
            self.tick();
        }

        let recharged = self.discharge.poll(now);
        for &tab in &recharged {
            self.tabs.set_discharge(tab, DischargeState::Ready);
            tracing::info!("Capacitor charged again (green) for {}", tab.name());
        }

        PollOutcome { ticks, recharged }
    }

    /// Earliest instant at which [`poll`](Self::poll) has work to do
    pub fn next_deadline(&self) -> Instant {
        let tick = self.ticker.next_deadline();
        match self.discharge.next_deadline() {
            Some(discharge) => tick.min(discharge),
            None => tick,
        }
    }

    // ------------------------------------------------------------------------
    // Tabs and controls
    // ------------------------------------------------------------------------

    pub fn activate_tab(&mut self, tab: OrderTab) {
        self.tabs.activate(tab);
    }

    /// Activate by content id; unknown ids are a logged no-op
    pub fn activate_tab_id(&mut self, id: &str) -> Option<OrderTab> {
        self.tabs.activate_id(id)
    }

    pub fn set_loop_mode(&mut self, tab: OrderTab, mode: LoopMode) {
        self.tabs.set_loop_mode(tab, mode);
    }

    pub fn select_plant(&mut self, tab: OrderTab, plant: Plant) -> Result<(), SelectionError> {
        self.tabs.select_plant(tab, plant)
    }

    /// Discharge the capacitor of `tab`; it recharges after the discharge delay
    pub fn trigger_discharge(&mut self, tab: OrderTab, now: Instant) -> DischargeTrigger {
        let trigger = self.discharge.trigger(tab, now);
        self.tabs.set_discharge(tab, DischargeState::Discharging);
        tracing::info!("Capacitor discharging for {}...", tab.name());
        trigger
    }

    pub fn pid_inputs_mut(&mut self, tab: OrderTab) -> &mut PidInputs {
        self.tabs.inputs_mut(tab)
    }

    /// Read the parameter fields of `tab` and show its set point
    pub fn apply_params(&mut self, tab: OrderTab) -> PidParams {
        let params = self.tabs.order(tab).inputs.capture();
        self.readouts.set_point = format_readout(params.set_point);
        self.tabs.record_applied(tab, params);
        tracing::info!(
            "Parameters applied for {}: set point={}, P={}, I={}, D={}",
            tab.name(),
            params.set_point,
            params.p,
            params.i,
            params.d
        );
        params
    }

    // ------------------------------------------------------------------------
    // Appearance
    // ------------------------------------------------------------------------

    /// Zoom the vertical axis around the reference window
    pub fn set_scale(&mut self, scale: f64) -> Result<AxisBounds, AppearanceError> {
        let bounds = self.appearance.set_scale(scale)?;
        self.renderer.restyle(&self.appearance);
        self.renderer.update(&self.series, UpdateMode::Default);
        Ok(bounds)
    }

    pub fn set_line_color(&mut self, kind: SeriesKind, color: &str) -> Result<(), AppearanceError> {
        self.appearance.set_line_color(kind, color)?;
        self.renderer.restyle(&self.appearance);
        self.renderer.update(&self.series, UpdateMode::Default);
        Ok(())
    }

    /// Restore default styling and rebuild the chart from scratch
    pub fn reset_appearance(&mut self) {
        self.appearance.reset();
        self.renderer.render(&self.series, &self.appearance);
        tracing::info!("Chart appearance reset");
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn surface(&self) -> Option<&ChartSurface> {
        self.renderer.surface()
    }

    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn active_tab(&self) -> OrderTab {
        self.tabs.active()
    }

    pub fn readouts(&self) -> &Readouts {
        &self.readouts
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Read from the order state, which the views and plant selection also use
    pub fn is_discharging(&self, tab: OrderTab) -> bool {
        !self.tabs.order(tab).discharge.is_ready()
    }
}
