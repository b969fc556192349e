//! Signal Monitor - a live control-signal dashboard written in Rust
//!
//! This library holds the dashboard model (sliding sample window, widget state
//! synchronization, discharge simulation, chart appearance) and the egui
//! user interface that projects it onto the screen.
//!
//! ## Module Structure
//!
//! - [`state`] - Core enums and constants (orders, plants, loop mode, limits)
//! - [`series`] - Fixed-capacity sliding window of MV/Output samples
//! - [`sampler`] - Uniform random sample generator
//! - [`color`] - Color parsing and `rgba(...)` formatting
//! - [`appearance`] - Line colors and vertical zoom window
//! - [`chart`] - Chart surface lifecycle (full render and incremental update)
//! - [`timers`] - Keyed one-shot scheduler and fixed-period ticker
//! - [`discharge`] - Capacitor discharge simulation per order
//! - [`params`] - PID parameter capture and numeric field parsing
//! - [`sync`] - Active tab and cross-widget state synchronization
//! - [`session`] - The owned dashboard session tying everything together
//! - [`settings`] - User display preferences
//! - [`app`] - eframe::App implementation
//! - [`ui`] - User interface components
//!   - `menu` - Menu bar (View, Chart)
//!   - `tab_bar` - Order tabs
//!   - `readouts` - Set point / MV / Output / time cards
//!   - `controls` - Mode toggle, plant radios, discharge and PID controls
//!   - `chart` - Live line chart rendering
//!   - `appearance_panel` - Zoom slider, color pickers and reset
//!   - `toast` - Toast notification system

pub mod app;
pub mod appearance;
pub mod chart;
pub mod color;
pub mod discharge;
pub mod params;
pub mod sampler;
pub mod series;
pub mod session;
pub mod settings;
pub mod state;
pub mod sync;
pub mod timers;
pub mod ui;
