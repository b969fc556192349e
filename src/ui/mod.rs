//! UI rendering modules for the dashboard.
//!
//! Each submodule adds `render_*` methods to [`DashboardApp`](crate::app::DashboardApp):
//!
//! - `menu` - Menu bar (View, Chart)
//! - `tab_bar` - Order tabs (1st / 2nd order)
//! - `readouts` - Set Point, MV, Output and Time cards
//! - `controls` - Per-order loop mode, plant radios, discharge and PID fields
//! - `chart` - Live MV/Output line chart
//! - `appearance_panel` - Line colors, zoom slider and reset
//! - `toast` - Toast notification system

pub mod appearance_panel;
pub mod chart;
pub mod controls;
pub mod menu;
pub mod readouts;
pub mod tab_bar;
pub mod toast;
