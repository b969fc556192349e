//! Main application state and the eframe entry point.
//!
//! [`DashboardApp`] wraps one [`DashboardSession`] together with display
//! preferences and transient UI state (toast, color picker buffers). Rendering
//! is split across the `ui` submodules, each adding `render_*` methods.

use eframe::egui;
use std::time::Instant;

use crate::session::DashboardSession;
use crate::settings::UserSettings;
use crate::state::{FontScale, SeriesKind, ToastType};

/// Main application state
pub struct DashboardApp {
    /// Runtime model: samples, chart, tabs and timers
    pub(crate) session: DashboardSession,
    /// Persisted display preferences
    pub(crate) settings: UserSettings,
    /// Toast messages for user feedback
    pub(crate) toast_message: Option<(String, Instant, ToastType)>,
    /// Picker buffers, seeded from the current line colors
    pub(crate) mv_picker: [u8; 3],
    pub(crate) output_picker: [u8; 3],
    /// Zoom slider position
    pub(crate) scale_slider: f64,
    /// Window size differs from the one in the settings file
    pub(crate) window_size_dirty: bool,
}

impl DashboardApp {
    /// Create the app and start a session
    pub fn new(cc: &eframe::CreationContext<'_>, settings: UserSettings) -> Self {
        Self::apply_visuals(&cc.egui_ctx, settings.dark_mode);
        Self::with_session(DashboardSession::new(Instant::now()), settings)
    }

    /// Create the app around an existing session
    pub fn with_session(session: DashboardSession, settings: UserSettings) -> Self {
        let mut app = Self {
            session,
            settings,
            toast_message: None,
            mv_picker: [0, 0, 0],
            output_picker: [0, 0, 0],
            scale_slider: 1.0,
            window_size_dirty: false,
        };
        app.sync_pickers();
        app
    }

    pub fn session(&self) -> &DashboardSession {
        &self.session
    }

    /// Get a font size scaled by the user's preference
    pub fn scaled_font(&self, base: f32) -> f32 {
        base * self.settings.font_scale.multiplier()
    }

    pub(crate) fn show_toast(&mut self, message: impl Into<String>, toast_type: ToastType) {
        self.toast_message = Some((message.into(), Instant::now(), toast_type));
    }

    pub(crate) fn set_font_scale(&mut self, scale: FontScale) {
        if self.settings.font_scale != scale {
            self.settings.font_scale = scale;
            self.save_settings();
        }
    }

    pub(crate) fn set_dark_mode(&mut self, ctx: &egui::Context, dark_mode: bool) {
        if self.settings.dark_mode != dark_mode {
            self.settings.dark_mode = dark_mode;
            Self::apply_visuals(ctx, dark_mode);
            self.save_settings();
        }
    }

    /// Remember the current window size, written out on exit
    pub(crate) fn record_window_size(&mut self, size: [f32; 2]) {
        if size[0] <= 0.0 || size[1] <= 0.0 || size == self.settings.window_size {
            return;
        }
        self.settings.window_size = size;
        self.window_size_dirty = true;
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("{}", e);
            self.show_toast(e.to_string(), ToastType::Warning);
        }
    }

    fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
        if dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    /// Reload the picker buffers and zoom slider from the appearance config
    pub(crate) fn sync_pickers(&mut self) {
        let appearance = self.session.appearance();
        self.mv_picker = appearance.style(SeriesKind::Mv).border.rgb_array();
        self.output_picker = appearance.style(SeriesKind::Output).border.rgb_array();
        self.scale_slider = appearance.scale();
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let outcome = self.session.poll(now);
        for tab in &outcome.recharged {
            self.show_toast(
                format!("{}: capacitor charged again", tab.name()),
                ToastType::Success,
            );
        }

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.record_window_size([rect.width(), rect.height()]);
        }

        // Toast notifications
        self.render_toast(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        egui::TopBottomPanel::top("header_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.render_tab_bar(ui);
                ui.add_space(6.0);
                self.render_readouts(ui);
                ui.add_space(6.0);
            });

        egui::SidePanel::right("appearance_panel")
            .default_width(240.0)
            .min_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_appearance_panel(ui);
            });

        egui::SidePanel::left("controls_panel")
            .default_width(260.0)
            .min_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_controls(ui);
            });

        // Chart takes remaining space
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_chart(ui);
        });

        let wait = self
            .session
            .next_deadline()
            .saturating_duration_since(Instant::now());
        ctx.request_repaint_after(wait);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.window_size_dirty {
            self.save_settings();
            self.window_size_dirty = false;
        }
    }
}
