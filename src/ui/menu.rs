//! Menu bar UI components (View, Chart menus).

use eframe::egui;

use crate::app::DashboardApp;
use crate::state::{FontScale, ToastType};

impl DashboardApp {
    /// Render the application menu bar
    pub fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        // Pre-compute scaled font sizes for use in closures
        let font_14 = self.scaled_font(14.0);
        let font_15 = self.scaled_font(15.0);
        let ctx = ui.ctx().clone();

        egui::MenuBar::new().ui(ui, |ui| {
            ui.style_mut()
                .text_styles
                .insert(egui::TextStyle::Button, egui::FontId::proportional(font_15));

            // View menu - display preferences
            ui.menu_button("View", |ui| {
                ui.set_min_width(180.0);
                ui.style_mut()
                    .text_styles
                    .insert(egui::TextStyle::Button, egui::FontId::proportional(font_14));
                ui.style_mut()
                    .text_styles
                    .insert(egui::TextStyle::Body, egui::FontId::proportional(font_14));

                ui.label(
                    egui::RichText::new("Font Size")
                        .size(font_14)
                        .color(egui::Color32::GRAY),
                );
                let current = self.settings.font_scale;
                for &scale in FontScale::all() {
                    if ui.radio(current == scale, scale.name()).clicked() {
                        self.set_font_scale(scale);
                        ui.close();
                    }
                }

                ui.separator();

                let mut dark_mode = self.settings.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    self.set_dark_mode(&ctx, dark_mode);
                    ui.close();
                }
            });

            // Chart menu
            ui.menu_button("Chart", |ui| {
                ui.set_min_width(180.0);
                ui.style_mut()
                    .text_styles
                    .insert(egui::TextStyle::Button, egui::FontId::proportional(font_14));

                if ui.button("Reset Appearance").clicked() {
                    self.reset_appearance();
                    ui.close();
                }
            });
        });
    }

    /// Restore default chart styling and rebuild the chart
    pub(crate) fn reset_appearance(&mut self) {
        self.session.reset_appearance();
        self.sync_pickers();
        self.show_toast("Chart appearance reset", ToastType::Info);
    }
}
