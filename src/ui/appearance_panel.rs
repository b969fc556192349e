//! Chart appearance side panel: line colors, zoom and reset.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::DashboardApp;
use crate::color::Rgba;
use crate::state::{SeriesKind, ToastType, SCALE_RANGE, SCALE_STEP};

impl DashboardApp {
    pub fn render_appearance_panel(&mut self, ui: &mut egui::Ui) {
        let heading = self.scaled_font(16.0);
        let font_size = self.scaled_font(14.0);

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Chart Appearance").size(heading).strong());
        ui.add_space(8.0);

        // Line colors
        for kind in SeriesKind::iter() {
            let hex = self.session.appearance().picker_hex(kind);
            let picker = match kind {
                SeriesKind::Mv => &mut self.mv_picker,
                SeriesKind::Output => &mut self.output_picker,
            };
            let mut changed = None;
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("{} color", kind.label())).size(font_size));
                if ui.color_edit_button_srgb(picker).changed() {
                    changed = Some(Rgba::rgb(picker[0], picker[1], picker[2]).to_hex());
                }
                ui.label(egui::RichText::new(hex).monospace().color(egui::Color32::GRAY));
            });
            if let Some(new_hex) = changed {
                if let Err(e) = self.session.set_line_color(kind, &new_hex) {
                    tracing::warn!("{}", e);
                    self.show_toast(e.to_string(), ToastType::Warning);
                }
            }
        }

        ui.separator();

        // Vertical zoom
        ui.label(egui::RichText::new("Vertical Scale").size(font_size));
        let scale_label = self.session.appearance().scale_label();
        let mut scale = self.scale_slider;
        let response = ui
            .horizontal(|ui| {
                let response = ui.add(
                    egui::Slider::new(&mut scale, SCALE_RANGE)
                        .step_by(SCALE_STEP)
                        .show_value(false),
                );
                ui.label(egui::RichText::new(scale_label).size(font_size));
                response
            })
            .inner;
        if response.changed() {
            self.scale_slider = scale;
            if let Err(e) = self.session.set_scale(scale) {
                self.show_toast(e.to_string(), ToastType::Warning);
            }
        }

        ui.add_space(10.0);
        if ui
            .button(egui::RichText::new("Reset Appearance").size(font_size))
            .clicked()
        {
            self.reset_appearance();
        }
    }
}
