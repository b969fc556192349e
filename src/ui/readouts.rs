//! Header cards with the latest values.

use eframe::egui;

use crate::app::DashboardApp;

impl DashboardApp {
    pub fn render_readouts(&mut self, ui: &mut egui::Ui) {
        let readouts = self.session.readouts().clone();
        let title_size = self.scaled_font(12.0);
        let value_size = self.scaled_font(22.0);

        let cards = [
            ("Set Point", readouts.set_point),
            ("MV", readouts.mv),
            ("Output", readouts.output),
            ("Time", readouts.time),
        ];

        ui.horizontal(|ui| {
            for (title, value) in cards {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(28, 43, 71))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.set_min_width(120.0);
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(title)
                                    .size(title_size)
                                    .color(egui::Color32::GRAY),
                            );
                            ui.label(
                                egui::RichText::new(value)
                                    .size(value_size)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    });
                ui.add_space(8.0);
            }
        });
    }
}
