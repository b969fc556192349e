//! Tab bar for switching between the two plant orders.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::DashboardApp;
use crate::state::OrderTab;
use crate::sync::TabStatus;

impl DashboardApp {
    /// Render one tab per order; clicking a tab makes it the only active one
    pub fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        let font_size = self.scaled_font(15.0);
        let mut tab_to_activate: Option<OrderTab> = None;

        ui.horizontal(|ui| {
            for tab in OrderTab::iter() {
                let is_active = self.session.tabs().status(tab) == TabStatus::Active;

                let tab_color = if is_active {
                    egui::Color32::from_rgb(60, 60, 60)
                } else {
                    egui::Color32::from_rgb(40, 40, 40)
                };
                let text_color = if is_active {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::from_rgb(180, 180, 180)
                };
                let border_color = if is_active {
                    egui::Color32::from_rgb(0, 204, 153)
                } else {
                    egui::Color32::from_rgb(60, 60, 60)
                };

                let response = egui::Frame::NONE
                    .fill(tab_color)
                    .corner_radius(egui::CornerRadius {
                        nw: 6,
                        ne: 6,
                        sw: 0,
                        se: 0,
                    })
                    .stroke(egui::Stroke::new(
                        if is_active { 2.0 } else { 1.0 },
                        border_color,
                    ))
                    .inner_margin(egui::Margin {
                        left: 14,
                        right: 14,
                        top: 6,
                        bottom: 6,
                    })
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(tab.name())
                                .color(text_color)
                                .size(font_size),
                        )
                    })
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand);

                if response.clicked() && !is_active {
                    tab_to_activate = Some(tab);
                }
            }
        });

        if let Some(tab) = tab_to_activate {
            self.session.activate_tab(tab);
        }
    }
}
