//! Per-order control panel.
//!
//! Shows the controls of the active order only: loop mode toggle, plant
//! radios, capacitor discharge button with its status indicator, and the PID
//! parameter fields.

use eframe::egui;
use std::time::Instant;

use crate::app::DashboardApp;
use crate::state::{LoopMode, OrderTab, Plant, ToastType};
use crate::sync::CursorStyle;

impl DashboardApp {
    pub fn render_controls(&mut self, ui: &mut egui::Ui) {
        let tab = self.session.active_tab();
        let heading = self.scaled_font(18.0);

        ui.add_space(8.0);
        ui.label(egui::RichText::new(tab.name()).size(heading).strong());
        ui.add_space(8.0);

        self.render_loop_mode(ui, tab);
        ui.separator();
        self.render_plant_radios(ui, tab);
        ui.separator();
        self.render_discharge(ui, tab);
        ui.separator();
        self.render_pid_fields(ui, tab);
    }

    fn render_loop_mode(&mut self, ui: &mut egui::Ui, tab: OrderTab) {
        let font_size = self.scaled_font(14.0);
        let labels = self.session.tabs().view(tab).labels;
        let mut closed = self.session.tabs().order(tab).loop_mode.is_closed();

        let label_text = |text: &str, active: bool| {
            let text = egui::RichText::new(text).size(font_size);
            if active {
                text.strong().color(egui::Color32::from_rgb(0, 204, 153))
            } else {
                text.color(egui::Color32::GRAY)
            }
        };

        ui.label(egui::RichText::new("Operating Mode").size(font_size));
        ui.horizontal(|ui| {
            ui.label(label_text(LoopMode::Open.name(), labels.open_active));
            if ui.checkbox(&mut closed, "").changed() {
                self.session.set_loop_mode(tab, LoopMode::from_checked(closed));
            }
            ui.label(label_text(LoopMode::Closed.name(), labels.closed_active));
        });
    }

    fn render_plant_radios(&mut self, ui: &mut egui::Ui, tab: OrderTab) {
        let font_size = self.scaled_font(14.0);
        let options = self.session.tabs().view(tab).radios.options().to_vec();
        let selected = self.session.tabs().order(tab).plant;
        let mut picked = None;

        ui.label(egui::RichText::new("Plant").size(font_size));
        ui.horizontal(|ui| {
            for option in &options {
                let mut text = egui::RichText::new(option.plant.name()).size(font_size);
                if option.label_disabled {
                    text = text.color(egui::Color32::DARK_GRAY);
                }
                let cursor = match option.cursor {
                    CursorStyle::Pointer => egui::CursorIcon::PointingHand,
                    CursorStyle::NotAllowed => egui::CursorIcon::NotAllowed,
                };
                // Locked radios still sense clicks so the refusal is reported
                let response = ui
                    .add(egui::RadioButton::new(selected == Some(option.plant), text))
                    .on_hover_cursor(cursor);
                if response.clicked() {
                    picked = Some(option.plant);
                }
            }
        });

        if let Some(plant) = picked {
            self.pick_plant(tab, plant);
        }
    }

    /// Forward a radio click to the session; a refusal shows a warning toast
    pub(crate) fn pick_plant(&mut self, tab: OrderTab, plant: Plant) {
        if let Err(e) = self.session.select_plant(tab, plant) {
            self.show_toast(e.to_string(), ToastType::Warning);
        }
    }

    fn render_discharge(&mut self, ui: &mut egui::Ui, tab: OrderTab) {
        let font_size = self.scaled_font(14.0);
        let indicator = self.session.tabs().view(tab).indicator;

        ui.horizontal(|ui| {
            if ui
                .button(egui::RichText::new("Discharge Capacitor").size(font_size))
                .clicked()
            {
                self.session.trigger_discharge(tab, Instant::now());
            }

            let [r, g, b] = indicator.color();
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 7.0, egui::Color32::from_rgb(r, g, b));
            response.on_hover_text(indicator.class_name());
        });
    }

    fn render_pid_fields(&mut self, ui: &mut egui::Ui, tab: OrderTab) {
        let font_size = self.scaled_font(14.0);

        ui.label(egui::RichText::new("Controller Parameters").size(font_size));
        let inputs = self.session.pid_inputs_mut(tab);
        egui::Grid::new(format!("pid_fields_{}", tab.id()))
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Set Point", &mut inputs.set_point),
                    ("P", &mut inputs.p),
                    ("I", &mut inputs.i),
                    ("D", &mut inputs.d),
                ] {
                    ui.label(label);
                    ui.add(egui::TextEdit::singleline(value).desired_width(90.0));
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        if ui
            .button(egui::RichText::new("Apply").size(font_size))
            .clicked()
        {
            self.session.apply_params(tab);
        }
    }
}
