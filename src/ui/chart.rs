//! Live MV/Output chart.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};

use crate::app::DashboardApp;
use crate::chart::{X_AXIS_TITLE, Y_AXIS_TITLE};

impl DashboardApp {
    /// Draw the current chart surface.
    ///
    /// The plot id comes from the surface instance, so a full render starts a
    /// fresh plot with no remembered bounds. Bounds are always set from the
    /// surface; user zoom and drag are disabled.
    pub fn render_chart(&mut self, ui: &mut egui::Ui) {
        let Some(surface) = self.session.surface() else {
            ui.centered_and_justified(|ui| {
                ui.label("Chart not rendered");
            });
            return;
        };

        let x_range = surface.x_range();
        let y_range = surface.y_range();

        Plot::new(surface.plot_id())
            .legend(Legend::default())
            .x_axis_label(X_AXIS_TITLE)
            .y_axis_label(Y_AXIS_TITLE)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                if let (Some((x_min, x_max)), Some((y_min, y_max))) = (x_range, y_range) {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [x_min, y_min],
                        [x_max, y_max],
                    ));
                }

                for dataset in surface.datasets() {
                    plot_ui.line(
                        Line::new(dataset.label(), PlotPoints::from(dataset.points.clone()))
                            .color(dataset.border.to_color32())
                            .width(dataset.width),
                    );
                }
            });
    }
}
