//! Chart Plotter Module
//! Draws a figure interactively with egui_plot.

use crate::charts::figure::{format_time_tick, x_to_tempo};
use crate::charts::Figure;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Draws time series figures with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn series_color(rgb: [u8; 3]) -> Color32 {
        Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Draw every series of a figure as lines over the time axis.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        let mut plot = Plot::new(figure.slug)
            .x_axis_label(figure.x_label)
            .y_axis_label(figure.y_label)
            .show_grid(figure.show_grid)
            .x_axis_formatter(|mark, _range| format_time_tick(mark.value))
            .label_formatter(|name, value| {
                let time = x_to_tempo(value.x)
                    .map(|t| t.to_string())
                    .unwrap_or_default();
                if name.is_empty() {
                    format!("{}\n{:.2}", time, value.y)
                } else {
                    format!("{}\n{}\n{:.2}", name, time, value.y)
                }
            });

        if figure.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for series in &figure.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .color(Self::series_color(series.color))
                        .width(1.5)
                        .name(&series.name),
                );
            }
        });
    }
}
