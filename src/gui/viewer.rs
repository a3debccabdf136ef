//! Figure Viewer
//! One native window per figure. `run_native` returns when the window is
//! closed, so figures are shown one after another.

use crate::charts::{ChartPlotter, Figure, FigureSink, RenderError};
use egui::RichText;
use log::info;

/// Window showing a single figure.
pub struct FigureWindow {
    figure: Figure,
}

impl FigureWindow {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.figure.title).size(18.0).strong());
            });
            ChartPlotter::draw_figure(ui, &self.figure);
        });
    }
}

/// Presents figures in blocking native windows.
#[derive(Default)]
pub struct WindowSink;

impl FigureSink for WindowSink {
    fn present(&mut self, figure: &Figure) -> Result<(), RenderError> {
        let (width, height) = figure.size;
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width as f32, height as f32])
                .with_title(figure.title),
            ..Default::default()
        };

        let app = FigureWindow::new(figure.clone());
        eframe::run_native(
            figure.title,
            options,
            Box::new(|_cc| Ok(Box::new(app))),
        )
        .map_err(|e| RenderError::Window {
            figure: figure.title.to_string(),
            message: e.to_string(),
        })?;

        info!("Closed '{}'", figure.title);
        Ok(())
    }
}
