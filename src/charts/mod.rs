//! Charts module - figure building and presentation

mod figure;
mod plotter;
mod renderer;

pub use figure::{figures, Figure};
pub use plotter::ChartPlotter;
pub use renderer::{FileSink, ImageFormat};

use crate::data::SensorTable;
use log::{info, warn};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to open chart window '{figure}': {message}")]
    Window { figure: String, message: String },
    #[error("Failed to draw '{figure}': {message}")]
    Draw { figure: String, message: String },
    #[error("Failed to create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for finished figures: a native window or an image file.
pub trait FigureSink {
    /// Present one figure. Window sinks block until the user closes it.
    fn present(&mut self, figure: &Figure) -> Result<(), RenderError>;
}

/// Present the acceleration, gyroscope and temperature charts, in that order.
pub fn render(table: &SensorTable, sink: &mut dyn FigureSink) -> Result<(), RenderError> {
    if table.is_empty() {
        warn!("No samples to plot, charts will be empty");
    }
    for figure in figures(table) {
        info!("Presenting '{}'", figure.title);
        sink.present(&figure)?;
    }
    Ok(())
}
