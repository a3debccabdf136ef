//! MPU6050 Plot - sensor log chart viewer
//!
//! Reads a CSV log of MPU6050 samples and shows acceleration, angular
//! velocity and temperature against the sample timestamp.

mod charts;
mod config;
mod data;
mod gui;
mod logger;

use anyhow::Context;
use charts::{FigureSink, FileSink};
use clap::Parser;
use config::Settings;
use gui::WindowSink;
use log::info;

fn main() -> anyhow::Result<()> {
    logger::init_logger();
    let settings = Settings::parse();

    let table = data::load(&settings.input_path)
        .with_context(|| format!("failed to load {}", settings.input_path.display()))?;

    let mut sink: Box<dyn FigureSink> = match settings.output.image_format() {
        Some(format) => Box::new(FileSink::new(&settings.out_dir, format)),
        None => Box::new(WindowSink),
    };

    charts::render(&table, sink.as_mut()).context("failed to render charts")?;

    info!("Done");
    Ok(())
}
