//! Command line and environment configuration.

use crate::charts::ImageFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log file read when no path is given.
pub const DEFAULT_INPUT: &str = "dados29072025130026.csv";

/// Where the charts go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// One blocking window per chart
    Window,
    /// PNG files in the output directory
    Png,
    /// SVG files in the output directory
    Svg,
}

impl OutputMode {
    /// Image format for headless modes, `None` for windows.
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            OutputMode::Window => None,
            OutputMode::Png => Some(ImageFormat::Png),
            OutputMode::Svg => Some(ImageFormat::Svg),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "mpu_plot")]
#[command(about = "Plot acceleration, gyroscope and temperature from an MPU6050 CSV log")]
pub struct Settings {
    /// CSV log to read
    #[arg(env = "MPU_CSV_PATH", default_value = DEFAULT_INPUT)]
    pub input_path: PathBuf,

    /// Show windows or write image files
    #[arg(long, value_enum, env = "MPU_PLOT_OUTPUT", default_value_t = OutputMode::Window)]
    pub output: OutputMode,

    /// Directory for png/svg output
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}
