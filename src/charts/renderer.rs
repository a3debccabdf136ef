//! Static Chart Renderer
//! Draws figures to PNG or SVG files with plotters, for headless runs.
//!
//! Layout:
//! 1. Title centered above the plot
//! 2. Time axis with wall-clock tick labels, value axis with raw units
//! 3. Light grid mesh
//! 4. Legend box in the upper right (acceleration and gyroscope only)

use crate::charts::{Figure, FigureSink, RenderError};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use super::figure::format_time_tick;

/// Image format for headless output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render a figure to `path` in the given format.
    pub fn render_to_file(figure: &Figure, path: &Path, format: ImageFormat) -> Result<(), RenderError> {
        let draw_err = |e: String| RenderError::Draw {
            figure: figure.title.to_string(),
            message: e,
        };

        match format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(path, figure.size).into_drawing_area();
                Self::draw(&root, figure).map_err(|e| draw_err(e.to_string()))?;
                root.present().map_err(|e| draw_err(e.to_string()))
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(path, figure.size).into_drawing_area();
                Self::draw(&root, figure).map_err(|e| draw_err(e.to_string()))?;
                root.present().map_err(|e| draw_err(e.to_string()))
            }
        }
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        // Empty logs still get titled, labelled axes
        let (x_min, x_max, y_min, y_max) = figure.bounds().unwrap_or((0.0, 1.0, 0.0, 1.0));

        let mut chart = ChartBuilder::on(root)
            .caption(figure.title, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        let time_tick = |x: &f64| format_time_tick(*x);
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.x_label)
            .y_desc(figure.y_label)
            .x_labels(8)
            .x_label_formatter(&time_tick);
        if !figure.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        for series in &figure.series {
            let [r, g, b] = series.color;
            let color = RGBColor(r, g, b);

            let drawn = chart.draw_series(LineSeries::new(
                series.points.iter().map(|p| (p[0], p[1])),
                color.stroke_width(2),
            ))?;
            if figure.show_legend {
                drawn
                    .label(series.name.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            }
        }

        if figure.show_legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        Ok(())
    }
}

/// Writes each figure to `<out_dir>/<slug>.<ext>`.
pub struct FileSink {
    out_dir: PathBuf,
    format: ImageFormat,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(out_dir: impl Into<PathBuf>, format: ImageFormat) -> Self {
        Self {
            out_dir: out_dir.into(),
            format,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in presentation order.
    #[cfg(test)]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FigureSink for FileSink {
    fn present(&mut self, figure: &Figure) -> Result<(), RenderError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|source| RenderError::Io {
            path: self.out_dir.clone(),
            source,
        })?;

        let path = self
            .out_dir
            .join(format!("{}.{}", figure.slug, self.format.extension()));
        StaticChartRenderer::render_to_file(figure, &path, self.format)?;

        info!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}
