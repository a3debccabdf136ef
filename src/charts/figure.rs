//! Figure Definitions
//! Backend-neutral description of the three MPU6050 charts.
//!
//! A `Figure` carries everything a backend needs (titles, axis labels,
//! colored series in file order) so the window viewer and the static
//! renderer draw the same chart.

use crate::data::{format_tempo, Record, SensorTable};
use chrono::{DateTime, NaiveDateTime};

/// Line colors (RGB), matplotlib's default cycle
pub const BLUE: [u8; 3] = [31, 119, 180];
pub const ORANGE: [u8; 3] = [255, 127, 14];
pub const GREEN: [u8; 3] = [44, 160, 44];
pub const TEMPERATURE_ORANGE: [u8; 3] = [255, 165, 0];

const X_LABEL: &str = "Tempo";

/// One named line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: [u8; 3],
    /// `[seconds, value]` pairs in file order.
    pub points: Vec<[f64; 2]>,
}

/// A single chart window / image.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// File stem used by headless output.
    pub slug: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<Series>,
    pub show_legend: bool,
    pub show_grid: bool,
    /// Pixel size (width, height).
    pub size: (u32, u32),
}

/// Timestamp as an x coordinate.
pub fn tempo_to_x(tempo: &NaiveDateTime) -> f64 {
    tempo.and_utc().timestamp() as f64
}

/// Inverse of `tempo_to_x`, truncated to whole seconds.
pub fn x_to_tempo(x: f64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(x.floor() as i64, 0).map(|dt| dt.naive_utc())
}

/// Axis tick text for an x coordinate.
pub fn format_time_tick(x: f64) -> String {
    match x_to_tempo(x) {
        Some(tempo) => format_tempo(&tempo).1,
        None => String::new(),
    }
}

fn series(table: &SensorTable, name: &str, color: [u8; 3], value: impl Fn(&Record) -> f64) -> Series {
    Series {
        name: name.to_string(),
        color,
        points: table
            .iter()
            .map(|rec| [tempo_to_x(&rec.tempo), value(rec)])
            .collect(),
    }
}

impl Figure {
    pub fn acceleration(table: &SensorTable) -> Self {
        Self {
            slug: "aceleracao",
            title: "Aceleração - MPU6050",
            x_label: X_LABEL,
            y_label: "Aceleração (raw)",
            series: vec![
                series(table, "AccX", BLUE, |r| r.acc[0]),
                series(table, "AccY", ORANGE, |r| r.acc[1]),
                series(table, "AccZ", GREEN, |r| r.acc[2]),
            ],
            show_legend: true,
            show_grid: true,
            size: (1000, 500),
        }
    }

    pub fn gyroscope(table: &SensorTable) -> Self {
        Self {
            slug: "giroscopio",
            title: "Giroscópio - MPU6050",
            x_label: X_LABEL,
            y_label: "Velocidade Angular (raw)",
            series: vec![
                series(table, "GyroX", BLUE, |r| r.gyro[0]),
                series(table, "GyroY", ORANGE, |r| r.gyro[1]),
                series(table, "GyroZ", GREEN, |r| r.gyro[2]),
            ],
            show_legend: true,
            show_grid: true,
            size: (1000, 500),
        }
    }

    pub fn temperature(table: &SensorTable) -> Self {
        Self {
            slug: "temperatura",
            title: "Temperatura - MPU6050",
            x_label: X_LABEL,
            y_label: "Temperatura (°C)",
            series: vec![series(table, "Temperatura", TEMPERATURE_ORANGE, |r| {
                r.temperature
            })],
            show_legend: false,
            show_grid: true,
            size: (1000, 400),
        }
    }

    /// Data bounds `(x_min, x_max, y_min, y_max)`, padded so that flat or
    /// single-point data still gives a non-empty range.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|p| p[1].is_finite());
        let first = points.next()?;

        let (mut x_min, mut x_max, mut y_min, mut y_max) = (first[0], first[0], first[1], first[1]);
        for p in points {
            x_min = x_min.min(p[0]);
            x_max = x_max.max(p[0]);
            y_min = y_min.min(p[1]);
            y_max = y_max.max(p[1]);
        }

        if x_max <= x_min {
            x_min -= 1.0;
            x_max += 1.0;
        }
        let y_pad = if y_max > y_min {
            (y_max - y_min) * 0.05
        } else {
            1.0
        };

        Some((x_min, x_max, y_min - y_pad, y_max + y_pad))
    }
}

/// The three charts, in presentation order.
pub fn figures(table: &SensorTable) -> [Figure; 3] {
    [
        Figure::acceleration(table),
        Figure::gyroscope(table),
        Figure::temperature(table),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_tempo;

    fn record(hora: &str, acc_x: f64, temperature: f64) -> Record {
        Record {
            tempo: parse_tempo("29/07/25", hora).unwrap(),
            sample: None,
            acc: [acc_x, -45.0, 16000.0],
            gyro: [3.0, -2.0, 1.0],
            temperature,
        }
    }

    #[test]
    fn acceleration_contains_example_point() {
        let table = SensorTable::new(vec![record("13:00:26", 120.0, 26.5)]);
        let fig = Figure::acceleration(&table);

        let acc_x = fig.series.iter().find(|s| s.name == "AccX").unwrap();
        let x = tempo_to_x(&parse_tempo("29/07/25", "13:00:26").unwrap());
        assert!(acc_x.points.contains(&[x, 120.0]));
        assert_eq!(
            x_to_tempo(x).unwrap().to_string(),
            "2025-07-29 13:00:26"
        );
    }

    #[test]
    fn figures_follow_presentation_order() {
        let table = SensorTable::new(vec![record("13:00:26", 1.0, 26.0)]);
        let titles: Vec<&str> = figures(&table).iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Aceleração - MPU6050",
                "Giroscópio - MPU6050",
                "Temperatura - MPU6050"
            ]
        );
    }

    #[test]
    fn series_layout_matches_charts() {
        let table = SensorTable::new(vec![record("13:00:26", 1.0, 26.0)]);
        let [acc, gyro, temp] = figures(&table);

        let names = |f: &Figure| f.series.iter().map(|s| s.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&acc), vec!["AccX", "AccY", "AccZ"]);
        assert_eq!(names(&gyro), vec!["GyroX", "GyroY", "GyroZ"]);
        assert_eq!(names(&temp), vec!["Temperatura"]);

        assert!(acc.show_legend && gyro.show_legend && !temp.show_legend);
        assert!(acc.show_grid && gyro.show_grid && temp.show_grid);
        assert_eq!(temp.series[0].color, TEMPERATURE_ORANGE);
        assert_eq!(temp.y_label, "Temperatura (°C)");
    }

    #[test]
    fn points_run_left_to_right_for_sorted_rows() {
        let table = SensorTable::new(vec![record("13:00:26", 1.0, 26.0), record("13:00:27", 2.0, 26.1)]);
        let temp = Figure::temperature(&table);
        let pts = &temp.series[0].points;
        assert_eq!(pts.len(), 2);
        assert!(pts[0][0] < pts[1][0]);
        assert_eq!(pts[1][0] - pts[0][0], 1.0);
    }

    #[test]
    fn bounds_pad_single_point() {
        let table = SensorTable::new(vec![record("13:00:26", 1.0, 26.0)]);
        let (x_min, x_max, y_min, y_max) = Figure::temperature(&table).bounds().unwrap();
        assert!(x_min < x_max);
        assert!(y_min < 26.0 && 26.0 < y_max);
    }

    #[test]
    fn empty_table_has_no_bounds() {
        let fig = Figure::gyroscope(&SensorTable::default());
        assert!(fig.bounds().is_none());
        assert!(fig.series.iter().all(|s| s.points.is_empty()));
    }

    #[test]
    fn tick_shows_wall_clock_time() {
        let x = tempo_to_x(&parse_tempo("29/07/25", "13:00:26").unwrap());
        assert_eq!(format_time_tick(x), "13:00:26");
    }
}
