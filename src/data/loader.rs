//! CSV Data Loader Module
//! Reads MPU6050 logs with Polars and converts rows into typed records.

use crate::data::record::{parse_tempo, Record, SensorTable};
use log::{debug, info, warn};
use polars::prelude::*;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Numeric columns, in the order they are stored on a `Record`.
pub const NUMERIC_COLUMNS: [&str; 7] = [
    "AccX",
    "AccY",
    "AccZ",
    "GyroX",
    "GyroY",
    "GyroZ",
    "Temperatura",
];

/// Columns every log must carry.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Data",
    "Hora",
    "AccX",
    "AccY",
    "AccZ",
    "GyroX",
    "GyroY",
    "GyroZ",
    "Temperatura",
];

/// Optional sample counter written by the logger firmware.
const SAMPLE_COLUMN: &str = "Amostra";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV data: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing column: {0}")]
    ColumnMissing(String),
    #[error("Row {row}: invalid timestamp '{value}' (expected dd/mm/yy HH:MM:SS)")]
    Timestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Row {row}: invalid {column} value '{value}'")]
    Numeric {
        row: usize,
        column: String,
        value: String,
    },
}

/// Load a sensor log from disk.
pub fn load(path: impl AsRef<Path>) -> Result<SensorTable, LoaderError> {
    DataLoader::load(path)
}

/// Handles CSV loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file into a `SensorTable`, keeping file order.
    pub fn load(path: impl AsRef<Path>) -> Result<SensorTable, LoaderError> {
        let path = path.as_ref();
        info!("Loading sensor log {}", path.display());

        let file = File::open(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoaderError::FileNotFound(path.to_path_buf())
            } else {
                LoaderError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let table = Self::from_reader(file)?;
        Self::log_summary(&table);
        Ok(table)
    }

    /// Parse CSV content from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<SensorTable, LoaderError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(LoaderError::Read)?;

        // Every column is read as text; typing happens per row in `to_table`
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        debug!("CSV parsed: {} rows, {} columns", df.height(), df.width());
        Self::to_table(&df)
    }

    /// Convert a parsed DataFrame into typed records.
    fn to_table(df: &DataFrame) -> Result<SensorTable, LoaderError> {
        for name in REQUIRED_COLUMNS {
            Self::required(df, name)?;
        }

        let data_col = Self::required(df, "Data")?.cast(&DataType::String)?;
        let hora_col = Self::required(df, "Hora")?.cast(&DataType::String)?;
        let data = data_col.str()?;
        let hora = hora_col.str()?;

        let raw: Vec<&Column> = NUMERIC_COLUMNS
            .iter()
            .map(|name| Self::required(df, name))
            .collect::<Result<_, _>>()?;
        let casted: Vec<Column> = raw
            .iter()
            .map(|col| col.cast(&DataType::Float64))
            .collect::<PolarsResult<_>>()?;
        let values: Vec<&Float64Chunked> = casted
            .iter()
            .map(|col| col.f64())
            .collect::<PolarsResult<_>>()?;

        // Empty counters are kept as `None`, anything else must be an integer
        let sample_raw = df.column(SAMPLE_COLUMN).ok();
        let sample_col = sample_raw
            .map(|col| col.cast(&DataType::UInt64))
            .transpose()?;
        let samples = sample_col.as_ref().map(|col| col.u64()).transpose()?;

        let mut records = Vec::with_capacity(df.height());

        for i in 0..df.height() {
            let row = i + 1;

            let d = data.get(i).unwrap_or("");
            let h = hora.get(i).unwrap_or("");
            let tempo = parse_tempo(d, h).map_err(|source| LoaderError::Timestamp {
                row,
                value: format!("{} {}", d, h),
                source,
            })?;

            let mut fields = [0.0f64; 7];
            for (k, field) in fields.iter_mut().enumerate() {
                *field = values[k].get(i).ok_or_else(|| LoaderError::Numeric {
                    row,
                    column: NUMERIC_COLUMNS[k].to_string(),
                    value: Self::cell_text(raw[k], i),
                })?;
            }

            let sample = match (sample_raw, samples) {
                (Some(raw), Some(ca)) => match ca.get(i) {
                    Some(n) => Some(n),
                    None if Self::cell_text(raw, i).is_empty() => None,
                    None => {
                        return Err(LoaderError::Numeric {
                            row,
                            column: SAMPLE_COLUMN.to_string(),
                            value: Self::cell_text(raw, i),
                        })
                    }
                },
                _ => None,
            };

            records.push(Record {
                tempo,
                sample,
                acc: [fields[0], fields[1], fields[2]],
                gyro: [fields[3], fields[4], fields[5]],
                temperature: fields[6],
            });
        }

        Ok(SensorTable::new(records))
    }

    fn required<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, LoaderError> {
        df.column(name)
            .map_err(|_| LoaderError::ColumnMissing(name.to_string()))
    }

    /// Original cell text, for error messages.
    fn cell_text(col: &Column, i: usize) -> String {
        match col.get(i) {
            Ok(AnyValue::Null) | Err(_) => String::new(),
            Ok(val) => val.to_string().trim_matches('"').to_string(),
        }
    }

    fn log_summary(table: &SensorTable) {
        let Some((first, last)) = table.time_span() else {
            warn!("Sensor log has no data rows");
            return;
        };

        info!("Loaded {} rows, {} .. {}", table.len(), first, last);

        if !table.is_monotonic() {
            warn!("Timestamps are not monotonic; rows are plotted in file order");
        }

        let missing = table.missing_samples();
        if missing > 0 {
            warn!("{} samples missing from the Amostra sequence", missing);
        }
    }
}
