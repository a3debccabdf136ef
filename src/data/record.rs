//! Sensor Records
//! Typed MPU6050 samples and the ordered table built from a CSV log.

use chrono::{NaiveDateTime, ParseResult};

/// Timestamp pattern written by the logger: `dd/mm/yy HH:MM:SS`.
pub const TEMPO_FORMAT: &str = "%d/%m/%y %H:%M:%S";
const DATE_FORMAT: &str = "%d/%m/%y";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a `Data` and `Hora` pair into a single timestamp.
pub fn parse_tempo(data: &str, hora: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", data, hora), TEMPO_FORMAT)
}

/// Format a timestamp back into its `Data` and `Hora` strings.
pub fn format_tempo(tempo: &NaiveDateTime) -> (String, String) {
    (
        tempo.format(DATE_FORMAT).to_string(),
        tempo.format(TIME_FORMAT).to_string(),
    )
}

/// One telemetry sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub tempo: NaiveDateTime,
    /// Sample counter from the `Amostra` column, when the log has one.
    pub sample: Option<u64>,
    pub acc: [f64; 3],
    pub gyro: [f64; 3],
    /// Degrees Celsius.
    pub temperature: f64,
}

/// Records in file order, indexed by `tempo`.
#[derive(Debug, Clone, Default)]
pub struct SensorTable {
    records: Vec<Record>,
}

impl SensorTable {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// First and last timestamp in file order.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.tempo, last.tempo))
    }

    /// True when no timestamp is earlier than the one before it.
    pub fn is_monotonic(&self) -> bool {
        self.records.windows(2).all(|w| w[0].tempo <= w[1].tempo)
    }

    /// Number of `Amostra` values skipped between consecutive rows.
    pub fn missing_samples(&self) -> u64 {
        self.records
            .windows(2)
            .filter_map(|w| match (w[0].sample, w[1].sample) {
                (Some(a), Some(b)) => b.checked_sub(a).filter(|d| *d > 1).map(|d| d - 1),
                _ => None,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(hora: &str, sample: Option<u64>) -> Record {
        Record {
            tempo: parse_tempo("29/07/25", hora).unwrap(),
            sample,
            acc: [0.0; 3],
            gyro: [0.0; 3],
            temperature: 25.0,
        }
    }

    #[test]
    fn parses_logger_timestamp() {
        let tempo = parse_tempo("29/07/25", "13:00:26").unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 7, 29)
            .unwrap()
            .and_hms_opt(13, 0, 26)
            .unwrap();
        assert_eq!(tempo, expected);
    }

    #[test]
    fn format_reproduces_original_strings() {
        for (data, hora) in [("29/07/25", "13:00:26"), ("01/01/00", "00:00:00"), ("31/12/99", "23:59:59")] {
            let tempo = parse_tempo(data, hora).unwrap();
            assert_eq!(format_tempo(&tempo), (data.to_string(), hora.to_string()));
        }
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(parse_tempo("31/13/25", "13:00:26").is_err());
    }

    #[test]
    fn rejects_four_digit_year() {
        assert!(parse_tempo("29/07/2025", "13:00:26").is_err());
    }

    #[test]
    fn monotonic_and_span() {
        let table = SensorTable::new(vec![record("13:00:26", None), record("13:00:27", None)]);
        assert!(table.is_monotonic());
        let (first, last) = table.time_span().unwrap();
        assert!(first < last);

        let reversed = SensorTable::new(vec![record("13:00:27", None), record("13:00:26", None)]);
        assert!(!reversed.is_monotonic());
    }

    #[test]
    fn counts_skipped_samples() {
        let table = SensorTable::new(vec![
            record("13:00:26", Some(1)),
            record("13:00:27", Some(2)),
            record("13:00:30", Some(5)),
        ]);
        assert_eq!(table.missing_samples(), 2);

        let without = SensorTable::new(vec![record("13:00:26", None), record("13:00:27", None)]);
        assert_eq!(without.missing_samples(), 0);
    }

    #[test]
    fn counter_near_u64_max_does_not_overflow() {
        let table = SensorTable::new(vec![
            record("13:00:26", Some(u64::MAX)),
            record("13:00:27", Some(u64::MAX)),
            record("13:00:28", Some(3)),
            record("13:00:29", Some(u64::MAX - 1)),
        ]);
        assert_eq!(table.missing_samples(), u64::MAX - 5);
    }

    #[test]
    fn empty_table_has_no_span() {
        let table = SensorTable::default();
        assert!(table.is_empty());
        assert!(table.time_span().is_none());
        assert!(table.is_monotonic());
    }
}
