//! File-based benchmark sources.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use bondscope_core::Date;
use bondscope_traits::{parse_observation_value, BenchmarkSource, SeriesId, SourceType, TraitError};

// =============================================================================
// CSV BENCHMARK SOURCE
// =============================================================================

/// CSV record for benchmark observations.
///
/// `value` is kept as text so the `"."` gap marker survives.
#[derive(Debug, Deserialize)]
struct ObservationRecord {
    series_id: String,
    date: String,
    value: String,
}

/// CSV-based benchmark source for offline runs and tests.
///
/// Reads `series_id,date,value` rows with percentage values, the same shape a
/// remote series publishes:
///
/// ```text
/// series_id,date,value
/// DGS10,2024-03-01,4.18
/// DGS10,2024-03-02,.
/// ```
#[derive(Debug, Default)]
pub struct CsvBenchmarkSource {
    file_path: Option<PathBuf>,
    rates: HashMap<(SeriesId, Date), Option<Decimal>>,
}

impl CsvBenchmarkSource {
    /// Create a source from a CSV file.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let file_path = file_path.as_ref().to_path_buf();
        let file = std::fs::File::open(&file_path)
            .map_err(|e| TraitError::IoError(format!("{}: {e}", file_path.display())))?;

        let mut source = Self::from_reader(file)?;
        debug!(path = %file_path.display(), rows = source.len(), "loaded benchmark file");
        source.file_path = Some(file_path);
        Ok(source)
    }

    /// Create a source from any CSV reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, TraitError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rates = HashMap::new();
        for result in reader.deserialize() {
            let record: ObservationRecord =
                result.map_err(|e| TraitError::ParseError(e.to_string()))?;

            let date = Date::parse(&record.date)
                .map_err(|e| TraitError::ParseError(e.to_string()))?;
            let value = parse_observation_value(&record.value)?;

            rates.insert((SeriesId::new(record.series_id), date), value);
        }

        Ok(Self {
            file_path: None,
            rates,
        })
    }

    /// Reload observations from the backing file.
    pub fn reload(&mut self) -> Result<(), TraitError> {
        let Some(path) = self.file_path.clone() else {
            return Ok(());
        };
        *self = Self::new(path)?;
        Ok(())
    }

    /// Number of rows loaded, gap markers included.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rows were loaded.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl BenchmarkSource for CsvBenchmarkSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    fn get_rate(&self, series: &SeriesId, date: Date) -> Result<Option<Decimal>, TraitError> {
        Ok(self
            .rates
            .get(&(series.clone(), date))
            .copied()
            .flatten())
    }
}

// =============================================================================
// EMPTY IMPLEMENTATION
// =============================================================================

/// Benchmark source with no data at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyBenchmarkSource;

impl BenchmarkSource for EmptyBenchmarkSource {
    fn source_type(&self) -> SourceType {
        SourceType::Manual
    }

    fn get_rate(&self, _series: &SeriesId, _date: Date) -> Result<Option<Decimal>, TraitError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const SAMPLE: &str = "\
series_id,date,value
DGS10,2024-03-01,4.18
DGS10,2024-03-02,.
DGS5, 2024-03-01 , 4.25
DGS1MO,2024-03-01,
";

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_reads_rows_as_fractions() {
        let source = CsvBenchmarkSource::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(source.len(), 4);
        assert_eq!(source.source_type(), SourceType::File);
        assert_eq!(
            source.get_rate(&SeriesId::new("DGS10"), date(2024, 3, 1)).unwrap(),
            Some(dec!(0.0418))
        );
        assert_eq!(
            source.get_rate(&SeriesId::new("DGS5"), date(2024, 3, 1)).unwrap(),
            Some(dec!(0.0425))
        );
    }

    #[test]
    fn test_gap_markers_and_missing_rows_are_no_data() {
        let source = CsvBenchmarkSource::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(source.get_rate(&SeriesId::new("DGS10"), date(2024, 3, 2)).unwrap(), None);
        assert_eq!(source.get_rate(&SeriesId::new("DGS1MO"), date(2024, 3, 1)).unwrap(), None);
        assert_eq!(source.get_rate(&SeriesId::new("DGS30"), date(2024, 3, 1)).unwrap(), None);
    }

    #[test]
    fn test_bad_rows_rejected() {
        let bad_value = "series_id,date,value\nDGS10,2024-03-01,abc\n";
        assert!(matches!(
            CsvBenchmarkSource::from_reader(bad_value.as_bytes()),
            Err(TraitError::ParseError(_))
        ));

        let bad_date = "series_id,date,value\nDGS10,03/01/2024,4.1\n";
        assert!(matches!(
            CsvBenchmarkSource::from_reader(bad_date.as_bytes()),
            Err(TraitError::ParseError(_))
        ));

        let missing_column = "series_id,date\nDGS10,2024-03-01\n";
        assert!(CsvBenchmarkSource::from_reader(missing_column.as_bytes()).is_err());
    }

    #[test]
    fn test_from_file_and_reload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "series_id,date,value\nDGS2,2024-01-02,4.33\n").unwrap();

        let mut source = CsvBenchmarkSource::new(file.path()).unwrap();
        assert_eq!(source.len(), 1);

        writeln!(file, "DGS2,2024-01-03,4.30").unwrap();
        source.reload().unwrap();
        assert_eq!(source.len(), 2);
        assert_eq!(
            source.get_rate(&SeriesId::new("DGS2"), date(2024, 1, 3)).unwrap(),
            Some(dec!(0.043))
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            CsvBenchmarkSource::new("/no/such/benchmarks.csv"),
            Err(TraitError::IoError(_))
        ));
    }

    #[test]
    fn test_empty_source() {
        let source = EmptyBenchmarkSource;
        assert_eq!(source.source_type(), SourceType::Manual);
        assert_eq!(source.get_rate(&SeriesId::new("DGS10"), date(2024, 1, 2)).unwrap(), None);
    }
}
