use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::app::ports::{DatasetSinkPort, DatasetSourcePort};
use crate::error::{EnrichError, Result};
use crate::observability::metrics;
use crate::types::{CompanyRecord, Dataset};

/// CSV file holding a company export. Serves as both input and output so the
/// update command can rewrite the file it read.
pub struct CsvDatasetStore {
    path: PathBuf,
}

impl CsvDatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read a CSV export with a header row.
///
/// Short rows are tolerated: columns missing from a row read as empty
/// strings. Values beyond the header width have no column to land in; they
/// are dropped with a warning naming the line.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(EnrichError::MissingInput(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line());
        if row.len() < headers.len() {
            debug!(line = ?line, "Short CSV row, padding with empty values");
        }
        let dropped = overflow_fields(row.len(), headers.len());
        if dropped > 0 {
            warn!(
                path = %path.display(),
                line = ?line,
                dropped,
                "CSV row has more fields than the header; extra values are discarded"
            );
        }
        let mut record = CompanyRecord::default();
        for (idx, header) in headers.iter().enumerate() {
            record.set(header, row.get(idx).unwrap_or(""));
        }
        records.push(record);
    }

    info!(path = %path.display(), rows = records.len(), "Read company export");
    Ok(Dataset::new(headers, records))
}

/// Number of values in a row of `row_len` fields that fall past the header
fn overflow_fields(row_len: usize, header_len: usize) -> usize {
    row_len.saturating_sub(header_len)
}

/// Write the dataset as CSV in header order, replacing any existing file
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&dataset.headers)?;
    for record in &dataset.records {
        writer.write_record(dataset.headers.iter().map(|h| record.get(h)))?;
    }
    writer.flush()?;

    metrics::output::rows_written("csv", dataset.len());
    info!(path = %path.display(), rows = dataset.len(), "Wrote CSV output");
    Ok(())
}

impl DatasetSourcePort for CsvDatasetStore {
    fn load(&self) -> Result<Dataset> {
        read_dataset(&self.path)
    }
}

impl DatasetSinkPort for CsvDatasetStore {
    fn write(&self, dataset: &Dataset) -> Result<()> {
        write_dataset(&self.path, dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
