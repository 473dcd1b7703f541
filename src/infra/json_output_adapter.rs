use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::app::ports::DatasetSinkPort;
use crate::error::Result;
use crate::observability::metrics;
use crate::types::{Dataset, RecordRow};

/// Writes the dataset as a pretty-printed JSON array, one object per record
/// with keys in column order. Non-ASCII text is written as-is.
pub struct JsonDatasetWriter {
    path: PathBuf,
}

impl JsonDatasetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSinkPort for JsonDatasetWriter {
    fn write(&self, dataset: &Dataset) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let rows: Vec<RecordRow<'_>> = dataset.records.iter().map(|r| dataset.row(r)).collect();
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &rows)?;
        writer.flush()?;

        metrics::output::rows_written("json", dataset.len());
        info!(path = %self.path.display(), rows = dataset.len(), "Wrote JSON output");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
