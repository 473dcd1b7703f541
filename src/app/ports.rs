use crate::error::Result;
use crate::types::Dataset;

/// Where a run reads its company export from
pub trait DatasetSourcePort {
    fn load(&self) -> Result<Dataset>;
}

/// Where a run writes the enriched export to. Writes replace the whole
/// target.
pub trait DatasetSinkPort {
    fn write(&self, dataset: &Dataset) -> Result<()>;

    /// Human readable target, for logs and the run summary
    fn describe(&self) -> String;
}

/// Destination for plain-text reports such as the search template
pub trait TextSinkPort {
    fn write_text(&self, contents: &str) -> Result<()>;

    fn describe(&self) -> String;
}
