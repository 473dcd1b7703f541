//! Counters for the enrichment run.
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! embedding binary installs a recorder.

use std::fmt;

/// All metric names used by the enricher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Enrich metrics
    EnrichRecordsProcessed,
    EnrichOverridesApplied,
    EnrichBatchesProcessed,

    // Update metrics
    UpdateRecordsUpgraded,
    UpdateRecordsUnchanged,

    // Funding metrics
    FundingMentionsParsed,
    FundingProgressHits,

    // Output metrics
    OutputRowsWritten,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::EnrichRecordsProcessed => "yc_enrich_records_processed_total",
            MetricName::EnrichOverridesApplied => "yc_enrich_overrides_applied_total",
            MetricName::EnrichBatchesProcessed => "yc_enrich_batches_processed_total",

            MetricName::UpdateRecordsUpgraded => "yc_update_records_upgraded_total",
            MetricName::UpdateRecordsUnchanged => "yc_update_records_unchanged_total",

            MetricName::FundingMentionsParsed => "yc_funding_mentions_parsed_total",
            MetricName::FundingProgressHits => "yc_funding_progress_hits_total",

            MetricName::OutputRowsWritten => "yc_output_rows_written_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub mod enrich {
    use super::MetricName;

    /// Record that a record left the enrich step with the given quality
    pub fn record_enriched(quality: &'static str) {
        ::metrics::counter!(MetricName::EnrichRecordsProcessed.as_str(), "quality" => quality)
            .increment(1);
    }

    pub fn override_applied() {
        ::metrics::counter!(MetricName::EnrichOverridesApplied.as_str()).increment(1);
    }

    pub fn batch_processed() {
        ::metrics::counter!(MetricName::EnrichBatchesProcessed.as_str()).increment(1);
    }
}

pub mod update {
    use super::MetricName;

    pub fn record_upgraded() {
        ::metrics::counter!(MetricName::UpdateRecordsUpgraded.as_str()).increment(1);
    }

    /// Record that a record was left as-is, labelled with its classification
    pub fn record_unchanged(quality: &'static str) {
        ::metrics::counter!(MetricName::UpdateRecordsUnchanged.as_str(), "quality" => quality)
            .increment(1);
    }
}

pub mod funding {
    use super::MetricName;

    pub fn mention_parsed() {
        ::metrics::counter!(MetricName::FundingMentionsParsed.as_str()).increment(1);
    }

    pub fn progress_hit() {
        ::metrics::counter!(MetricName::FundingProgressHits.as_str()).increment(1);
    }
}

pub mod output {
    use super::MetricName;

    /// Record rows written to an output file of the given format
    pub fn rows_written(format: &'static str, rows: usize) {
        ::metrics::counter!(MetricName::OutputRowsWritten.as_str(), "format" => format)
            .increment(rows as u64);
    }
}
