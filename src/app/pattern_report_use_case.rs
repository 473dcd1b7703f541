use anyhow::{Context, Result};

use crate::app::ports::DatasetSourcePort;
use crate::pipeline::processing::quality_gate::is_pattern_data;
use crate::pipeline::processing::search::founder_search_queries;
use crate::types::Dataset;

const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// A company still carrying placeholder founder data
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub company_name: String,
    pub yc_link: String,
    pub website: String,
    pub description: String,
    pub search_queries: Vec<String>,
}

#[derive(Debug)]
pub struct PatternReport {
    pub total: usize,
    pub pattern_count: usize,
    /// At most `limit` entries, in file order
    pub entries: Vec<PatternEntry>,
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// List the companies that still need real founder research
pub fn build_pattern_report(dataset: &Dataset, limit: usize) -> PatternReport {
    let pattern: Vec<_> = dataset.records.iter().filter(|r| is_pattern_data(r)).collect();

    let entries = pattern
        .iter()
        .take(limit)
        .map(|record| PatternEntry {
            company_name: record.company_name.clone(),
            yc_link: record.yc_link.clone(),
            website: record.website.clone(),
            description: preview(&record.company_description, DESCRIPTION_PREVIEW_CHARS),
            search_queries: founder_search_queries(record),
        })
        .collect();

    PatternReport {
        total: dataset.len(),
        pattern_count: pattern.len(),
        entries,
    }
}

pub fn run_pattern_report(source: &dyn DatasetSourcePort, limit: usize) -> Result<PatternReport> {
    let dataset = source.load().context("failed to read enriched export")?;
    Ok(build_pattern_report(&dataset, limit))
}
