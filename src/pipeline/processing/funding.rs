use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::constants::*;
use crate::error::Result;
use crate::observability::metrics;
use crate::parser::{extract_slug, parse_funding_mention};
use crate::types::CompanyRecord;

/// Manually gathered funding data for one company. Either the structured
/// fields or a pasted `mention` (e.g. a news headline) may be given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingProgressEntry {
    #[serde(default)]
    pub funding_round: Option<String>,
    #[serde(default)]
    pub funding_amount: Option<String>,
    #[serde(default)]
    pub funding_date: Option<String>,
    #[serde(default)]
    pub funding_source: Option<String>,
    #[serde(default)]
    pub mention: Option<String>,
}

/// Funding research carried across runs, keyed by lowercased company name.
///
/// Read once at start; never locked, so concurrent runs may race on it.
#[derive(Debug, Clone, Default)]
pub struct FundingProgress {
    entries: HashMap<String, FundingProgressEntry>,
}

impl FundingProgress {
    /// Load progress from a JSON object file. A missing file is an empty
    /// progress set, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No funding progress file");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let raw: HashMap<String, FundingProgressEntry> = serde_json::from_str(&content)?;
        let entries = raw
            .into_iter()
            .map(|(name, entry)| (name.to_lowercase(), entry))
            .collect::<HashMap<_, _>>();
        info!(path = %path.display(), companies = entries.len(), "Loaded funding progress");
        Ok(Self { entries })
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, FundingProgressEntry)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, entry)| (name.as_ref().to_lowercase(), entry))
                .collect(),
        }
    }

    pub fn get(&self, company_name: &str) -> Option<&FundingProgressEntry> {
        self.entries.get(&company_name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Values written to the funding columns for one company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingColumns {
    pub round: String,
    pub amount: String,
    pub date: String,
    pub source: String,
    pub slug: String,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Decide the funding columns for a record.
///
/// Without progress data every YC company is assumed to be at seed stage,
/// dated by its batch, with no amount and a source flagged for verification.
pub fn resolve_funding(record: &CompanyRecord, progress: &FundingProgress) -> FundingColumns {
    let slug = extract_slug(&record.yc_link).unwrap_or_default();

    let Some(entry) = progress.get(&record.company_name) else {
        return FundingColumns {
            round: DEFAULT_FUNDING_STAGE.to_string(),
            amount: String::new(),
            date: record.batch.clone(),
            source: DEFAULT_FUNDING_SOURCE.to_string(),
            slug,
        };
    };
    metrics::funding::progress_hit();

    let mut round = non_empty(&entry.funding_round);
    let mut amount = non_empty(&entry.funding_amount);
    if round.is_none() || amount.is_none() {
        if let Some(parsed) = entry.mention.as_deref().and_then(parse_funding_mention) {
            debug!(
                company = %record.company_name,
                round = %parsed.round,
                amount = %parsed.amount,
                "Parsed funding mention"
            );
            metrics::funding::mention_parsed();
            round = round.or(Some(parsed.round));
            amount = amount.or(Some(parsed.amount));
        }
    }

    FundingColumns {
        round: round.unwrap_or_default(),
        amount: amount.unwrap_or_default(),
        date: non_empty(&entry.funding_date).unwrap_or_default(),
        source: non_empty(&entry.funding_source)
            .unwrap_or_else(|| MANUAL_FUNDING_SOURCE.to_string()),
        slug,
    }
}

/// Write the resolved funding columns onto the record
pub fn apply_funding(record: &mut CompanyRecord, progress: &FundingProgress) {
    let columns = resolve_funding(record, progress);
    record.set(FUNDING_ROUND, columns.round);
    record.set(FUNDING_AMOUNT, columns.amount);
    record.set(FUNDING_DATE, columns.date);
    record.set(FUNDING_SOURCE, columns.source);
    record.set(COMPANY_SLUG, columns.slug);
}
