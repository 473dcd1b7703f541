use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::*;
use crate::observability::metrics;
use crate::overrides::{FounderOverride, OverrideTable};
use crate::pipeline::processing::quality_gate::classify;
use crate::types::{CompanyRecord, DataQuality};

/// Tokens removed from a lowercased company name, in this order, to guess a
/// domain. Order matters: punctuation goes before the legal suffixes.
const DOMAIN_STRIP_TOKENS: [&str; 7] = [" ", ",", ".", "inc", "llc", "the", "-"];

/// Description keywords mapped to job listings, checked in priority order
const JOB_RULES: [(&[&str], &str); 3] = [
    (&["ai", "ml", "machine learning", "llm"], ML_JOBS),
    (&["developer", "code", "software"], SOFTWARE_JOBS),
    (&["data", "analytics"], DATA_JOBS),
];

/// Funding values written for companies without verified data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternDefaults {
    pub funding_stage: String,
    pub amount_raised: String,
    pub date_raised: String,
}

impl Default for PatternDefaults {
    fn default() -> Self {
        Self {
            funding_stage: DEFAULT_FUNDING_STAGE.to_string(),
            amount_raised: DEFAULT_AMOUNT_RAISED.to_string(),
            date_raised: DEFAULT_DATE_RAISED.to_string(),
        }
    }
}

/// What `merge_update` did to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Already classified as real; fields untouched
    AlreadyReal,
    /// Placeholder data replaced with an override
    Upgraded,
    /// Placeholder data with no override available
    StillPattern,
}

/// Trait for filling company records with founder, job and funding data
pub trait Enricher {
    /// Enrich a raw export row, preferring verified overrides
    fn enrich(&self, record: &CompanyRecord, overrides: &OverrideTable) -> CompanyRecord;

    /// Re-check an already enriched row and upgrade it in place when it is
    /// still placeholder data and an override has since become available
    fn merge_update_in_place(
        &self,
        record: &mut CompanyRecord,
        overrides: &OverrideTable,
    ) -> MergeOutcome;

    fn merge_update(&self, record: &CompanyRecord, overrides: &OverrideTable) -> CompanyRecord {
        let mut updated = record.clone();
        self.merge_update_in_place(&mut updated, overrides);
        updated
    }
}

/// Derive a likely domain from a company name.
///
/// `"Nox Metals, Inc."` becomes `"noxmetals.com"`: the name is lowercased,
/// then each strip token is removed everywhere it occurs.
pub fn extract_domain(company_name: &str) -> String {
    let mut domain = company_name.to_lowercase();
    for token in DOMAIN_STRIP_TOKENS {
        domain = domain.replace(token, "");
    }
    format!("{}.com", domain)
}

/// Pick placeholder job openings from the company description.
///
/// Keywords are matched as substrings of the lowercased description, so
/// "ai" also fires inside longer words.
pub fn match_job_openings(description: &str) -> &'static str {
    let desc_lower = description.to_lowercase();
    JOB_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| desc_lower.contains(k)))
        .map(|(_, jobs)| *jobs)
        .unwrap_or(DEFAULT_JOBS)
}

/// Default enricher backed by the placeholder rules
#[derive(Debug, Clone, Default)]
pub struct DefaultEnricher {
    pub defaults: PatternDefaults,
}

impl DefaultEnricher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: PatternDefaults) -> Self {
        Self { defaults }
    }

    /// Overwrite founder fields from an override. Optional job and funding
    /// values only replace the record's when the override carries them.
    fn apply_override(record: &mut CompanyRecord, entry: &FounderOverride) {
        record.founder_first_name = entry.founder_first.clone();
        record.founder_last_name = entry.founder_last.clone();
        record.founder_email = entry.email().to_string();
        record.founder_linkedin = entry.founder_linkedin.clone();
        record.website = entry.website.clone();
        if let Some(jobs) = &entry.jobs {
            record.job_openings = jobs.clone();
        }
        if let Some(stage) = &entry.funding_stage {
            record.funding_stage = stage.clone();
        }
        if let Some(amount) = &entry.amount_raised {
            record.amount_raised = amount.clone();
        }
        if let Some(date) = &entry.date_raised {
            record.date_raised = date.clone();
        }
        record.data_quality = Some(DataQuality::Real);
        metrics::enrich::override_applied();
    }

    fn fill_pattern(&self, record: &mut CompanyRecord) {
        let domain = extract_domain(&record.company_name);

        record.founder_first_name = TEAM_SENTINEL.to_string();
        record.founder_last_name = String::new();
        record.founder_email = format!("{}{}", GENERIC_EMAIL_PREFIX, domain);
        record.founder_linkedin = String::new();
        record.job_openings = match_job_openings(&record.company_description).to_string();
        record.funding_stage = self.defaults.funding_stage.clone();
        record.amount_raised = self.defaults.amount_raised.clone();
        record.date_raised = self.defaults.date_raised.clone();
        record.website = domain;
        record.data_quality = Some(DataQuality::Pattern);
    }
}

impl Enricher for DefaultEnricher {
    fn enrich(&self, record: &CompanyRecord, overrides: &OverrideTable) -> CompanyRecord {
        let mut enriched = record.clone();

        // Placeholder values first so an override without job or funding
        // fields still leaves them populated.
        self.fill_pattern(&mut enriched);
        if let Some(entry) = overrides.get(&record.company_name) {
            Self::apply_override(&mut enriched, entry);
        }

        let quality = enriched.data_quality.unwrap_or(DataQuality::Pattern);
        debug!(company = %record.company_name, quality = %quality, "Enriched record");
        metrics::enrich::record_enriched(quality.as_str());
        enriched
    }

    fn merge_update_in_place(
        &self,
        record: &mut CompanyRecord,
        overrides: &OverrideTable,
    ) -> MergeOutcome {
        let quality = classify(record);
        record.data_quality = Some(quality);

        if quality == DataQuality::Real {
            metrics::update::record_unchanged(quality.as_str());
            return MergeOutcome::AlreadyReal;
        }

        match overrides.get(&record.company_name) {
            Some(entry) => {
                Self::apply_override(record, entry);
                debug!(company = %record.company_name, "Upgraded placeholder record");
                metrics::update::record_upgraded();
                MergeOutcome::Upgraded
            }
            None => {
                metrics::update::record_unchanged(quality.as_str());
                MergeOutcome::StillPattern
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides() -> OverrideTable {
        OverrideTable::from_entries([
            (
                "Nox Metals",
                FounderOverride {
                    founder_first: "Zane".to_string(),
                    founder_last: "Hengsperger".to_string(),
                    founder_email: Some("zane@noxmetals.co".to_string()),
                    founder_linkedin: "linkedin.com/in/zanehh".to_string(),
                    website: "noxmetals.co".to_string(),
                    jobs: Some("Founding Software Engineer, Software Engineer".to_string()),
                    funding_stage: Some("Seed".to_string()),
                    amount_raised: Some("$2M".to_string()),
                    date_raised: Some("Summer 2025".to_string()),
                },
            ),
            (
                "Freya",
                FounderOverride {
                    founder_first: "Tunga".to_string(),
                    founder_last: "Bayrak".to_string(),
                    founder_email: Some("tunga@freyavoice.ai".to_string()),
                    founder_linkedin: "linkedin.com/in/tunga-bayrak".to_string(),
                    website: "freyavoice.ai".to_string(),
                    jobs: None,
                    funding_stage: None,
                    amount_raised: None,
                    date_raised: None,
                },
            ),
        ])
        .unwrap()
    }

    fn raw_record(name: &str, description: &str) -> CompanyRecord {
        let mut record = CompanyRecord::new(name);
        record.yc_link = format!("https://www.ycombinator.com/companies/{}", name.to_lowercase());
        record.batch = "Summer 2025".to_string();
        record.company_description = description.to_string();
        record
    }

    #[test]
    fn test_extract_domain() {
        // "inc" is a strip token, so it disappears along with the punctuation
        assert_eq!(extract_domain("Nox Metals, Inc."), "noxmetals.com");
        assert_eq!(extract_domain("Blue"), "blue.com");
        assert_eq!(extract_domain("Acme LLC"), "acme.com");
        assert_eq!(extract_domain("The Wave-Co"), "waveco.com");
        assert_eq!(extract_domain("Athena"), "aena.com");
    }

    #[test]
    fn test_job_matching_priority() {
        assert_eq!(match_job_openings("LLM agents for developers"), ML_JOBS);
        assert_eq!(match_job_openings("Code review for developer teams"), SOFTWARE_JOBS);
        assert_eq!(match_job_openings("Warehouse DATA pipelines"), DATA_JOBS);
        assert_eq!(match_job_openings("Bakery delivery"), DEFAULT_JOBS);
        assert_eq!(match_job_openings(""), DEFAULT_JOBS);
        // substring match: "maintenance" contains "ai"
        assert_eq!(match_job_openings("Maintenance scheduling"), ML_JOBS);
    }

    #[test]
    fn test_enrich_with_override() {
        let enricher = DefaultEnricher::new();
        let record = raw_record("Nox Metals", "Metal recycling");

        let result = enricher.enrich(&record, &overrides());

        assert_eq!(result.founder_first_name, "Zane");
        assert_eq!(result.founder_email, "zane@noxmetals.co");
        assert_eq!(result.website, "noxmetals.co");
        assert_eq!(result.amount_raised, "$2M");
        assert_eq!(result.data_quality, Some(DataQuality::Real));
        assert_eq!(result.yc_link, record.yc_link);
        assert_eq!(classify(&result), DataQuality::Real);
    }

    #[test]
    fn test_enrich_partial_override_keeps_placeholder_jobs() {
        let enricher = DefaultEnricher::new();
        let record = raw_record("Freya", "Voice AI for call centers");

        let result = enricher.enrich(&record, &overrides());

        assert_eq!(result.founder_first_name, "Tunga");
        assert_eq!(result.job_openings, ML_JOBS);
        assert_eq!(result.amount_raised, DEFAULT_AMOUNT_RAISED);
        assert_eq!(classify(&result), DataQuality::Real);
    }

    #[test]
    fn test_enrich_pattern_branch() {
        let enricher = DefaultEnricher::new();
        let record = raw_record("Paloma Health", "Analytics for clinics");

        let result = enricher.enrich(&record, &overrides());

        assert_eq!(result.founder_first_name, TEAM_SENTINEL);
        assert_eq!(result.founder_last_name, "");
        assert_eq!(result.founder_email, "hello@palomahealth.com");
        assert_eq!(result.founder_linkedin, "");
        assert_eq!(result.website, "palomahealth.com");
        assert_eq!(result.job_openings, DATA_JOBS);
        assert_eq!(result.funding_stage, "Seed");
        assert_eq!(result.amount_raised, "$1.5M");
        assert_eq!(result.date_raised, "Summer 2025");
        assert_eq!(result.data_quality, Some(DataQuality::Pattern));
        assert_eq!(classify(&result), DataQuality::Pattern);
    }

    #[test]
    fn test_enrich_uses_configured_defaults() {
        let enricher = DefaultEnricher::with_defaults(PatternDefaults {
            funding_stage: "Pre-Seed".to_string(),
            amount_raised: "$500K".to_string(),
            date_raised: "Winter 2026".to_string(),
        });
        let result = enricher.enrich(&raw_record("Acme", ""), &OverrideTable::new());
        assert_eq!(result.funding_stage, "Pre-Seed");
        assert_eq!(result.amount_raised, "$500K");
        assert_eq!(result.date_raised, "Winter 2026");
    }

    #[test]
    fn test_classification_matches_override_membership() {
        let enricher = DefaultEnricher::new();
        let table = overrides();
        for name in ["Nox Metals", "Freya", "Blue", "Team", ""] {
            let result = enricher.enrich(&raw_record(name, "software"), &table);
            assert_eq!(
                classify(&result) == DataQuality::Real,
                table.contains(name),
                "classification mismatch for {:?}",
                name
            );
        }
    }

    #[test]
    fn test_merge_update_upgrades_pattern_record() {
        let enricher = DefaultEnricher::new();
        let table = overrides();
        let pattern = enricher.enrich(&raw_record("Freya", "Voice agents"), &OverrideTable::new());
        assert_eq!(pattern.data_quality, Some(DataQuality::Pattern));

        let mut updated = pattern.clone();
        let outcome = enricher.merge_update_in_place(&mut updated, &table);

        assert_eq!(outcome, MergeOutcome::Upgraded);
        assert_eq!(updated.founder_first_name, "Tunga");
        // no job or funding fields in the override: existing values stay
        assert_eq!(updated.job_openings, pattern.job_openings);
        assert_eq!(updated.amount_raised, pattern.amount_raised);
        assert_eq!(updated.data_quality, Some(DataQuality::Real));
    }

    #[test]
    fn test_merge_update_leaves_real_records_alone() {
        let enricher = DefaultEnricher::new();
        let mut record = raw_record("Nox Metals", "");
        record.founder_first_name = "Someone".to_string();
        record.founder_email = "someone@nox.com".to_string();
        record.founder_linkedin = "linkedin.com/in/someone".to_string();

        let mut updated = record.clone();
        let outcome = enricher.merge_update_in_place(&mut updated, &overrides());

        assert_eq!(outcome, MergeOutcome::AlreadyReal);
        assert_eq!(updated.founder_first_name, "Someone");
        assert_eq!(updated.data_quality, Some(DataQuality::Real));
    }

    #[test]
    fn test_merge_update_without_override() {
        let enricher = DefaultEnricher::new();
        let pattern = enricher.enrich(&raw_record("Acme", ""), &OverrideTable::new());

        let mut updated = pattern.clone();
        let outcome = enricher.merge_update_in_place(&mut updated, &overrides());

        assert_eq!(outcome, MergeOutcome::StillPattern);
        assert_eq!(updated, pattern);
    }

    #[test]
    fn test_merge_update_is_idempotent() {
        let enricher = DefaultEnricher::new();
        let table = overrides();
        for name in ["Nox Metals", "Freya", "Acme"] {
            let start = enricher.enrich(&raw_record(name, "data"), &OverrideTable::new());
            let once = enricher.merge_update(&start, &table);
            let twice = enricher.merge_update(&once, &table);
            assert_eq!(once, twice);
        }
    }
}
