use crate::constants::{GENERIC_EMAIL_PREFIX, TEAM_SENTINEL};
use crate::error::{EnrichError, Result};
use crate::parser::{candidate_emails, clean_website_domain};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Verified founder data for one company.
///
/// Job and funding fields are optional: when absent, the record keeps what it
/// already has (or what the placeholder rules produce for a fresh record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderOverride {
    pub founder_first: String,
    #[serde(default)]
    pub founder_last: String,
    #[serde(default)]
    pub founder_email: Option<String>,
    pub founder_linkedin: String,
    pub website: String,
    #[serde(default)]
    pub jobs: Option<String>,
    #[serde(default)]
    pub funding_stage: Option<String>,
    #[serde(default)]
    pub amount_raised: Option<String>,
    #[serde(default)]
    pub date_raised: Option<String>,
}

impl FounderOverride {
    /// Email to write for this founder; empty only before validation
    pub fn email(&self) -> &str {
        self.founder_email.as_deref().unwrap_or("")
    }

    /// Fill in a missing email from the website and check that the entry
    /// would be classified as real data once applied.
    fn validate(mut self, company: &str) -> Result<Self> {
        let invalid = |reason: &str| EnrichError::InvalidOverride {
            company: company.to_string(),
            reason: reason.to_string(),
        };

        let first = self.founder_first.trim();
        if first.is_empty() || first == TEAM_SENTINEL {
            return Err(invalid("founder_first must name a real person"));
        }
        if self.founder_linkedin.trim().is_empty() {
            return Err(invalid("founder_linkedin is required"));
        }
        if self.website.trim().is_empty() {
            return Err(invalid("website is required"));
        }

        let has_email = self
            .founder_email
            .as_deref()
            .map(|e| !e.trim().is_empty())
            .unwrap_or(false);
        if !has_email {
            let domain = clean_website_domain(&self.website)
                .ok_or_else(|| invalid("cannot derive an email without a website"))?;
            let derived = candidate_emails(&domain, &self.founder_first, &self.founder_last)
                .into_iter()
                .next()
                .ok_or_else(|| invalid("cannot derive an email from founder name"))?;
            debug!(company, email = %derived, "Derived founder email from website");
            self.founder_email = Some(derived);
        }

        if self.email().trim().starts_with(GENERIC_EMAIL_PREFIX) {
            return Err(invalid("founder_email is a generic inbox"));
        }
        Ok(self)
    }
}

/// On-disk shape of the override file
#[derive(Debug, Default, Deserialize, Serialize)]
struct OverrideFile {
    #[serde(default)]
    companies: BTreeMap<String, FounderOverride>,
}

/// Company name to verified founder data. Loaded once per run and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, FounderOverride>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from in-memory entries, validating each one
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, FounderOverride)>,
        S: Into<String>,
    {
        let mut table = HashMap::new();
        for (company, entry) in entries {
            let company = company.into();
            let entry = entry.validate(&company)?;
            table.insert(company, entry);
        }
        Ok(Self { entries: table })
    }

    /// Load the table from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EnrichError::Config(format!(
                "Failed to read override file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let file: OverrideFile = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(EnrichError::Config(format!(
                    "Unsupported override file extension {:?} for '{}'",
                    other,
                    path.display()
                )))
            }
        };

        let table = Self::from_entries(file.companies)?;
        info!(path = %path.display(), overrides = table.len(), "Loaded founder overrides");
        Ok(table)
    }

    pub fn get(&self, company_name: &str) -> Option<&FounderOverride> {
        self.entries.get(company_name)
    }

    pub fn contains(&self, company_name: &str) -> bool {
        self.entries.contains_key(company_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
