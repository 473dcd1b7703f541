use crate::constants::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Data-quality marker attached to every enriched record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataQuality {
    /// Founder and contact fields were manually verified
    Real,
    /// Fields were synthesized by default rules and still need verification
    Pattern,
}

impl DataQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataQuality::Real => "REAL",
            DataQuality::Pattern => "PATTERN",
        }
    }

    /// Lenient parse of an upstream label. Older exports decorate the marker
    /// (e.g. "✅ REAL"), so only the keyword is significant.
    pub fn parse_label(label: &str) -> Option<Self> {
        let upper = label.trim().to_uppercase();
        if upper.contains("PATTERN") {
            Some(DataQuality::Pattern)
        } else if upper.contains("REAL") {
            Some(DataQuality::Real)
        } else {
            None
        }
    }
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the company export.
///
/// The canonical columns are typed fields; anything else found in the input
/// lands in `extra` and is written back untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyRecord {
    pub company_name: String,
    pub yc_link: String,
    pub batch: String,
    pub company_description: String,
    pub founder_first_name: String,
    pub founder_last_name: String,
    pub founder_email: String,
    pub founder_linkedin: String,
    pub website: String,
    pub job_openings: String,
    pub funding_stage: String,
    pub amount_raised: String,
    pub date_raised: String,
    pub data_quality: Option<DataQuality>,
    pub extra: BTreeMap<String, String>,
}

impl CompanyRecord {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }

    /// Value of a column by header name; unknown columns read as empty
    pub fn get(&self, column: &str) -> &str {
        match column {
            COMPANY_NAME => &self.company_name,
            YC_LINK => &self.yc_link,
            BATCH => &self.batch,
            COMPANY_DESCRIPTION => &self.company_description,
            FOUNDER_FIRST_NAME => &self.founder_first_name,
            FOUNDER_LAST_NAME => &self.founder_last_name,
            FOUNDER_EMAIL => &self.founder_email,
            FOUNDER_LINKEDIN => &self.founder_linkedin,
            WEBSITE => &self.website,
            JOB_OPENINGS => &self.job_openings,
            FUNDING_STAGE => &self.funding_stage,
            AMOUNT_RAISED => &self.amount_raised,
            DATE_RAISED => &self.date_raised,
            DATA_QUALITY => self.data_quality.map(|q| q.as_str()).unwrap_or(""),
            other => self.extra.get(other).map(String::as_str).unwrap_or(""),
        }
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match column {
            COMPANY_NAME => self.company_name = value,
            YC_LINK => self.yc_link = value,
            BATCH => self.batch = value,
            COMPANY_DESCRIPTION => self.company_description = value,
            FOUNDER_FIRST_NAME => self.founder_first_name = value,
            FOUNDER_LAST_NAME => self.founder_last_name = value,
            FOUNDER_EMAIL => self.founder_email = value,
            FOUNDER_LINKEDIN => self.founder_linkedin = value,
            WEBSITE => self.website = value,
            JOB_OPENINGS => self.job_openings = value,
            FUNDING_STAGE => self.funding_stage = value,
            AMOUNT_RAISED => self.amount_raised = value,
            DATE_RAISED => self.date_raised = value,
            DATA_QUALITY => self.data_quality = DataQuality::parse_label(&value),
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }
}

/// A full export: header order plus rows
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<CompanyRecord>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, records: Vec<CompanyRecord>) -> Self {
        Self { headers, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append any of `columns` the header list does not already contain
    pub fn ensure_columns(&mut self, columns: &[&str]) {
        for column in columns {
            if !self.headers.iter().any(|h| h == column) {
                self.headers.push(column.to_string());
            }
        }
    }

    pub fn count_by_quality(&self, quality: DataQuality) -> usize {
        self.records
            .iter()
            .filter(|r| r.data_quality == Some(quality))
            .count()
    }

    /// Serializable view of a single row keyed in header order
    pub fn row<'a>(&'a self, record: &'a CompanyRecord) -> RecordRow<'a> {
        RecordRow {
            headers: &self.headers,
            record,
        }
    }
}

/// Borrowed row that serializes as a JSON object whose keys follow the
/// dataset header order.
pub struct RecordRow<'a> {
    headers: &'a [String],
    record: &'a CompanyRecord,
}

impl Serialize for RecordRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for header in self.headers {
            map.serialize_entry(header, self.record.get(header))?;
        }
        map.end()
    }
}
