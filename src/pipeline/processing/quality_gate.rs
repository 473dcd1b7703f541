use crate::constants::{GENERIC_EMAIL_PREFIX, TEAM_SENTINEL};
use crate::types::{CompanyRecord, DataQuality};

/// Classify a record by its founder fields alone.
///
/// A record is placeholder data when any of these hold:
/// - the founder first name is empty or the `Team` sentinel
/// - the founder email is a generic `hello@` inbox
/// - there is no founder LinkedIn
///
/// The stored `data_quality` column is ignored so re-runs always agree with
/// the fields themselves.
pub fn classify(record: &CompanyRecord) -> DataQuality {
    if is_pattern_data(record) {
        DataQuality::Pattern
    } else {
        DataQuality::Real
    }
}

pub fn is_pattern_data(record: &CompanyRecord) -> bool {
    let first = record.founder_first_name.trim();
    if first.is_empty() || first == TEAM_SENTINEL {
        return true;
    }
    if record.founder_email.trim().starts_with(GENERIC_EMAIL_PREFIX) {
        return true;
    }
    record.founder_linkedin.trim().is_empty()
}
