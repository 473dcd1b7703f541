/// Column names of the company export. These are the exact CSV headers, so
/// they keep the mixed casing of the upstream spreadsheet.
pub const COMPANY_NAME: &str = "Company_Name";
pub const YC_LINK: &str = "YC_Link";
pub const BATCH: &str = "Batch";
pub const COMPANY_DESCRIPTION: &str = "company_description";
pub const FOUNDER_FIRST_NAME: &str = "founder_first_name";
pub const FOUNDER_LAST_NAME: &str = "founder_last_name";
pub const FOUNDER_EMAIL: &str = "founder_email";
pub const FOUNDER_LINKEDIN: &str = "founder_linkedin";
pub const WEBSITE: &str = "website";
pub const JOB_OPENINGS: &str = "job_openings";
pub const FUNDING_STAGE: &str = "funding_stage";
pub const AMOUNT_RAISED: &str = "amount_raised";
pub const DATE_RAISED: &str = "date_raised";
pub const DATA_QUALITY: &str = "data_quality";

/// Canonical column order used when the input lacks some of the columns
pub const CANONICAL_COLUMNS: [&str; 14] = [
    COMPANY_NAME,
    YC_LINK,
    BATCH,
    COMPANY_DESCRIPTION,
    FOUNDER_FIRST_NAME,
    FOUNDER_LAST_NAME,
    FOUNDER_EMAIL,
    FOUNDER_LINKEDIN,
    WEBSITE,
    JOB_OPENINGS,
    FUNDING_STAGE,
    AMOUNT_RAISED,
    DATE_RAISED,
    DATA_QUALITY,
];

// Columns added by the funding preparation step
pub const FUNDING_ROUND: &str = "funding_round";
pub const FUNDING_AMOUNT: &str = "funding_amount";
pub const FUNDING_DATE: &str = "funding_date";
pub const FUNDING_SOURCE: &str = "funding_source";
pub const COMPANY_SLUG: &str = "company_slug";

pub const FUNDING_COLUMNS: [&str; 5] = [
    FUNDING_ROUND,
    FUNDING_AMOUNT,
    FUNDING_DATE,
    FUNDING_SOURCE,
    COMPANY_SLUG,
];

/// Placeholder first name written for companies without verified founders
pub const TEAM_SENTINEL: &str = "Team";
/// Prefix of the generic inbox address synthesized for placeholder records
pub const GENERIC_EMAIL_PREFIX: &str = "hello@";

pub const DEFAULT_FUNDING_STAGE: &str = "Seed";
pub const DEFAULT_AMOUNT_RAISED: &str = "$1.5M";
pub const DEFAULT_DATE_RAISED: &str = "Summer 2025";
pub const DEFAULT_FUNDING_SOURCE: &str = "YC Batch (Default - Needs Verification)";
pub const MANUAL_FUNDING_SOURCE: &str = "Manual";

pub const ML_JOBS: &str = "ML Engineering Intern, AI Research Intern";
pub const SOFTWARE_JOBS: &str = "Software Engineering Intern, Product Engineering Intern";
pub const DATA_JOBS: &str = "Data Science Intern, Analytics Intern";
pub const DEFAULT_JOBS: &str = "Software Engineering Intern, Product Intern";
