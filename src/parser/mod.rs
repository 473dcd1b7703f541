//! Small text extractors used across the pipeline: YC profile slugs, funding
//! announcements and website domains.

use once_cell::sync::Lazy;
use regex::Regex;

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/companies/([^/]+)").expect("slug pattern compiles"));

/// Funding announcement phrasings, tried in order. Each pattern captures a
/// round label and a dollar amount, in whichever order the sentence uses.
static FUNDING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)raised\s+(\$[\d.]+[MBK]?)\s+(?:in\s+)?(?:a\s+)?(seed|Series\s+[A-Z]|pre-seed)\s+round",
        r"(?i)(seed|Series\s+[A-Z]|pre-seed)\s+round\s+of\s+(\$[\d.]+[MBK]?)",
        r"(?i)(\$[\d.]+[MBK]?)\s+(?:funding|raised)\s+(?:in\s+)?(seed|Series\s+[A-Z]|pre-seed)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("funding pattern compiles"))
    .collect()
});

/// A funding round extracted from free text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingMention {
    pub round: String,
    pub amount: String,
}

/// Pull the company slug out of a YC profile URL such as
/// `https://www.ycombinator.com/companies/blue`.
pub fn extract_slug(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    SLUG_PATTERN
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Find the first funding announcement in `text`.
///
/// The first pattern that matches wins. The capture holding a `$` is taken as
/// the amount and the other one as the round label.
pub fn parse_funding_mention(text: &str) -> Option<FundingMention> {
    for pattern in FUNDING_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            let first = captures.get(1)?.as_str();
            let second = captures.get(2)?.as_str();
            let (round, amount) = if first.contains('$') {
                (second, first)
            } else {
                (first, second)
            };
            return Some(FundingMention {
                round: round.to_string(),
                amount: amount.to_string(),
            });
        }
    }
    None
}

/// Strip scheme, `www.` and trailing slashes from a website value
pub fn clean_website_domain(website: &str) -> Option<String> {
    let website = website.trim();
    if website.is_empty() {
        return None;
    }
    let domain = website
        .replace("http://", "")
        .replace("https://", "")
        .replace("www.", "");
    let domain = domain.trim_end_matches('/');
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_string())
    }
}

/// Likely founder addresses for a domain, most common convention first
pub fn candidate_emails(domain: &str, first_name: &str, last_name: &str) -> Vec<String> {
    let first = first_name.trim().to_lowercase();
    if domain.is_empty() || first.is_empty() {
        return Vec::new();
    }
    let last = last_name.trim().to_lowercase();

    let mut emails = vec![format!("{}@{}", first, domain)];
    if !last.is_empty() {
        emails.push(format!("{}.{}@{}", first, last, domain));
        emails.push(format!("{}{}@{}", first, last, domain));
    }
    emails
}
