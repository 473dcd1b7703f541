use chrono::{DateTime, Utc};

use crate::parser::extract_slug;
use crate::types::CompanyRecord;

const BANNER_WIDTH: usize = 70;

/// Web searches likely to surface founder names for a company
pub fn founder_search_queries(record: &CompanyRecord) -> Vec<String> {
    let name = record.company_name.trim();
    let mut queries = vec![
        format!("{} Y Combinator founder", name),
        format!("{} founder CEO", name),
        format!("{} YC {}", name, record.batch.trim()).trim_end().to_string(),
    ];
    if let Some(slug) = extract_slug(&record.yc_link) {
        queries.push(format!("{} founder", slug));
    }
    queries
}

/// The three fixed funding searches written to the search template
pub fn funding_search_queries(company_name: &str) -> [String; 3] {
    [
        format!("\"{} raised funding\"", company_name),
        format!("\"{} seed round\"", company_name),
        format!("\"{} Y Combinator funding\"", company_name),
    ]
}

/// Render the plain-text funding search template for the first `limit`
/// companies.
pub fn render_search_template(
    records: &[CompanyRecord],
    limit: usize,
    generated_at: DateTime<Utc>,
) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = format!(
        "{banner}\nFUNDING ROUND SEARCH TEMPLATE\nGenerated: {}\n{banner}\n\n\
         Search queries for finding funding information:\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    for (idx, record) in records.iter().take(limit).enumerate() {
        out.push_str(&format!("{}. {} ({})\n", idx + 1, record.company_name, record.batch));
        for query in funding_search_queries(&record.company_name) {
            out.push_str(&format!("   - {}\n", query));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(name: &str, batch: &str, link: &str) -> CompanyRecord {
        let mut record = CompanyRecord::new(name);
        record.batch = batch.to_string();
        record.yc_link = link.to_string();
        record
    }

    #[test]
    fn test_founder_queries_include_slug() {
        let queries = founder_search_queries(&record(
            "Blue",
            "Summer 2025",
            "https://www.ycombinator.com/companies/blue",
        ));
        assert_eq!(
            queries,
            vec![
                "Blue Y Combinator founder",
                "Blue founder CEO",
                "Blue YC Summer 2025",
                "blue founder",
            ]
        );
    }

    #[test]
    fn test_founder_queries_without_link_or_batch() {
        let queries = founder_search_queries(&record("Blue", "", ""));
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[2], "Blue YC");
    }

    #[test]
    fn test_template_limits_companies() {
        let records: Vec<CompanyRecord> = (1..=25)
            .map(|i| record(&format!("Company {}", i), "Summer 2025", ""))
            .collect();
        let generated_at = Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();

        let template = render_search_template(&records, 20, generated_at);

        assert!(template.contains("FUNDING ROUND SEARCH TEMPLATE"));
        assert!(template.contains("Generated: 2025-09-01 12:00:00 UTC"));
        assert!(template.contains("20. Company 20 (Summer 2025)"));
        assert!(!template.contains("Company 21"));
        assert_eq!(template.matches("   - ").count(), 60);
        assert!(template.contains("   - \"Company 1 seed round\""));
    }

    #[test]
    fn test_template_layout() {
        let records = vec![record("Blue", "Summer 2025", "")];
        let generated_at = Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();
        let banner = "=".repeat(70);

        let expected = format!(
            "{banner}\nFUNDING ROUND SEARCH TEMPLATE\nGenerated: 2025-09-01 12:00:00 UTC\n{banner}\n\n\
             Search queries for finding funding information:\n\n\
             1. Blue (Summer 2025)\n\
             \x20  - \"Blue raised funding\"\n\
             \x20  - \"Blue seed round\"\n\
             \x20  - \"Blue Y Combinator funding\"\n\n"
        );
        assert_eq!(render_search_template(&records, 20, generated_at), expected);
    }
}
