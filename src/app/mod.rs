pub mod enrich_use_case;
pub mod funding_use_case;
pub mod pattern_report_use_case;
pub mod ports;
pub mod update_use_case;
