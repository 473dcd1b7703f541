pub mod processing;

pub use processing::enrich::{
    extract_domain, DefaultEnricher, Enricher, MergeOutcome, PatternDefaults,
};
pub use processing::quality_gate::classify;
