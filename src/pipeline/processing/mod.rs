pub mod enrich;
pub mod funding;
pub mod quality_gate;
pub mod search;
