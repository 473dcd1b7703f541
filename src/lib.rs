pub mod config;
pub mod constants;
pub mod error;
pub mod observability;
pub mod overrides;
pub mod parser;
pub mod pipeline;
pub mod types;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;
