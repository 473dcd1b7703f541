use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EnrichError, Result};
use crate::pipeline::processing::enrich::PatternDefaults;

pub const DEFAULT_CONFIG_PATH: &str = "enricher.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub defaults: PatternDefaults,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_csv: PathBuf,
    pub output_csv: PathBuf,
    pub output_json: PathBuf,
    pub overrides: PathBuf,
    pub funding_output_csv: PathBuf,
    pub funding_progress: PathBuf,
    pub search_template: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from("data/ycombinator_summer25.csv"),
            output_csv: PathBuf::from("output/final_enriched_summer25.csv"),
            output_json: PathBuf::from("output/final_enriched_summer25.json"),
            overrides: PathBuf::from("data/founders.toml"),
            funding_output_csv: PathBuf::from("output/yc_companies_with_funding.csv"),
            funding_progress: PathBuf::from("data/funding_search_progress.json"),
            search_template: PathBuf::from("output/funding_search_template.txt"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Companies listed in the funding search template
    pub search_template_limit: usize,
    /// Pattern companies listed by the pattern report
    pub pattern_list_limit: usize,
    /// Verified companies echoed after an enrich run
    pub real_sample_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            search_template_limit: 20,
            pattern_list_limit: 20,
            real_sample_limit: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            EnrichError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise use built-in defaults.
    /// A present but malformed file is still an error.
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            Self::load(config_path)
        } else {
            Ok(Self::default())
        }
    }
}
