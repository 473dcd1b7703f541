use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use yc_enricher::app::enrich_use_case::EnrichUseCase;
use yc_enricher::app::funding_use_case::FundingUseCase;
use yc_enricher::app::pattern_report_use_case::run_pattern_report;
use yc_enricher::app::ports::DatasetSinkPort;
use yc_enricher::app::update_use_case::UpdateUseCase;
use yc_enricher::config::{Config, DEFAULT_CONFIG_PATH};
use yc_enricher::infra::{CsvDatasetStore, JsonDatasetWriter, TextFileWriter};
use yc_enricher::observability;
use yc_enricher::overrides::OverrideTable;
use yc_enricher::pipeline::processing::funding::FundingProgress;
use yc_enricher::pipeline::DefaultEnricher;

#[derive(Parser)]
#[command(name = "yc_enricher")]
#[command(about = "Founder and funding enrichment for Y Combinator company exports")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich a raw company export with real or placeholder founder data
    Enrich {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output_csv: Option<PathBuf>,
        #[arg(long)]
        output_json: Option<PathBuf>,
        #[arg(long)]
        overrides: Option<PathBuf>,
    },
    /// Upgrade placeholder rows of an enriched CSV in place
    Update {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        overrides: Option<PathBuf>,
    },
    /// List companies that still carry placeholder founder data
    Pattern {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Add funding columns and write the funding search template
    Funding {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        progress: Option<PathBuf>,
        #[arg(long)]
        template: Option<PathBuf>,
    },
}

fn load_overrides(path: &Path) -> Result<OverrideTable> {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "Override file not found; every company will get placeholder data"
        );
        return Ok(OverrideTable::new());
    }
    OverrideTable::load(path)
        .with_context(|| format!("failed to load overrides from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    let _log_guard = observability::init_logging(&config.logging.directory);

    match cli.command {
        Commands::Enrich {
            input,
            output_csv,
            output_json,
            overrides,
        } => {
            println!("🔄 Enriching company export...");
            let input = input.unwrap_or(config.paths.input_csv);
            let output_csv = output_csv.unwrap_or(config.paths.output_csv);
            let output_json = output_json.unwrap_or(config.paths.output_json);
            let overrides = load_overrides(&overrides.unwrap_or(config.paths.overrides))?;

            let outputs: Vec<Box<dyn DatasetSinkPort>> = vec![
                Box::new(CsvDatasetStore::new(output_csv)),
                Box::new(JsonDatasetWriter::new(output_json)),
            ];
            let use_case = EnrichUseCase::new(
                Box::new(DefaultEnricher::with_defaults(config.defaults)),
                overrides,
                outputs,
            )
            .with_sample_limit(config.report.real_sample_limit);

            let summary = use_case.run(&CsvDatasetStore::new(input))?;
            info!(
                total = summary.total,
                real = summary.real,
                pattern = summary.pattern,
                "Enrichment complete"
            );

            println!("\n📊 Enrichment Results:");
            println!("   Total companies: {}", summary.total);
            println!("   Real founder data: {}", summary.real);
            println!("   Pattern-filled: {}", summary.pattern);
            for output in &summary.outputs {
                println!("   Output file: {}", output);
            }
            if !summary.real_samples.is_empty() {
                println!("\n📋 Real data samples:");
                for record in &summary.real_samples {
                    println!("\n   Company: {}", record.company_name);
                    println!(
                        "   Founder: {} {}",
                        record.founder_first_name, record.founder_last_name
                    );
                    println!("   Email: {}", record.founder_email);
                    println!("   LinkedIn: {}", record.founder_linkedin);
                    println!("   Jobs: {}", record.job_openings);
                }
            }
        }
        Commands::Update { file, overrides } => {
            println!("🔄 Updating enriched export with real founder data...");
            let file = file.unwrap_or(config.paths.output_csv);
            let overrides = load_overrides(&overrides.unwrap_or(config.paths.overrides))?;

            let store = CsvDatasetStore::new(file);
            let summary = UpdateUseCase::new(
                Box::new(DefaultEnricher::with_defaults(config.defaults)),
                overrides,
            )
            .run(&store, &store)?;

            println!("\n📊 Update Results:");
            println!("   Total companies: {}", summary.total);
            println!("   Upgraded this run: {}", summary.upgraded);
            println!("   Real data: {}", summary.real());
            println!("   Pattern data: {}", summary.still_pattern);
            println!("   Updated file: {}", store.path().display());
        }
        Commands::Pattern { file, limit } => {
            let file = file.unwrap_or(config.paths.output_csv);
            let limit = limit.unwrap_or(config.report.pattern_list_limit);

            let report = run_pattern_report(&CsvDatasetStore::new(file), limit)?;
            println!(
                "Found {} of {} companies with pattern data:\n",
                report.pattern_count, report.total
            );
            for (idx, entry) in report.entries.iter().enumerate() {
                println!("{:3}. {}", idx + 1, entry.company_name);
                println!("     YC: {}", entry.yc_link);
                println!("     Website: {}", entry.website);
                println!("     Desc: {}", entry.description);
                for query in &entry.search_queries {
                    println!("     Search: {}", query);
                }
                println!();
            }
            if report.pattern_count > report.entries.len() {
                println!("... and {} more companies", report.pattern_count - report.entries.len());
            }
        }
        Commands::Funding {
            input,
            output,
            progress,
            template,
        } => {
            println!("🔄 Preparing funding round columns...");
            let input = input.unwrap_or(config.paths.input_csv);
            let output = output.unwrap_or(config.paths.funding_output_csv);
            let progress_path = progress.unwrap_or(config.paths.funding_progress);
            let template = template.unwrap_or(config.paths.search_template);

            let progress = FundingProgress::load(&progress_path).with_context(|| {
                format!("failed to load progress from {}", progress_path.display())
            })?;
            let summary = FundingUseCase::new(progress, config.report.search_template_limit).run(
                &CsvDatasetStore::new(input),
                &CsvDatasetStore::new(output),
                &TextFileWriter::new(template),
            )?;

            println!("\n📊 Funding Preparation Results:");
            println!("   Total companies: {}", summary.total);
            println!("   With recorded progress: {}", summary.with_progress);
            println!("   Output file: {}", summary.output);
            println!("   Search template: {}", summary.template);
        }
    }
    Ok(())
}
