use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::app::ports::{DatasetSinkPort, DatasetSourcePort};
use crate::constants::CANONICAL_COLUMNS;
use crate::observability::metrics;
use crate::overrides::OverrideTable;
use crate::pipeline::processing::enrich::{DefaultEnricher, Enricher};
use crate::types::{CompanyRecord, DataQuality, Dataset};

/// Result of a complete enrich run
#[derive(Debug)]
pub struct EnrichSummary {
    pub total: usize,
    pub real: usize,
    pub pattern: usize,
    pub outputs: Vec<String>,
    /// First few verified records, for a quick visual check
    pub real_samples: Vec<CompanyRecord>,
}

/// Use case for turning a raw company export into an enriched one
pub struct EnrichUseCase {
    enricher: Box<dyn Enricher>,
    overrides: OverrideTable,
    outputs: Vec<Box<dyn DatasetSinkPort>>,
    sample_limit: usize,
}

impl EnrichUseCase {
    pub fn new(
        enricher: Box<dyn Enricher>,
        overrides: OverrideTable,
        outputs: Vec<Box<dyn DatasetSinkPort>>,
    ) -> Self {
        Self {
            enricher,
            overrides,
            outputs,
            sample_limit: 5,
        }
    }

    /// Create a use case with the default placeholder rules
    pub fn with_default_enricher(
        overrides: OverrideTable,
        outputs: Vec<Box<dyn DatasetSinkPort>>,
    ) -> Self {
        Self::new(Box::new(DefaultEnricher::new()), overrides, outputs)
    }

    pub fn with_sample_limit(mut self, sample_limit: usize) -> Self {
        self.sample_limit = sample_limit;
        self
    }

    /// Enrich every record of a dataset, keeping row order and extra columns
    pub fn enrich_dataset(&self, dataset: &Dataset) -> Dataset {
        let mut enriched = Dataset::new(
            dataset.headers.clone(),
            dataset
                .records
                .iter()
                .map(|record| self.enricher.enrich(record, &self.overrides))
                .collect(),
        );
        enriched.ensure_columns(&CANONICAL_COLUMNS);
        metrics::enrich::batch_processed();
        enriched
    }

    #[instrument(skip(self, source), fields(overrides = self.overrides.len()))]
    pub fn run(&self, source: &dyn DatasetSourcePort) -> Result<EnrichSummary> {
        let dataset = source.load().context("failed to read company export")?;
        info!(companies = dataset.len(), "Enriching companies");

        let enriched = self.enrich_dataset(&dataset);
        for (idx, record) in enriched.records.iter().enumerate() {
            info!(
                "[{}/{}] {} {}",
                idx + 1,
                enriched.len(),
                record.data_quality.unwrap_or(DataQuality::Pattern),
                record.company_name
            );
        }

        let mut outputs = Vec::new();
        for output in &self.outputs {
            output
                .write(&enriched)
                .with_context(|| format!("failed to write {}", output.describe()))?;
            outputs.push(output.describe());
        }

        let real = enriched.count_by_quality(DataQuality::Real);
        let real_samples = enriched
            .records
            .iter()
            .filter(|r| r.data_quality == Some(DataQuality::Real))
            .take(self.sample_limit)
            .cloned()
            .collect();

        Ok(EnrichSummary {
            total: enriched.len(),
            real,
            pattern: enriched.len() - real,
            outputs,
            real_samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;
    use crate::overrides::FounderOverride;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StaticSource(Dataset);

    impl DatasetSourcePort for StaticSource {
        fn load(&self) -> error::Result<Dataset> {
            Ok(self.0.clone())
        }
    }

    struct MockSink {
        written: Rc<RefCell<Vec<Dataset>>>,
    }

    impl DatasetSinkPort for MockSink {
        fn write(&self, dataset: &Dataset) -> error::Result<()> {
            self.written.borrow_mut().push(dataset.clone());
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn blue_override() -> OverrideTable {
        OverrideTable::from_entries([(
            "Blue",
            FounderOverride {
                founder_first: "Omar".to_string(),
                founder_last: "Abdelaziz".to_string(),
                founder_email: Some("omar@heyblue.com".to_string()),
                founder_linkedin: "linkedin.com/in/oabdelaziz".to_string(),
                website: "heyblue.com".to_string(),
                jobs: None,
                funding_stage: None,
                amount_raised: None,
                date_raised: None,
            },
        )])
        .unwrap()
    }

    #[test]
    fn test_enrich_use_case() {
        let written = Rc::new(RefCell::new(Vec::new()));
        let sink = MockSink {
            written: written.clone(),
        };
        let use_case = EnrichUseCase::with_default_enricher(blue_override(), vec![Box::new(sink)]);

        let dataset = Dataset::new(
            vec!["Company_Name".to_string(), "Batch".to_string()],
            vec![
                CompanyRecord::new("Blue"),
                CompanyRecord::new("Acme"),
                CompanyRecord::new("Kernel"),
            ],
        );

        let summary = use_case.run(&StaticSource(dataset)).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.real, 1);
        assert_eq!(summary.pattern, 2);
        assert_eq!(summary.outputs, vec!["memory"]);
        assert_eq!(summary.real_samples.len(), 1);
        assert_eq!(summary.real_samples[0].founder_first_name, "Omar");

        let written = written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].headers.len(), CANONICAL_COLUMNS.len());
        assert_eq!(&written[0].headers[..2], &["Company_Name", "Batch"]);
    }
}
