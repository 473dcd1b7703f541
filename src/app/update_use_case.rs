use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::app::ports::{DatasetSinkPort, DatasetSourcePort};
use crate::constants::CANONICAL_COLUMNS;
use crate::overrides::OverrideTable;
use crate::pipeline::processing::enrich::{DefaultEnricher, Enricher, MergeOutcome};
use crate::types::Dataset;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub total: usize,
    pub upgraded: usize,
    pub already_real: usize,
    pub still_pattern: usize,
}

impl UpdateSummary {
    pub fn real(&self) -> usize {
        self.upgraded + self.already_real
    }
}

/// Use case for upgrading placeholder rows of an already enriched export
/// when new overrides become available. Real rows are never reprocessed.
pub struct UpdateUseCase {
    enricher: Box<dyn Enricher>,
    overrides: OverrideTable,
}

impl UpdateUseCase {
    pub fn new(enricher: Box<dyn Enricher>, overrides: OverrideTable) -> Self {
        Self { enricher, overrides }
    }

    pub fn with_default_enricher(overrides: OverrideTable) -> Self {
        Self::new(Box::new(DefaultEnricher::new()), overrides)
    }

    pub fn update_dataset(&self, dataset: &mut Dataset) -> UpdateSummary {
        let mut summary = UpdateSummary {
            total: dataset.len(),
            ..Default::default()
        };

        for record in dataset.records.iter_mut() {
            match self.enricher.merge_update_in_place(record, &self.overrides) {
                MergeOutcome::Upgraded => {
                    info!("Updated {} with real founder data", record.company_name);
                    summary.upgraded += 1;
                }
                MergeOutcome::AlreadyReal => summary.already_real += 1,
                MergeOutcome::StillPattern => summary.still_pattern += 1,
            }
        }
        dataset.ensure_columns(&CANONICAL_COLUMNS);
        summary
    }

    /// Read, update and rewrite. The sink normally points at the same file
    /// as the source.
    #[instrument(skip_all, fields(output = %sink.describe()))]
    pub fn run(
        &self,
        source: &dyn DatasetSourcePort,
        sink: &dyn DatasetSinkPort,
    ) -> Result<UpdateSummary> {
        let mut dataset = source.load().context("failed to read enriched export")?;
        let summary = self.update_dataset(&mut dataset);

        sink.write(&dataset)
            .with_context(|| format!("failed to write {}", sink.describe()))?;
        info!(
            total = summary.total,
            upgraded = summary.upgraded,
            still_pattern = summary.still_pattern,
            "Update complete"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::FounderOverride;
    use crate::types::{CompanyRecord, DataQuality};

    fn overrides() -> OverrideTable {
        OverrideTable::from_entries([(
            "burnt",
            FounderOverride {
                founder_first: "Joseph".to_string(),
                founder_last: "Jacob".to_string(),
                founder_email: Some("joseph@getburnt.ai".to_string()),
                founder_linkedin: "linkedin.com/in/josephjacob93".to_string(),
                website: "getburnt.ai".to_string(),
                jobs: None,
                funding_stage: None,
                amount_raised: None,
                date_raised: None,
            },
        )])
        .unwrap()
    }

    #[test]
    fn test_update_dataset_counts() {
        let enricher = DefaultEnricher::new();
        let empty = OverrideTable::new();
        let mut real = CompanyRecord::new("Blue");
        real.founder_first_name = "Omar".to_string();
        real.founder_email = "omar@heyblue.com".to_string();
        real.founder_linkedin = "linkedin.com/in/oabdelaziz".to_string();

        let mut dataset = Dataset::new(
            vec!["Company_Name".to_string()],
            vec![
                enricher.enrich(&CompanyRecord::new("burnt"), &empty),
                enricher.enrich(&CompanyRecord::new("Acme"), &empty),
                real,
            ],
        );

        let use_case = UpdateUseCase::with_default_enricher(overrides());
        let summary = use_case.update_dataset(&mut dataset);

        assert_eq!(
            summary,
            UpdateSummary {
                total: 3,
                upgraded: 1,
                already_real: 1,
                still_pattern: 1,
            }
        );
        assert_eq!(summary.real(), 2);
        assert_eq!(dataset.records[0].founder_first_name, "Joseph");
        assert_eq!(dataset.records[2].data_quality, Some(DataQuality::Real));

        // second pass changes nothing
        let before = dataset.records.clone();
        let again = use_case.update_dataset(&mut dataset);
        assert_eq!(again.upgraded, 0);
        assert_eq!(again.already_real, 2);
        assert_eq!(dataset.records, before);
    }
}
