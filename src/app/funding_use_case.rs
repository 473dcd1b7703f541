use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, instrument};

use crate::app::ports::{DatasetSinkPort, DatasetSourcePort, TextSinkPort};
use crate::constants::FUNDING_COLUMNS;
use crate::pipeline::processing::funding::{apply_funding, FundingProgress};
use crate::pipeline::processing::search::render_search_template;
use crate::types::Dataset;

#[derive(Debug)]
pub struct FundingSummary {
    pub total: usize,
    pub with_progress: usize,
    pub output: String,
    pub template: String,
}

/// Use case for adding funding columns to an export and writing the search
/// template used to research the missing rounds by hand
pub struct FundingUseCase {
    progress: FundingProgress,
    template_limit: usize,
}

impl FundingUseCase {
    pub fn new(progress: FundingProgress, template_limit: usize) -> Self {
        Self {
            progress,
            template_limit,
        }
    }

    pub fn prepare_dataset(&self, dataset: &mut Dataset) -> usize {
        let mut with_progress = 0;
        for record in dataset.records.iter_mut() {
            if self.progress.get(&record.company_name).is_some() {
                with_progress += 1;
            }
            apply_funding(record, &self.progress);
        }
        dataset.ensure_columns(&FUNDING_COLUMNS);
        with_progress
    }

    #[instrument(skip_all, fields(progress = self.progress.len()))]
    pub fn run(
        &self,
        source: &dyn DatasetSourcePort,
        output: &dyn DatasetSinkPort,
        template: &dyn TextSinkPort,
    ) -> Result<FundingSummary> {
        let mut dataset = source.load().context("failed to read company export")?;
        let with_progress = self.prepare_dataset(&mut dataset);

        output
            .write(&dataset)
            .with_context(|| format!("failed to write {}", output.describe()))?;

        let text = render_search_template(&dataset.records, self.template_limit, Utc::now());
        template
            .write_text(&text)
            .with_context(|| format!("failed to write {}", template.describe()))?;
        info!(template = %template.describe(), "Created search template");

        Ok(FundingSummary {
            total: dataset.len(),
            with_progress,
            output: output.describe(),
            template: template.describe(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::pipeline::processing::funding::FundingProgressEntry;
    use crate::types::CompanyRecord;

    #[test]
    fn test_prepare_dataset_adds_columns() {
        let progress = FundingProgress::from_entries([(
            "Blue",
            FundingProgressEntry {
                funding_amount: Some("$1.5M".to_string()),
                ..Default::default()
            },
        )]);
        let use_case = FundingUseCase::new(progress, 20);

        let mut acme = CompanyRecord::new("Acme");
        acme.batch = "Summer 2025".to_string();
        let mut dataset = Dataset::new(
            vec![COMPANY_NAME.to_string(), BATCH.to_string()],
            vec![CompanyRecord::new("Blue"), acme],
        );

        let with_progress = use_case.prepare_dataset(&mut dataset);

        assert_eq!(with_progress, 1);
        assert_eq!(dataset.headers.len(), 2 + FUNDING_COLUMNS.len());
        assert_eq!(dataset.records[0].get(FUNDING_AMOUNT), "$1.5M");
        assert_eq!(dataset.records[0].get(FUNDING_SOURCE), MANUAL_FUNDING_SOURCE);
        assert_eq!(dataset.records[1].get(FUNDING_DATE), "Summer 2025");
    }
}
