use super::BatchedStatusLoader;
use crate::application::read_models::{FailingAssetsReport, FailingAssetsReportBuilder, LoadCounts};
use crate::ports::outbound::{AssetGraphRepository, ProgressReporter};
use crate::shared::Result;
use chrono::Utc;

/// ReportFailingAssetsUseCase - core use case of the tool
///
/// Drives the batched loader to completion, then builds the report of
/// failing assets and their downstream trees.
///
/// # Type Parameters
/// * `R` - AssetGraphRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ReportFailingAssetsUseCase<R, PR> {
    loader: BatchedStatusLoader<R, PR>,
    ui_base_url: Option<String>,
}

impl<R, PR> ReportFailingAssetsUseCase<R, PR>
where
    R: AssetGraphRepository,
    PR: ProgressReporter,
{
    pub fn new(loader: BatchedStatusLoader<R, PR>) -> Self {
        Self {
            loader,
            ui_base_url: None,
        }
    }

    /// Makes report links absolute against the given UI base URL
    pub fn with_ui_base_url(mut self, ui_base_url: Option<String>) -> Self {
        self.ui_base_url = ui_base_url;
        self
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the asset graph or a status batch cannot be fetched
    pub async fn execute(&mut self) -> Result<FailingAssetsReport> {
        self.loader.load_all().await?;

        let counts = LoadCounts {
            total_assets: self.loader.total_assets(),
            loaded_statuses: self.loader.loaded_count(),
            unresolved_assets: self.loader.unresolved_count(),
        };

        Ok(FailingAssetsReportBuilder::build(
            self.loader.snapshot(),
            counts,
            self.ui_base_url.as_deref(),
            Utc::now(),
        ))
    }
}
