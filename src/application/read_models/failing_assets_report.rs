//! Failing-assets read model
//!
//! Denormalized view of a finished load: every failing asset together
//! with its rendered downstream tree, ready for the formatters.

use crate::asset_health::domain::AssetKey;
use crate::asset_health::services::TreeRow;
use serde::Serialize;

/// Main read model for the failing-assets report
#[derive(Debug, Clone, Serialize)]
pub struct FailingAssetsReport {
    pub metadata: ReportMetadataView,
    pub failing_assets: Vec<FailingAssetView>,
}

impl FailingAssetsReport {
    pub fn failing_count(&self) -> usize {
        self.failing_assets.len()
    }

    pub fn has_failing_assets(&self) -> bool {
        !self.failing_assets.is_empty()
    }
}

/// Counts and provenance of the report
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    /// Distinct assets in the asset graph
    pub total_assets: usize,
    /// Assets whose status was loaded
    pub loaded_statuses: usize,
    /// Assets the server returned no status for
    pub unresolved_assets: usize,
}

/// One failing asset and the assets downstream of it
#[derive(Debug, Clone, Serialize)]
pub struct FailingAssetView {
    pub asset_key: AssetKey,
    pub display_name: String,
    pub link: String,
    pub latest_run_id: Option<String>,
    pub latest_materialization_run_id: Option<String>,
    /// Pre-order rows; the first row is the failing asset itself
    pub downstream: Vec<TreeRow>,
}

impl FailingAssetView {
    /// Number of affected assets below the failing one
    pub fn blast_radius(&self) -> usize {
        self.downstream.len().saturating_sub(1)
    }
}
