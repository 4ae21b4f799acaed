//! Builder for constructing FailingAssetsReport from a loader snapshot

use super::failing_assets_report::{FailingAssetView, FailingAssetsReport, ReportMetadataView};
use crate::application::use_cases::AssetSnapshot;
use crate::asset_health::domain::AssetNode;
use crate::asset_health::services::{DownstreamTree, FailingAssetFilter, TreeRow, DETAILS_VIEW};
use chrono::{DateTime, Utc};

/// Counts the builder cannot derive from the snapshot alone
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadCounts {
    pub total_assets: usize,
    pub loaded_statuses: usize,
    pub unresolved_assets: usize,
}

/// Builder for constructing FailingAssetsReport
///
/// Filters the snapshot down to failing assets and renders one downstream
/// tree per failing asset over the full node list. When a UI base URL is
/// given, every link is made absolute against it.
pub struct FailingAssetsReportBuilder;

impl FailingAssetsReportBuilder {
    pub fn build(
        snapshot: AssetSnapshot<'_>,
        counts: LoadCounts,
        ui_base_url: Option<&str>,
        generated_at: DateTime<Utc>,
    ) -> FailingAssetsReport {
        let failing_assets =
            FailingAssetFilter::filter(snapshot.asset_nodes, snapshot.asset_statuses)
                .into_iter()
                .map(|node| Self::build_failing_asset(node, snapshot, ui_base_url))
                .collect();

        FailingAssetsReport {
            metadata: ReportMetadataView {
                generated_at: generated_at.to_rfc3339(),
                tool_name: env!("CARGO_PKG_NAME").to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                total_assets: counts.total_assets,
                loaded_statuses: counts.loaded_statuses,
                unresolved_assets: counts.unresolved_assets,
            },
            failing_assets,
        }
    }

    fn build_failing_asset(
        node: &AssetNode,
        snapshot: AssetSnapshot<'_>,
        ui_base_url: Option<&str>,
    ) -> FailingAssetView {
        let asset_key = node.asset_key();
        let status = snapshot.asset_statuses.get(asset_key);

        let mut downstream: Vec<TreeRow> =
            DownstreamTree::new(asset_key, snapshot.asset_nodes).collect();
        if let Some(base) = ui_base_url {
            for row in downstream.iter_mut() {
                row.link = Self::absolute_link(base, &row.link);
            }
        }

        FailingAssetView {
            asset_key: asset_key.clone(),
            display_name: asset_key.display_name(),
            link: match ui_base_url {
                Some(base) => Self::absolute_link(base, &asset_key.details_path(DETAILS_VIEW)),
                None => asset_key.details_path(DETAILS_VIEW),
            },
            latest_run_id: status.and_then(|s| s.latest_run_id()).map(str::to_string),
            latest_materialization_run_id: status
                .and_then(|s| s.latest_materialization_run_id())
                .map(str::to_string),
            downstream,
        }
    }

    fn absolute_link(base: &str, path: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), path)
    }
}
