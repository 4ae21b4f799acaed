use async_trait::async_trait;
use failing_assets::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock AssetGraphRepository for testing
///
/// Serves a fixed node list and a status table, and records every status
/// request so tests can check batch sizes and duplicate requests.
#[derive(Clone, Default)]
pub struct MockAssetGraphRepository {
    pub nodes: Vec<AssetNode>,
    pub statuses: HashMap<AssetKey, AssetStatus>,
    pub status_requests: Arc<Mutex<Vec<Vec<AssetKey>>>>,
    pub base_requests: Arc<AtomicUsize>,
    /// Number of status calls that fail before calls start succeeding
    pub failures_remaining: Arc<AtomicUsize>,
    pub fail_base: bool,
}

impl MockAssetGraphRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an asset with its dependents and a status
    pub fn with_asset(
        mut self,
        name: &str,
        depended_by: &[&str],
        materialization_run: Option<&str>,
        latest_run: Option<&str>,
    ) -> Self {
        let key = AssetKey::from_segments([name]);
        self.nodes.push(AssetNode::new(
            name.to_string(),
            key.clone(),
            depended_by
                .iter()
                .map(|d| AssetKey::from_segments([*d]))
                .collect(),
        ));
        self.statuses.insert(
            key.clone(),
            AssetStatus::new(
                key,
                materialization_run.map(str::to_string),
                latest_run.map(str::to_string),
            ),
        );
        self
    }

    /// Adds an asset the server knows but reports no status for
    pub fn with_asset_without_status(mut self, name: &str) -> Self {
        self.nodes.push(AssetNode::new(
            name.to_string(),
            AssetKey::from_segments([name]),
            vec![],
        ));
        self
    }

    pub fn with_status_failures(self, count: usize) -> Self {
        self.failures_remaining.store(count, Ordering::SeqCst);
        self
    }

    pub fn with_base_failure(mut self) -> Self {
        self.fail_base = true;
        self
    }

    pub fn requests(&self) -> Vec<Vec<AssetKey>> {
        self.status_requests.lock().unwrap().clone()
    }

    pub fn base_request_count(&self) -> usize {
        self.base_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetGraphRepository for MockAssetGraphRepository {
    async fn fetch_asset_nodes(&self) -> Result<Vec<AssetNode>> {
        self.base_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_base {
            anyhow::bail!("Mock asset graph failure");
        }
        Ok(self.nodes.clone())
    }

    async fn fetch_asset_statuses(&self, asset_keys: &[AssetKey]) -> Result<Vec<AssetStatus>> {
        self.status_requests
            .lock()
            .unwrap()
            .push(asset_keys.to_vec());

        let should_fail = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            anyhow::bail!("Mock status failure");
        }

        Ok(asset_keys
            .iter()
            .filter_map(|key| self.statuses.get(key).cloned())
            .collect())
    }
}
