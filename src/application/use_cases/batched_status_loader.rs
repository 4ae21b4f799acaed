use crate::asset_health::domain::{AssetKey, AssetNode, AssetStatus, StatusCache};
use crate::ports::outbound::{AssetGraphRepository, ProgressReporter};
use crate::shared::error::AssetError;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::time::Duration;

/// Upper bound on the number of keys in one status request
pub const MAX_BATCH_SIZE: usize = 100;

/// Default number of attempts per status batch
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Linear backoff step between attempts (milliseconds)
const RETRY_BACKOFF_MS: u64 = 100;

/// Read-only view over what the loader has fetched so far
#[derive(Debug, Clone, Copy)]
pub struct AssetSnapshot<'a> {
    pub asset_nodes: &'a [AssetNode],
    pub asset_statuses: &'a StatusCache,
}

/// Result of one completed status batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Keys sent in the request
    pub requested: usize,
    /// Statuses newly added to the cache
    pub loaded: usize,
    /// Requested keys the server returned nothing for
    pub unresolved: usize,
}

/// BatchedStatusLoader - two-phase loader for asset identities and statuses
///
/// Phase one fetches every asset node once. Phase two walks the sorted set of
/// serialized asset keys and requests statuses for at most `batch_size` keys
/// that are not in the cache yet, merging each answer additively, until no
/// key is missing.
///
/// A key the server answered without a status is recorded as unresolved and
/// never requested again. A failed request merges nothing: the same missing
/// set is retried up to `max_attempts` times, then the error is returned with
/// the cache untouched so a later call resumes where this one stopped.
///
/// Dropping a pending `load_*` future abandons the request; the cache is only
/// written after a response has arrived.
///
/// # Type Parameters
/// * `R` - AssetGraphRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct BatchedStatusLoader<R, PR> {
    repository: R,
    progress_reporter: PR,
    batch_size: usize,
    max_attempts: u32,
    asset_nodes: Option<Vec<AssetNode>>,
    sorted_keys: Vec<(String, AssetKey)>,
    statuses: StatusCache,
    unresolved: BTreeSet<String>,
}

impl<R, PR> BatchedStatusLoader<R, PR>
where
    R: AssetGraphRepository,
    PR: ProgressReporter,
{
    /// Creates a loader with a batch size of 100 and 3 attempts per batch
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
            batch_size: MAX_BATCH_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            asset_nodes: None,
            sorted_keys: Vec::new(),
            statuses: StatusCache::new(),
            unresolved: BTreeSet::new(),
        }
    }

    /// Sets the number of keys per status request (1..=100)
    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self> {
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(AssetError::Validation {
                message: format!(
                    "batch size must be between 1 and {}, got {}",
                    MAX_BATCH_SIZE, batch_size
                ),
            }
            .into());
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    /// Sets the number of attempts per status batch (at least 1)
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Result<Self> {
        if max_attempts == 0 {
            return Err(AssetError::Validation {
                message: "max attempts must be at least 1".to_string(),
            }
            .into());
        }
        self.max_attempts = max_attempts;
        Ok(self)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetches the asset nodes; a no-op once they have been loaded
    pub async fn load_base(&mut self) -> Result<()> {
        if self.asset_nodes.is_some() {
            return Ok(());
        }

        self.progress_reporter.report("📖 Loading asset graph...");
        let asset_nodes = self.repository.fetch_asset_nodes().await?;

        let mut sorted_keys = asset_nodes
            .iter()
            .map(|node| {
                let key = node.asset_key();
                Ok((key.to_json_key()?, key.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        sorted_keys.sort_by(|a, b| a.0.cmp(&b.0));
        sorted_keys.dedup_by(|a, b| a.0 == b.0);

        self.progress_reporter
            .report(&format!("✅ Detected {} asset(s)", asset_nodes.len()));

        self.sorted_keys = sorted_keys;
        self.asset_nodes = Some(asset_nodes);
        Ok(())
    }

    /// Keys of the next batch: the first `batch_size` unsettled keys in sorted order
    pub fn missing_keys(&self) -> Vec<AssetKey> {
        self.missing_entries()
            .into_iter()
            .map(|(_, key)| key.clone())
            .collect()
    }

    fn missing_entries(&self) -> Vec<&(String, AssetKey)> {
        self.sorted_keys
            .iter()
            .filter(|(json_key, _)| !self.is_settled(json_key))
            .take(self.batch_size)
            .collect()
    }

    fn is_settled(&self, json_key: &str) -> bool {
        self.statuses.contains_json_key(json_key) || self.unresolved.contains(json_key)
    }

    /// Loads one batch of statuses
    ///
    /// # Returns
    /// `None` when nothing is missing, otherwise what the batch achieved
    ///
    /// # Errors
    /// Returns an error if the base dataset has not been loaded yet, or if
    /// every attempt for this batch failed
    pub async fn load_next_batch(&mut self) -> Result<Option<BatchOutcome>> {
        if self.asset_nodes.is_none() {
            anyhow::bail!("Asset statuses requested before the asset graph was loaded");
        }

        let missing: Vec<(String, AssetKey)> =
            self.missing_entries().into_iter().cloned().collect();
        if missing.is_empty() {
            return Ok(None);
        }

        let keys: Vec<AssetKey> = missing.iter().map(|(_, key)| key.clone()).collect();
        let statuses = self.fetch_with_retry(&keys).await?;
        let loaded = self.statuses.merge(statuses)?;

        let mut unresolved = 0;
        for (json_key, _) in missing.iter() {
            if !self.statuses.contains_json_key(json_key) && self.unresolved.insert(json_key.clone())
            {
                unresolved += 1;
            }
        }

        self.progress_reporter.report_progress(
            self.settled_count(),
            self.total_assets(),
            Some("Fetching asset statuses"),
        );

        Ok(Some(BatchOutcome {
            requested: missing.len(),
            loaded,
            unresolved,
        }))
    }

    /// Requests statuses, retrying the same keys with a linear backoff
    async fn fetch_with_retry(&self, keys: &[AssetKey]) -> Result<Vec<AssetStatus>> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            match self.repository.fetch_asset_statuses(keys).await {
                Ok(statuses) => return Ok(statuses),
                Err(e) => {
                    if attempt < self.max_attempts {
                        self.progress_reporter.report_warning(&format!(
                            "⚠️  Warning: status batch of {} key(s) failed (attempt {}/{}): {}",
                            keys.len(),
                            attempt,
                            self.max_attempts,
                            e
                        ));
                        let backoff = Duration::from_millis(RETRY_BACKOFF_MS * attempt as u64);
                        tokio::time::sleep(backoff).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No attempt was made to fetch statuses")))
    }

    /// Loads the base dataset, then status batches until nothing is missing
    pub async fn load_all(&mut self) -> Result<()> {
        self.load_base().await?;

        let total = self.total_assets();
        if total > 0 && !self.is_complete() {
            self.progress_reporter.report(&format!(
                "🔎 Loading statuses for {} asset(s) in batches of up to {}...",
                total, self.batch_size
            ));
        }

        let mut batches = 0;
        while self.load_next_batch().await?.is_some() {
            batches += 1;
        }

        if !self.unresolved.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: the server returned no status for {} asset(s)",
                self.unresolved.len()
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} asset status(es) in {} batch(es)",
            self.loaded_count(),
            batches
        ));
        Ok(())
    }

    /// Read-only view of the node list and the status cache
    pub fn snapshot(&self) -> AssetSnapshot<'_> {
        AssetSnapshot {
            asset_nodes: self.asset_nodes.as_deref().unwrap_or(&[]),
            asset_statuses: &self.statuses,
        }
    }

    /// True once the base dataset is loaded and no key is missing
    pub fn is_complete(&self) -> bool {
        self.asset_nodes.is_some() && self.missing_entries().is_empty()
    }

    /// Number of distinct asset keys in the base dataset
    pub fn total_assets(&self) -> usize {
        self.sorted_keys.len()
    }

    /// Number of base-dataset keys with a cached status
    pub fn loaded_count(&self) -> usize {
        self.sorted_keys
            .iter()
            .filter(|(json_key, _)| self.statuses.contains_json_key(json_key))
            .count()
    }

    /// Number of keys the server answered without a status
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }

    fn settled_count(&self) -> usize {
        self.sorted_keys
            .iter()
            .filter(|(json_key, _)| self.is_settled(json_key))
            .count()
    }
}
