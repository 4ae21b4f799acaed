use crate::asset_health::domain::{AssetKey, AssetNode, AssetStatus};
use crate::shared::Result;
use async_trait::async_trait;

/// AssetGraphRepository port for reading the remote asset graph
///
/// This port abstracts the remote query service (e.g. a GraphQL API)
/// that knows every asset, its downstream edges, and its latest runs.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the loader can be driven
/// from any tokio task.
#[async_trait]
pub trait AssetGraphRepository: Send + Sync {
    /// Fetches the identity and "depended-by" edges of every asset
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed
    async fn fetch_asset_nodes(&self) -> Result<Vec<AssetNode>>;

    /// Fetches the latest run / materialization info for the given keys
    ///
    /// The result may contain fewer entries than requested when the
    /// server has no information for some keys.
    ///
    /// # Arguments
    /// * `asset_keys` - Keys to look up; callers keep this at most 100 long
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed
    async fn fetch_asset_statuses(&self, asset_keys: &[AssetKey]) -> Result<Vec<AssetStatus>>;
}
