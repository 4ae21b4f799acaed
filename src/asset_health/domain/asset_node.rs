use super::AssetKey;
use serde::Serialize;

/// AssetNode entity: identity of an asset plus its downstream edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetNode {
    id: String,
    asset_key: AssetKey,
    depended_by_keys: Vec<AssetKey>,
}

impl AssetNode {
    pub fn new(id: String, asset_key: AssetKey, depended_by_keys: Vec<AssetKey>) -> Self {
        Self {
            id,
            asset_key,
            depended_by_keys,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn asset_key(&self) -> &AssetKey {
        &self.asset_key
    }

    /// Keys of the assets that consume this one
    pub fn depended_by_keys(&self) -> &[AssetKey] {
        &self.depended_by_keys
    }
}
