use super::{AssetKey, AssetStatus};
use crate::shared::Result;
use std::collections::BTreeMap;

/// StatusCache aggregate: statuses keyed by the serialized asset key
///
/// The cache only grows. Entries are added through [`StatusCache::merge`],
/// which is crate-private so that the loader stays the single writer;
/// everyone else reads through `&StatusCache`.
#[derive(Debug, Clone, Default)]
pub struct StatusCache {
    entries: BTreeMap<String, AssetStatus>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Additive union: keys already present keep their existing status
    ///
    /// Returns the number of newly inserted entries.
    pub(crate) fn merge(&mut self, statuses: Vec<AssetStatus>) -> Result<usize> {
        let mut inserted = 0;
        for status in statuses {
            let json_key = status.asset_key().to_json_key()?;
            if !self.entries.contains_key(&json_key) {
                self.entries.insert(json_key, status);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    pub fn get(&self, key: &AssetKey) -> Option<&AssetStatus> {
        let json_key = key.to_json_key().ok()?;
        self.entries.get(&json_key)
    }

    pub fn contains_json_key(&self, json_key: &str) -> bool {
        self.entries.contains_key(json_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in serialized-key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetStatus)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
