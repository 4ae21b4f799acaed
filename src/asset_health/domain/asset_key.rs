use crate::shared::error::AssetError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Separator used when rendering an asset key for humans
const DISPLAY_SEPARATOR: &str = " / ";

/// AssetKey value object: an ordered list of path segments
///
/// Equality is structural. The compact JSON form (`{"path":[...]}`) doubles
/// as the key of the status cache, so its serialization must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetKey {
    path: Vec<String>,
}

impl AssetKey {
    pub fn new(path: Vec<String>) -> Self {
        Self { path }
    }

    /// Convenience constructor for keys built from string literals
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(segments.into_iter().map(Into::into).collect())
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Serialized map-key form, e.g. `{"path":["warehouse","orders"]}`
    pub fn to_json_key(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            AssetError::InvalidAssetKey {
                key: self.path.join("/"),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Parses the map-key form produced by [`AssetKey::to_json_key`]
    pub fn from_json_key(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            AssetError::InvalidAssetKey {
                key: json.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Human readable name, segments joined with `" / "`
    ///
    /// Distinct keys can share a display name (`["a / b"]` and `["a", "b"]`).
    pub fn display_name(&self) -> String {
        self.path.join(DISPLAY_SEPARATOR)
    }

    /// Navigation target for the asset detail view, e.g. `/assets/a/b?view=events`
    pub fn details_path(&self, view: &str) -> String {
        let segments: Vec<String> = self
            .path
            .iter()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!(
            "/assets/{}?view={}",
            segments.join("/"),
            urlencoding::encode(view)
        )
    }
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
