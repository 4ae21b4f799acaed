use super::AssetKey;
use serde::Serialize;

/// AssetStatus value object: latest run and latest materialization of an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetStatus {
    asset_key: AssetKey,
    latest_materialization_run_id: Option<String>,
    latest_run_id: Option<String>,
}

impl AssetStatus {
    pub fn new(
        asset_key: AssetKey,
        latest_materialization_run_id: Option<String>,
        latest_run_id: Option<String>,
    ) -> Self {
        Self {
            asset_key,
            latest_materialization_run_id,
            latest_run_id,
        }
    }

    pub fn asset_key(&self) -> &AssetKey {
        &self.asset_key
    }

    pub fn latest_materialization_run_id(&self) -> Option<&str> {
        self.latest_materialization_run_id.as_deref()
    }

    pub fn latest_run_id(&self) -> Option<&str> {
        self.latest_run_id.as_deref()
    }

    /// True when the latest run did not produce the latest materialization
    ///
    /// Covers both a failed run and a run still in flight without output.
    /// Two absent ids compare equal, so a never-run asset is not failing.
    pub fn is_failing(&self) -> bool {
        self.latest_materialization_run_id != self.latest_run_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(materialization: Option<&str>, run: Option<&str>) -> AssetStatus {
        AssetStatus::new(
            AssetKey::from_segments(["orders"]),
            materialization.map(str::to_string),
            run.map(str::to_string),
        )
    }

    #[test]
    fn test_matching_run_is_healthy() {
        assert!(!status(Some("run-1"), Some("run-1")).is_failing());
    }

    #[test]
    fn test_newer_run_without_materialization_is_failing() {
        assert!(status(Some("run-1"), Some("run-2")).is_failing());
    }

    #[test]
    fn test_run_without_any_materialization_is_failing() {
        assert!(status(None, Some("run-1")).is_failing());
    }

    #[test]
    fn test_materialization_without_run_is_failing() {
        // e.g. an externally reported materialization
        assert!(status(Some("run-1"), None).is_failing());
    }

    #[test]
    fn test_never_run_is_healthy() {
        assert!(!status(None, None).is_failing());
    }
}
