use crate::asset_health::domain::{AssetNode, StatusCache};

/// FailingAssetFilter service for selecting failing assets
///
/// Assets whose status has not been loaded yet are treated as unknown,
/// not failing, so the result under-reports until the loader has finished.
pub struct FailingAssetFilter;

impl FailingAssetFilter {
    /// Returns the nodes with a loaded, failing status, in node-list order
    pub fn filter<'a>(asset_nodes: &'a [AssetNode], statuses: &StatusCache) -> Vec<&'a AssetNode> {
        asset_nodes
            .iter()
            .filter(|node| {
                statuses
                    .get(node.asset_key())
                    .is_some_and(|status| status.is_failing())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset_health::domain::{AssetKey, AssetStatus};

    fn node(name: &str) -> AssetNode {
        AssetNode::new(name.to_string(), AssetKey::from_segments([name]), vec![])
    }

    fn status(name: &str, materialization: Option<&str>, run: Option<&str>) -> AssetStatus {
        AssetStatus::new(
            AssetKey::from_segments([name]),
            materialization.map(str::to_string),
            run.map(str::to_string),
        )
    }

    #[test]
    fn test_filter_selects_only_failing() {
        let nodes = vec![node("healthy"), node("failing"), node("never_run")];
        let mut cache = StatusCache::new();
        cache
            .merge(vec![
                status("healthy", Some("r1"), Some("r1")),
                status("failing", Some("r1"), Some("r2")),
                status("never_run", None, None),
            ])
            .unwrap();

        let failing = FailingAssetFilter::filter(&nodes, &cache);
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].id(), "failing");
    }

    #[test]
    fn test_filter_excludes_unloaded_status() {
        let nodes = vec![node("unknown"), node("failing")];
        let mut cache = StatusCache::new();
        cache.merge(vec![status("failing", None, Some("r1"))]).unwrap();

        let failing = FailingAssetFilter::filter(&nodes, &cache);
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].id(), "failing");
    }

    #[test]
    fn test_filter_keeps_node_order() {
        let nodes = vec![node("c"), node("a"), node("b")];
        let mut cache = StatusCache::new();
        cache
            .merge(vec![
                status("a", None, Some("r")),
                status("b", None, Some("r")),
                status("c", None, Some("r")),
            ])
            .unwrap();

        let ids: Vec<&str> = FailingAssetFilter::filter(&nodes, &cache)
            .iter()
            .map(|n| n.id())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_filter_empty_cache() {
        let nodes = vec![node("a")];
        let cache = StatusCache::new();
        assert!(FailingAssetFilter::filter(&nodes, &cache).is_empty());
    }
}
