use crate::asset_health::domain::{AssetKey, AssetNode};
use serde::Serialize;
use std::collections::HashSet;

/// Detail view that tree rows link to
pub const DETAILS_VIEW: &str = "events";

/// One row of a rendered downstream tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    pub display_name: String,
    pub link: String,
    pub depth: usize,
    /// Set on the first child of each parent; drives the indent connector
    pub first_at_depth: bool,
}

#[derive(Debug)]
struct Frame<'a> {
    asset_key: &'a AssetKey,
    depth: usize,
    first_at_depth: bool,
}

/// DownstreamTree service: lazy pre-order walk of the "depended-by" relation
///
/// The walk uses an explicit stack instead of recursion. A display name that
/// has already been emitted is skipped together with its whole branch, which
/// bounds the walk on cyclic graphs.
///
/// Nodes are looked up by display name, not by key, so two distinct keys
/// that format to the same name share one entry in the walk.
///
/// # Example
/// ```
/// use failing_assets::asset_health::domain::{AssetKey, AssetNode};
/// use failing_assets::asset_health::services::DownstreamTree;
///
/// let raw = AssetKey::from_segments(["raw"]);
/// let clean = AssetKey::from_segments(["clean"]);
/// let nodes = vec![
///     AssetNode::new("1".into(), raw.clone(), vec![clean.clone()]),
///     AssetNode::new("2".into(), clean, vec![]),
/// ];
///
/// let rows: Vec<_> = DownstreamTree::new(&raw, &nodes).collect();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].depth, 1);
/// ```
#[derive(Debug)]
pub struct DownstreamTree<'a> {
    asset_nodes: &'a [AssetNode],
    stack: Vec<Frame<'a>>,
    seen: HashSet<String>,
}

impl<'a> DownstreamTree<'a> {
    pub fn new(root: &'a AssetKey, asset_nodes: &'a [AssetNode]) -> Self {
        Self {
            asset_nodes,
            stack: vec![Frame {
                asset_key: root,
                depth: 0,
                first_at_depth: false,
            }],
            seen: HashSet::new(),
        }
    }

    fn find_node(asset_nodes: &'a [AssetNode], display_name: &str) -> Option<&'a AssetNode> {
        asset_nodes
            .iter()
            .find(|node| node.asset_key().display_name() == display_name)
    }
}

impl<'a> Iterator for DownstreamTree<'a> {
    type Item = TreeRow;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            let display_name = frame.asset_key.display_name();
            if !self.seen.insert(display_name.clone()) {
                continue;
            }

            let children = Self::find_node(self.asset_nodes, &display_name)
                .map(AssetNode::depended_by_keys)
                .unwrap_or_default();

            // Reversed so the first child is popped first
            for (idx, child) in children.iter().enumerate().rev() {
                self.stack.push(Frame {
                    asset_key: child,
                    depth: frame.depth + 1,
                    first_at_depth: idx == 0,
                });
            }

            return Some(TreeRow {
                link: frame.asset_key.details_path(DETAILS_VIEW),
                display_name,
                depth: frame.depth,
                first_at_depth: frame.first_at_depth,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> AssetKey {
        AssetKey::from_segments([name])
    }

    fn node(name: &str, depended_by: &[&str]) -> AssetNode {
        AssetNode::new(
            name.to_string(),
            key(name),
            depended_by.iter().map(|d| key(d)).collect(),
        )
    }

    fn summarize(rows: &[TreeRow]) -> Vec<(String, usize, bool)> {
        rows.iter()
            .map(|r| (r.display_name.clone(), r.depth, r.first_at_depth))
            .collect()
    }

    #[test]
    fn test_leaf_root_emits_single_row() {
        let nodes = vec![node("a", &[])];
        let root = key("a");
        let rows: Vec<TreeRow> = DownstreamTree::new(&root, &nodes).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_name, "a");
        assert_eq!(rows[0].depth, 0);
        assert!(!rows[0].first_at_depth);
        assert_eq!(rows[0].link, "/assets/a?view=events");
    }

    #[test]
    fn test_missing_root_still_emits_root_row() {
        let nodes = vec![node("other", &["a"])];
        let root = key("absent");
        let rows: Vec<TreeRow> = DownstreamTree::new(&root, &nodes).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_name, "absent");
    }

    #[test]
    fn test_two_node_cycle_terminates() {
        let nodes = vec![node("a", &["b"]), node("b", &["a"])];
        let root = key("a");
        let rows: Vec<TreeRow> = DownstreamTree::new(&root, &nodes).collect();

        assert_eq!(
            summarize(&rows),
            vec![("a".to_string(), 0, false), ("b".to_string(), 1, true)]
        );
    }

    #[test]
    fn test_self_loop_terminates() {
        let nodes = vec![node("a", &["a"])];
        let root = key("a");
        assert_eq!(DownstreamTree::new(&root, &nodes).count(), 1);
    }

    #[test]
    fn test_pre_order_depths_and_first_flags() {
        // a -> b -> d
        //   -> c -> e
        //        -> f
        let nodes = vec![
            node("a", &["b", "c"]),
            node("b", &["d"]),
            node("c", &["e", "f"]),
            node("d", &[]),
            node("e", &[]),
            node("f", &[]),
        ];
        let root = key("a");
        let rows: Vec<TreeRow> = DownstreamTree::new(&root, &nodes).collect();

        assert_eq!(
            summarize(&rows),
            vec![
                ("a".to_string(), 0, false),
                ("b".to_string(), 1, true),
                ("d".to_string(), 2, true),
                ("c".to_string(), 1, false),
                ("e".to_string(), 2, true),
                ("f".to_string(), 2, false),
            ]
        );
    }

    #[test]
    fn test_diamond_emits_shared_dependent_once() {
        let nodes = vec![
            node("a", &["b", "c"]),
            node("b", &["d"]),
            node("c", &["d"]),
            node("d", &[]),
        ];
        let root = key("a");
        let rows: Vec<TreeRow> = DownstreamTree::new(&root, &nodes).collect();

        assert_eq!(
            summarize(&rows),
            vec![
                ("a".to_string(), 0, false),
                ("b".to_string(), 1, true),
                ("d".to_string(), 2, true),
                ("c".to_string(), 1, false),
            ]
        );
    }

    #[test]
    fn test_skipped_first_child_does_not_move_first_flag() {
        // b was already emitted under a, so under c only e remains and keeps idx 1
        let nodes = vec![
            node("a", &["b", "c"]),
            node("b", &[]),
            node("c", &["b", "e"]),
            node("e", &[]),
        ];
        let root = key("a");
        let rows: Vec<TreeRow> = DownstreamTree::new(&root, &nodes).collect();

        let e = rows.iter().find(|r| r.display_name == "e").unwrap();
        assert_eq!(e.depth, 2);
        assert!(!e.first_at_depth);
    }

    #[test]
    fn test_walk_is_lazy() {
        let nodes = vec![node("a", &["b"]), node("b", &["c"]), node("c", &[])];
        let root = key("a");
        let mut tree = DownstreamTree::new(&root, &nodes);

        assert_eq!(tree.next().unwrap().display_name, "a");
        assert_eq!(tree.stack.len(), 1);
        assert!(!tree.seen.contains("c"));
    }

    #[test]
    fn test_long_chain_walks_to_the_end() {
        let depth = 3_000;
        let nodes: Vec<AssetNode> = (0..depth)
            .map(|i| {
                let next = if i + 1 < depth {
                    vec![key(&format!("n{}", i + 1))]
                } else {
                    vec![]
                };
                AssetNode::new(i.to_string(), key(&format!("n{}", i)), next)
            })
            .collect();
        let root = key("n0");

        let last = DownstreamTree::new(&root, &nodes).last().unwrap();
        assert_eq!(last.depth, depth - 1);
        assert_eq!(last.display_name, format!("n{}", depth - 1));
    }

    #[test]
    fn test_display_name_collision_conflates_nodes() {
        let nested = AssetKey::from_segments(["a", "b"]);
        let flat = AssetKey::from_segments(["a / b"]);
        let nodes = vec![
            AssetNode::new("1".into(), flat.clone(), vec![key("from_flat")]),
            AssetNode::new("2".into(), nested.clone(), vec![key("from_nested")]),
        ];

        let rows: Vec<TreeRow> = DownstreamTree::new(&nested, &nodes).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].display_name, "from_flat");
    }
}
