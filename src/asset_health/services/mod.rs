/// Domain services containing pure business logic
mod downstream_tree;
mod failing_filter;

pub use downstream_tree::{DownstreamTree, TreeRow, DETAILS_VIEW};
pub use failing_filter::FailingAssetFilter;
