pub mod asset_key;
pub mod asset_node;
pub mod asset_status;
pub mod status_cache;

pub use asset_key::AssetKey;
pub use asset_node::AssetNode;
pub use asset_status::AssetStatus;
pub use status_cache::StatusCache;
