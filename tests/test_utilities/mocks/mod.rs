/// Mock implementations for testing
mod mock_asset_graph_repository;
mod mock_progress_reporter;

pub use mock_asset_graph_repository::MockAssetGraphRepository;
pub use mock_progress_reporter::MockProgressReporter;
