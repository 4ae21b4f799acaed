/// Use cases module containing application business logic orchestration
mod batched_status_loader;
mod report_failing_assets;

pub use batched_status_loader::{
    AssetSnapshot, BatchOutcome, BatchedStatusLoader, DEFAULT_MAX_ATTEMPTS, MAX_BATCH_SIZE,
};
pub use report_failing_assets::ReportFailingAssetsUseCase;
