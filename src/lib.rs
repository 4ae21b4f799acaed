//! failing-assets - failing-asset reporter for asset orchestration servers
//!
//! This library loads the asset graph and the latest run status of every asset
//! from a GraphQL endpoint, selects the assets whose latest run did not
//! materialize them, and renders the tree of assets downstream of each one,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`asset_health`): Asset keys, statuses, the status cache,
//!   the failing filter and the downstream tree walk
//! - **Application Layer** (`application`): The batched loader, use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use failing_assets::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let repository = DagsterGraphQlClient::new(
//!     "http://localhost:3000/graphql",
//!     Duration::from_secs(30),
//! )?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let loader = BatchedStatusLoader::new(repository, progress_reporter).with_batch_size(100)?;
//! let mut use_case = ReportFailingAssetsUseCase::new(loader);
//!
//! // Execute
//! let report = use_case.execute().await?;
//!
//! // Format output
//! let formatter = TextFormatter::new(false);
//! println!("{}", formatter.format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod asset_health;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::DagsterGraphQlClient;
    pub use crate::application::dto::ReportFormat;
    pub use crate::application::read_models::FailingAssetsReport;
    pub use crate::application::use_cases::{BatchedStatusLoader, ReportFailingAssetsUseCase};
    pub use crate::asset_health::domain::{AssetKey, AssetNode, AssetStatus, StatusCache};
    pub use crate::asset_health::services::{DownstreamTree, FailingAssetFilter, TreeRow};
    pub use crate::ports::outbound::{
        AssetGraphRepository, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
