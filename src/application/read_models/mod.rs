//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that the formatters
//! consume instead of touching the domain directly.

pub mod failing_assets_report;
pub mod failing_assets_report_builder;

pub use failing_assets_report::{FailingAssetView, FailingAssetsReport, ReportMetadataView};
pub use failing_assets_report_builder::{FailingAssetsReportBuilder, LoadCounts};
