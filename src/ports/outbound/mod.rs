/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the remote asset graph, the console and the output destination.
pub mod asset_graph_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use asset_graph_repository::AssetGraphRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
