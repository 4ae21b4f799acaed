/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven ports exist: the asset graph source, progress feedback,
/// report formatting and output presentation. The CLI drives the use case
/// directly.
pub mod outbound;
