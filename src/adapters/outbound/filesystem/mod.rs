/// Filesystem adapters for writing the report
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
