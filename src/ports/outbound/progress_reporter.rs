/// ProgressReporter port for user feedback while loading
///
/// Everything reported here goes to the side channel (stderr for the CLI)
/// so stdout only ever carries the report itself.
pub trait ProgressReporter {
    /// Reports a one-line status message
    fn report(&self, message: &str);

    /// Reports how many asset statuses have been loaded so far
    ///
    /// # Arguments
    /// * `loaded` - Statuses settled so far
    /// * `total` - Number of assets in the base dataset
    /// * `message` - Optional message to include
    fn report_progress(&self, loaded: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem (retry, unresolved keys, ...)
    fn report_warning(&self, message: &str);

    /// Reports completion of the load
    fn report_completion(&self, message: &str);
}
