/*!
 * Progress reporting for translation passes.
 *
 * Reporters only observe a pass; they never influence its result.
 */

/// Receives `(processed, total)` token counts while a pass runs
pub trait ProgressReporter {
    fn report(&self, processed: usize, total: usize);
}

impl<F> ProgressReporter for F
where
    F: Fn(usize, usize),
{
    fn report(&self, processed: usize, total: usize) {
        self(processed, total)
    }
}

/// Reporter that discards updates
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _processed: usize, _total: usize) {}
}
