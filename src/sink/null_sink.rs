use crate::api::ForecastSubmission;
use crate::error::ForecastResult;
use crate::sink::SubmissionSink;

/// Sink used by tests and headless engine usage.
///
/// It discards submissions but keeps counters so callers can assert delivery.
#[derive(Debug, Default)]
pub struct NullSink {
    pub saved_count: usize,
    pub last_point_count: usize,
}

impl SubmissionSink for NullSink {
    fn on_saved(&mut self, submission: &ForecastSubmission) -> ForecastResult<()> {
        self.saved_count += 1;
        self.last_point_count = submission.points().len();
        Ok(())
    }
}
