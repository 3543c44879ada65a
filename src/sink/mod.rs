mod null_sink;

pub use null_sink::NullSink;

use crate::api::ForecastSubmission;
use crate::error::ForecastResult;

/// Contract implemented by whatever persists or announces submissions.
///
/// The engine calls `on_saved` once per emitted submission and never retries;
/// an error is handed back to the caller of `on_submit` untouched.
pub trait SubmissionSink {
    fn on_saved(&mut self, submission: &ForecastSubmission) -> ForecastResult<()>;
}
