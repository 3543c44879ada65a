use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Point;
use crate::error::ForecastResult;
use crate::extensions::EngineEvent;
use crate::sink::SubmissionSink;

use super::{ForecastEngine, ForecastSession};

/// Immutable, tag-annotated snapshot of the user series.
///
/// Holds owned copies; later session edits never reach an emitted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSubmission {
    sequence: u64,
    points: Vec<Point>,
}

impl ForecastSubmission {
    /// Snapshots `session`, stamping every point with the selected tags.
    ///
    /// Returns `None` for an empty user series: empty submissions are never
    /// produced.
    #[must_use]
    pub fn capture(session: &ForecastSession, sequence: u64) -> Option<Self> {
        if session.user_series().is_empty() {
            return None;
        }
        let tags = session.annotations().tags();
        let points = session
            .user_series()
            .points()
            .map(|point| point.clone().with_tags(tags.iter().cloned()))
            .collect();
        Some(Self { sequence, points })
    }

    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Tags shared by every point of the submission.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.points
            .first()
            .map(|point| point.tags().iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitDisabledReason {
    EmptySeries,
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Emitted(ForecastSubmission),
    Disabled(SubmitDisabledReason),
}

impl SubmitOutcome {
    #[must_use]
    pub fn submission(&self) -> Option<&ForecastSubmission> {
        match self {
            Self::Emitted(submission) => Some(submission),
            Self::Disabled(_) => None,
        }
    }
}

impl<S: SubmissionSink> ForecastEngine<S> {
    /// `true` when `on_submit` would emit a submission.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.read_only && !self.session.user_series().is_empty()
    }

    /// Emits a snapshot of the user series to the sink.
    ///
    /// Never mutates the session. When the sink fails the error is returned,
    /// nothing is rolled back, and the sequence number is not consumed.
    pub fn on_submit(&mut self) -> ForecastResult<SubmitOutcome> {
        if self.read_only {
            debug!("submit ignored in read-only mode");
            return Ok(SubmitOutcome::Disabled(SubmitDisabledReason::ReadOnly));
        }

        let sequence = self.submissions_emitted + 1;
        let Some(submission) = ForecastSubmission::capture(&self.session, sequence) else {
            debug!("submit disabled for empty user series");
            return Ok(SubmitOutcome::Disabled(SubmitDisabledReason::EmptySeries));
        };

        if let Err(err) = self.sink.on_saved(&submission) {
            warn!(error = %err, sequence, "submission sink rejected forecast");
            return Err(err);
        }

        self.submissions_emitted = sequence;
        debug!(
            sequence,
            points_len = submission.points().len(),
            tags_len = self.session.annotations().len(),
            "forecast submitted"
        );
        self.emit_plugin_event(EngineEvent::Submitted {
            sequence,
            points_len: submission.points().len(),
        });
        Ok(SubmitOutcome::Emitted(submission))
    }
}
