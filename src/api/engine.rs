use crate::core::{AggregateSeries, AggregateStyle, ReferenceSeries, TickGrid, UserStyle};
use crate::extensions::ForecastPlugin;
use crate::interaction::{SeriesVisibility, SnapPolicy};
use crate::sink::SubmissionSink;

use super::ForecastSession;

/// Main orchestration facade consumed by the rendering collaborator.
///
/// `ForecastEngine` owns the tick grid, both read-only reference series, and
/// the single mutable session. Every inbound event is processed to completion
/// before it returns.
pub struct ForecastEngine<S: SubmissionSink> {
    pub(super) sink: S,
    pub(super) grid: TickGrid,
    pub(super) snap_policy: SnapPolicy,
    pub(super) user_style: UserStyle,
    pub(super) aggregate_style: AggregateStyle,
    pub(super) visibility: SeriesVisibility,
    pub(super) read_only: bool,
    pub(super) tag_catalog: Vec<String>,
    pub(super) submitters: ReferenceSeries,
    pub(super) aggregates: AggregateSeries,
    pub(super) session: ForecastSession,
    pub(super) submissions_emitted: u64,
    pub(super) plugins: Vec<Box<dyn ForecastPlugin>>,
}

impl<S: SubmissionSink> ForecastEngine<S> {
    #[must_use]
    pub fn grid(&self) -> &TickGrid {
        &self.grid
    }

    #[must_use]
    pub fn snap_policy(&self) -> SnapPolicy {
        self.snap_policy
    }

    #[must_use]
    pub fn user_style(&self) -> &UserStyle {
        &self.user_style
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Reasoning tags the host should offer as toggles.
    #[must_use]
    pub fn tag_catalog(&self) -> &[String] {
        &self.tag_catalog
    }

    #[must_use]
    pub fn submitter_series(&self) -> &ReferenceSeries {
        &self.submitters
    }

    #[must_use]
    pub fn aggregate_series(&self) -> &AggregateSeries {
        &self.aggregates
    }

    #[must_use]
    pub fn session(&self) -> &ForecastSession {
        &self.session
    }

    /// Swaps in a caller-owned session, re-snapping it onto the current grid.
    ///
    /// Returns the number of points dropped because their category no longer
    /// lands on the grid.
    pub fn replace_session(&mut self, session: ForecastSession) -> usize {
        let (session, dropped) = session.resnapped(&self.grid, self.snap_policy);
        self.session = session;
        dropped
    }

    #[must_use]
    pub fn into_session(self) -> ForecastSession {
        self.session
    }

    #[must_use]
    pub fn submissions_emitted(&self) -> u64 {
        self.submissions_emitted
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
