use tracing::{debug, warn};

use crate::core::{AggregateSeries, ReferenceSeries, TickGrid};
use crate::extensions::EngineEvent;
use crate::interaction::SeriesVisibility;
use crate::sink::SubmissionSink;

use super::ForecastEngine;

impl<S: SubmissionSink> ForecastEngine<S> {
    /// Replaces the per-submitter reference series wholesale.
    pub fn set_reference_series(&mut self, series: ReferenceSeries) {
        debug!(
            previous_len = self.submitters.len(),
            points_len = series.len(),
            "replace submitter series"
        );
        self.submitters = series;
        self.emit_plugin_event(EngineEvent::ReferenceSeriesReplaced {
            points_len: self.submitters.len(),
        });
    }

    /// Replaces the aggregate reference series wholesale.
    pub fn set_aggregate_series(&mut self, series: AggregateSeries) {
        debug!(
            previous_len = self.aggregates.len(),
            points_len = series.len(),
            "replace aggregate series"
        );
        self.aggregates = series;
        self.emit_plugin_event(EngineEvent::AggregateSeriesReplaced {
            points_len: self.aggregates.len(),
        });
    }

    /// Rebuilds the aggregate series as per-category medians of the current
    /// submitter series.
    pub fn summarize_aggregates(&mut self) {
        let series = AggregateSeries::summarize(
            &self.submitters,
            &self.grid,
            self.snap_policy.value_tie_break,
            &self.aggregate_style,
        );
        self.set_aggregate_series(series);
    }

    #[must_use]
    pub fn visibility(&self) -> SeriesVisibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: SeriesVisibility) {
        if self.visibility == visibility {
            return;
        }
        self.visibility = visibility;
        self.emit_plugin_event(EngineEvent::VisibilityChanged(visibility));
    }

    /// Swaps the tick grid and re-snaps the user series onto it.
    ///
    /// Returns the number of user points dropped because their category no
    /// longer lands on the grid. Reference series are left as supplied.
    pub fn set_tick_grid(&mut self, grid: TickGrid) -> usize {
        let (session, dropped) = self.session.resnapped(&grid, self.snap_policy);
        if dropped > 0 {
            warn!(dropped, "user points dropped while replacing tick grid");
        }
        self.grid = grid;
        self.session = session;
        debug!(
            categories = self.grid.categories().len(),
            values = self.grid.values().len(),
            "tick grid replaced"
        );
        self.emit_plugin_event(EngineEvent::GridReplaced {
            dropped_points: dropped,
        });
        dropped
    }
}
