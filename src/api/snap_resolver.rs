use tracing::trace;

use crate::core::TickGrid;
use crate::interaction::{RejectReason, SnapPolicy, SnapResult, SnappedCoordinate};
use crate::sink::SubmissionSink;

use super::ForecastEngine;

/// Resolves a data-space pointer coordinate onto the tick grid.
///
/// The category axis rejects coordinates farther than half the smallest
/// category spacing from every tick; a distance equal to that tolerance is
/// still accepted. The value axis never rejects and clamps far clicks to the
/// boundary tick.
#[must_use]
pub fn resolve_snap(
    grid: &TickGrid,
    policy: SnapPolicy,
    raw_category: f64,
    raw_value: f64,
) -> SnapResult {
    if !raw_category.is_finite() || !raw_value.is_finite() {
        return SnapResult::Rejected(RejectReason::NonFinite);
    }

    let categories = grid.categories();
    let Some(category) = categories.nearest(raw_category, policy.category_tie_break) else {
        return SnapResult::Rejected(RejectReason::NonFinite);
    };
    if category.distance > grid.category_tolerance() + categories.epsilon() {
        return SnapResult::Rejected(RejectReason::OutsideCategoryTolerance {
            nearest: category.tick,
            distance: category.distance,
        });
    }

    let Some(value) = grid.values().nearest(raw_value, policy.value_tie_break) else {
        return SnapResult::Rejected(RejectReason::NonFinite);
    };

    SnapResult::Snapped(SnappedCoordinate {
        category: category.tick,
        value: value.tick,
    })
}

impl<S: SubmissionSink> ForecastEngine<S> {
    /// Snaps without touching the user series; useful for hover previews.
    #[must_use]
    pub fn snap(&self, raw_category: f64, raw_value: f64) -> SnapResult {
        let result = resolve_snap(&self.grid, self.snap_policy, raw_category, raw_value);
        trace!(raw_category, raw_value, ?result, "snap pointer coordinate");
        result
    }
}
