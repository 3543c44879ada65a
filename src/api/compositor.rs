use crate::core::{AggregateSeries, Point, ReferenceSeries, UserSeries};
use crate::interaction::SeriesVisibility;
use crate::sink::SubmissionSink;

use super::ForecastEngine;

/// Builds the read-only display list.
///
/// Series order is fixed: submitters, aggregate, user. Each series keeps its
/// own point order and nothing is deduplicated across series, so a user point
/// sitting on a reference point renders twice. The user series is always
/// included.
#[must_use]
pub fn composite_points(
    visibility: SeriesVisibility,
    submitters: &ReferenceSeries,
    aggregates: &AggregateSeries,
    user: &UserSeries,
) -> Vec<Point> {
    let submitters_len = if visibility.show_submitters {
        submitters.len()
    } else {
        0
    };
    let aggregates_len = if visibility.show_aggregate {
        aggregates.len()
    } else {
        0
    };

    let mut points = Vec::with_capacity(submitters_len + aggregates_len + user.len());
    if visibility.show_submitters {
        points.extend(submitters.points().iter().cloned());
    }
    if visibility.show_aggregate {
        points.extend(aggregates.points().iter().map(|item| item.point.clone()));
    }
    points.extend(user.points().cloned());
    points
}

impl<S: SubmissionSink> ForecastEngine<S> {
    /// Current composited point list for the rendering collaborator.
    #[must_use]
    pub fn display_points(&self) -> Vec<Point> {
        composite_points(
            self.visibility,
            &self.submitters,
            &self.aggregates,
            self.session.user_series(),
        )
    }
}
