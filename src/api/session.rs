use crate::core::{AnnotationSet, Point, TickGrid, UpsertOutcome, UserSeries, UserStyle};
use crate::interaction::{ClickOutcome, SnapPolicy, SnapResult};

use super::ForecastSubmission;
use super::snap_resolver::resolve_snap;

/// Mutable authoring state: the user series plus the selected tags.
///
/// This is a plain owned value. The engine holds one, but every operation is
/// also available here so session behaviour can be exercised without an
/// engine or renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSession {
    user_series: UserSeries,
    annotations: AnnotationSet,
}

impl ForecastSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_parts(user_series: UserSeries, annotations: AnnotationSet) -> Self {
        Self {
            user_series,
            annotations,
        }
    }

    /// Rebuilds a session from a prior submission.
    ///
    /// Points keep their color and owner label, are re-snapped onto `grid`
    /// (off-grid categories are dropped, collisions collapse through upsert)
    /// and their tags move back into the annotation set.
    #[must_use]
    pub fn resume(submission: &ForecastSubmission, grid: &TickGrid, policy: SnapPolicy) -> Self {
        let mut session = Self::new();
        for point in submission.points() {
            for tag in point.tags() {
                if !session.annotations.contains(tag) {
                    session.annotations.toggle(tag);
                }
            }
            session.place(
                grid,
                policy,
                &identity_of(point),
                point.category(),
                point.value(),
            );
        }
        session
    }

    #[must_use]
    pub fn user_series(&self) -> &UserSeries {
        &self.user_series
    }

    #[must_use]
    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    /// Snaps a raw coordinate and upserts it into the user series.
    pub fn place(
        &mut self,
        grid: &TickGrid,
        policy: SnapPolicy,
        style: &UserStyle,
        raw_category: f64,
        raw_value: f64,
    ) -> ClickOutcome {
        let coordinate = match resolve_snap(grid, policy, raw_category, raw_value) {
            SnapResult::Snapped(coordinate) => coordinate,
            SnapResult::Rejected(reason) => return ClickOutcome::Rejected(reason),
        };
        match self
            .user_series
            .upsert(coordinate.category, coordinate.value, style)
        {
            UpsertOutcome::Inserted => ClickOutcome::Placed(coordinate),
            UpsertOutcome::Replaced { previous_value } => ClickOutcome::Replaced {
                coordinate,
                previous_value,
            },
        }
    }

    /// Returns the new selection state of `tag`.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.annotations.toggle(tag)
    }

    pub fn reset(&mut self) {
        self.user_series.clear();
        self.annotations.clear();
    }

    /// Copies the session onto `grid`, returning the copy and the number of
    /// points that no longer snap. Point identity fields are kept.
    #[must_use]
    pub fn resnapped(&self, grid: &TickGrid, policy: SnapPolicy) -> (Self, usize) {
        let mut user_series = UserSeries::new();
        let mut dropped = 0;
        for point in self.user_series.points() {
            match resolve_snap(grid, policy, point.category(), point.value()) {
                SnapResult::Snapped(coordinate) => {
                    user_series.upsert(coordinate.category, coordinate.value, &identity_of(point));
                }
                SnapResult::Rejected(_) => dropped += 1,
            }
        }
        (
            Self {
                user_series,
                annotations: self.annotations.clone(),
            },
            dropped,
        )
    }
}

fn identity_of(point: &Point) -> UserStyle {
    UserStyle {
        color: point.color(),
        owner_label: point.owner_label().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, USER_FORECAST_COLOR};

    fn grid() -> TickGrid {
        TickGrid::new(
            vec![2024.0, 2025.0, 2026.0, 2027.0],
            (0..=24).map(|i| f64::from(i) * 0.25).collect(),
        )
        .expect("grid")
    }

    #[test]
    fn resnap_keeps_identity_and_drops_off_grid_categories() {
        let style = UserStyle {
            color: Color::rgb(0.1, 0.2, 0.3),
            owner_label: "Analyst".to_owned(),
        };
        let mut session = ForecastSession::new();
        session.place(&grid(), SnapPolicy::default(), &style, 2024.0, 5.0);
        session.place(&grid(), SnapPolicy::default(), &style, 2027.0, 2.5);

        let narrow = TickGrid::new(vec![2024.0, 2025.0], vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5])
            .expect("narrow grid");
        let (resnapped, dropped) = session.resnapped(&narrow, SnapPolicy::default());

        assert_eq!(dropped, 1);
        assert_eq!(resnapped.user_series().len(), 1);
        let point = resnapped.user_series().get(2024.0).expect("kept point");
        assert_eq!(point.value(), 2.5);
        assert_eq!(point.owner_label(), "Analyst");
        assert_ne!(point.color(), USER_FORECAST_COLOR);
    }
}
