use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::point::{AGGREGATE_COLOR, Color, Point};
use crate::core::tick_grid::{TickGrid, TieBreak};
use crate::error::{ForecastError, ForecastResult};

/// Owner label stamped on derived median points.
pub const AGGREGATE_OWNER_LABEL: &str = "Median";

/// Read-only per-submitter points, many per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReferenceSeriesRepr")]
pub struct ReferenceSeries {
    points: Vec<Point>,
}

#[derive(Deserialize)]
struct ReferenceSeriesRepr {
    points: Vec<Point>,
}

impl TryFrom<ReferenceSeriesRepr> for ReferenceSeries {
    type Error = ForecastError;

    fn try_from(repr: ReferenceSeriesRepr) -> ForecastResult<Self> {
        Self::new(repr.points)
    }
}

impl ReferenceSeries {
    pub fn new(points: Vec<Point>) -> ForecastResult<Self> {
        for (index, point) in points.iter().enumerate() {
            point.validate().map_err(|e| {
                ForecastError::InvalidData(format!("reference point #{index}: {e}"))
            })?;
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One summary point with the number of submitters sharing its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatePoint {
    pub point: Point,
    pub submitter_count: u32,
    pub summary_label: String,
}

impl AggregatePoint {
    #[must_use]
    pub fn new(point: Point, submitter_count: u32, summary_label: impl Into<String>) -> Self {
        Self {
            point,
            submitter_count,
            summary_label: summary_label.into(),
        }
    }
}

/// Style applied to derived median points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStyle {
    pub color: Color,
    pub unit_suffix: String,
}

impl Default for AggregateStyle {
    fn default() -> Self {
        Self {
            color: AGGREGATE_COLOR,
            unit_suffix: "%".to_owned(),
        }
    }
}

/// Read-only summary points, at most one per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AggregateSeriesRepr")]
pub struct AggregateSeries {
    points: Vec<AggregatePoint>,
}

#[derive(Deserialize)]
struct AggregateSeriesRepr {
    points: Vec<AggregatePoint>,
}

impl TryFrom<AggregateSeriesRepr> for AggregateSeries {
    type Error = ForecastError;

    fn try_from(repr: AggregateSeriesRepr) -> ForecastResult<Self> {
        Self::new(repr.points)
    }
}

impl AggregateSeries {
    /// Validates every point and rejects a second point for a category.
    pub fn new(points: Vec<AggregatePoint>) -> ForecastResult<Self> {
        let mut categories = IndexSet::with_capacity(points.len());
        for (index, aggregate) in points.iter().enumerate() {
            aggregate.point.validate().map_err(|e| {
                ForecastError::InvalidData(format!("aggregate point #{index}: {e}"))
            })?;
            if !categories.insert(OrderedFloat(aggregate.point.category())) {
                return Err(ForecastError::InvalidData(format!(
                    "aggregate point #{index} repeats category {}",
                    aggregate.point.category()
                )));
            }
        }
        Ok(Self { points })
    }

    /// Derives one median point per category present in `reference`.
    ///
    /// Categories follow grid order. Even-sized groups use the mean of the two
    /// middle values; the median is then snapped to the value grid and
    /// `submitter_count` counts submitters sitting exactly on it.
    #[must_use]
    pub fn summarize(
        reference: &ReferenceSeries,
        grid: &TickGrid,
        value_tie_break: TieBreak,
        style: &AggregateStyle,
    ) -> Self {
        let category_eps = grid.categories().epsilon();
        let value_eps = grid.values().epsilon();
        let mut points = Vec::new();

        for &category in grid.categories().ticks() {
            let mut values: Vec<f64> = reference
                .points()
                .iter()
                .filter(|point| (point.category() - category).abs() <= category_eps)
                .map(Point::value)
                .collect();
            if values.is_empty() {
                continue;
            }
            values.sort_by(f64::total_cmp);

            let mid = values.len() / 2;
            let raw_median = if values.len() % 2 == 0 {
                (values[mid - 1] + values[mid]) * 0.5
            } else {
                values[mid]
            };
            let Some(snapped) = grid.values().nearest(raw_median, value_tie_break) else {
                continue;
            };

            let count = values
                .iter()
                .filter(|value| (**value - snapped.tick).abs() <= value_eps)
                .count();
            let point = Point::new(category, snapped.tick, style.color, AGGREGATE_OWNER_LABEL);
            let summary_label = format!(
                "{} Median: {}{}",
                grid.category_label(category),
                point.display_value(),
                style.unit_suffix
            );
            points.push(AggregatePoint::new(
                point,
                u32::try_from(count).unwrap_or(u32::MAX),
                summary_label,
            ));
        }

        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[AggregatePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
