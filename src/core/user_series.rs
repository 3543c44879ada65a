use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::point::{Color, Point, USER_FORECAST_COLOR};

pub const USER_OWNER_LABEL: &str = "Your Forecast";

/// Identity fields stamped on every newly inserted user point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStyle {
    pub color: Color,
    pub owner_label: String,
}

impl Default for UserStyle {
    fn default() -> Self {
        Self {
            color: USER_FORECAST_COLOR,
            owner_label: USER_OWNER_LABEL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced { previous_value: f64 },
}

/// The single mutable series, keyed by category.
///
/// Insertion order is kept so the compositor can hand points to the renderer
/// in the order the user placed them. Replacing a value never moves a point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSeries {
    points: IndexMap<OrderedFloat<f64>, Point>,
}

impl UserSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point for a new category or replaces the value of the
    /// existing one. `category` and `value` must already be snapped.
    pub fn upsert(&mut self, category: f64, value: f64, style: &UserStyle) -> UpsertOutcome {
        match self.points.get_mut(&OrderedFloat(category)) {
            Some(existing) => {
                let previous_value = existing.value();
                existing.set_value(value);
                UpsertOutcome::Replaced { previous_value }
            }
            None => {
                self.points.insert(
                    OrderedFloat(category),
                    Point::new(category, value, style.color, style.owner_label.clone()),
                );
                UpsertOutcome::Inserted
            }
        }
    }

    #[must_use]
    pub fn get(&self, category: f64) -> Option<&Point> {
        self.points.get(&OrderedFloat(category))
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Point> {
        self.points.values().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
