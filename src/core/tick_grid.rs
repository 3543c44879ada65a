use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, f64_to_decimal, format_fixed};
use crate::error::{ForecastError, ForecastResult};

/// Upper bound on ticks generated from a stepped range.
pub const MAX_STEPPED_TICKS: u64 = 100_000;

/// Relative tolerance (of the smallest tick spacing) used for midpoint and
/// constant-step comparisons.
const TICK_EPSILON_RATIO: f64 = 1e-9;

/// Which tick wins when a raw coordinate sits exactly between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// First-encountered tick in ascending order.
    Lower,
    /// Later tick in ascending order.
    Higher,
}

/// Result of a nearest-tick scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestTick {
    pub index: usize,
    pub tick: f64,
    pub distance: f64,
}

/// One ordered, strictly increasing tick sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TickAxis {
    ticks: Vec<f64>,
    min_spacing: f64,
}

impl TickAxis {
    /// Validates and wraps an explicit tick sequence.
    ///
    /// Rejects sequences with fewer than two ticks, non-finite ticks, and
    /// duplicate or unordered neighbours.
    pub fn new(ticks: Vec<f64>, axis_name: &str) -> ForecastResult<Self> {
        if ticks.len() < 2 {
            return Err(ForecastError::InvalidGrid(format!(
                "{axis_name} axis needs at least 2 ticks, got {}",
                ticks.len()
            )));
        }
        if let Some(index) = ticks.iter().position(|tick| !tick.is_finite()) {
            return Err(ForecastError::InvalidGrid(format!(
                "{axis_name} tick #{index} must be finite"
            )));
        }

        let mut min_spacing = f64::INFINITY;
        for (index, pair) in ticks.windows(2).enumerate() {
            let spacing = pair[1] - pair[0];
            if spacing == 0.0 {
                return Err(ForecastError::InvalidGrid(format!(
                    "{axis_name} tick {} is duplicated at position {}",
                    pair[1],
                    index + 1
                )));
            }
            if spacing < 0.0 {
                return Err(ForecastError::InvalidGrid(format!(
                    "{axis_name} ticks must be strictly increasing ({} follows {})",
                    pair[1], pair[0]
                )));
            }
            min_spacing = min_spacing.min(spacing);
        }

        Ok(Self { ticks, min_spacing })
    }

    /// Builds `start, start + step, ...` up to and including `end` using
    /// decimal arithmetic so ticks carry no accumulated float drift.
    pub fn stepped(start: f64, end: f64, step: f64, axis_name: &str) -> ForecastResult<Self> {
        let start_dec = f64_to_decimal(start, "tick range start")
            .map_err(|e| ForecastError::InvalidGrid(format!("{axis_name}: {e}")))?;
        let end_dec = f64_to_decimal(end, "tick range end")
            .map_err(|e| ForecastError::InvalidGrid(format!("{axis_name}: {e}")))?;
        let step_dec = f64_to_decimal(step, "tick step")
            .map_err(|e| ForecastError::InvalidGrid(format!("{axis_name}: {e}")))?;
        if step_dec <= Decimal::ZERO {
            return Err(ForecastError::InvalidGrid(format!(
                "{axis_name} tick step must be > 0"
            )));
        }
        if end_dec <= start_dec {
            return Err(ForecastError::InvalidGrid(format!(
                "{axis_name} tick range end must be > start"
            )));
        }

        let steps = end_dec
            .checked_sub(start_dec)
            .and_then(|span| span.checked_div(step_dec))
            .and_then(|steps| steps.floor().to_u64())
            .ok_or_else(|| {
                ForecastError::InvalidGrid(format!("{axis_name} tick count is out of range"))
            })?;
        if steps >= MAX_STEPPED_TICKS {
            return Err(ForecastError::InvalidGrid(format!(
                "{axis_name} tick range produces more than {MAX_STEPPED_TICKS} ticks"
            )));
        }

        let mut ticks = Vec::with_capacity(steps as usize + 1);
        for index in 0..=steps {
            let tick = start_dec + step_dec * Decimal::from(index);
            ticks.push(decimal_to_f64(tick, "tick")?);
        }
        Self::new(ticks, axis_name)
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> f64 {
        self.ticks[0]
    }

    #[must_use]
    pub fn last(&self) -> f64 {
        self.ticks[self.ticks.len() - 1]
    }

    #[must_use]
    pub fn min_spacing(&self) -> f64 {
        self.min_spacing
    }

    /// Half of the smallest spacing between neighbouring ticks.
    #[must_use]
    pub fn snap_tolerance(&self) -> f64 {
        self.min_spacing * 0.5
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.min_spacing * TICK_EPSILON_RATIO
    }

    #[must_use]
    pub fn has_constant_step(&self) -> bool {
        let eps = self.epsilon().max(f64::EPSILON);
        self.ticks
            .windows(2)
            .all(|pair| ((pair[1] - pair[0]) - self.min_spacing).abs() <= eps)
    }

    /// Returns `true` when `value` coincides with a tick.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.nearest(value, TieBreak::Lower)
            .is_some_and(|nearest| nearest.distance <= self.epsilon())
    }

    /// Scans the ticks in ascending order for the one closest to `raw`.
    ///
    /// Returns `None` only for non-finite input. Coordinates beyond either
    /// end resolve to the boundary tick.
    #[must_use]
    pub fn nearest(&self, raw: f64, tie_break: TieBreak) -> Option<NearestTick> {
        if !raw.is_finite() {
            return None;
        }

        let eps = self.epsilon();
        let mut best: Option<NearestTick> = None;
        for (index, &tick) in self.ticks.iter().enumerate() {
            let distance = (tick - raw).abs();
            match best {
                // Distances only grow past the minimum on an ascending axis.
                Some(current) if distance > current.distance + eps => break,
                Some(current) if (distance - current.distance).abs() <= eps => {
                    if tie_break == TieBreak::Higher {
                        best = Some(NearestTick {
                            index,
                            tick,
                            distance,
                        });
                    }
                }
                _ => {
                    best = Some(NearestTick {
                        index,
                        tick,
                        distance,
                    })
                }
            }
        }
        best
    }
}

/// Display label attached to one category tick (e.g. `2027 -> "Long Run"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub tick: f64,
    pub label: String,
}

impl CategoryLabel {
    #[must_use]
    pub fn new(tick: f64, label: impl Into<String>) -> Self {
        Self {
            tick,
            label: label.into(),
        }
    }
}

/// Serializable grid description used by engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickGridConfig {
    pub category_ticks: Vec<f64>,
    #[serde(default)]
    pub category_labels: Vec<CategoryLabel>,
    pub value_start: f64,
    pub value_end: f64,
    pub value_step: f64,
}

impl Default for TickGridConfig {
    fn default() -> Self {
        Self {
            category_ticks: vec![2024.0, 2025.0, 2026.0, 2027.0],
            category_labels: vec![CategoryLabel::new(2027.0, "Long Run")],
            value_start: 0.0,
            value_end: 6.0,
            value_step: 0.25,
        }
    }
}

/// Discrete category (x) and value (y) axes every point snaps onto.
#[derive(Debug, Clone, PartialEq)]
pub struct TickGrid {
    categories: TickAxis,
    values: TickAxis,
    category_labels: IndexMap<OrderedFloat<f64>, String>,
}

impl TickGrid {
    pub fn new(category_ticks: Vec<f64>, value_ticks: Vec<f64>) -> ForecastResult<Self> {
        let categories = TickAxis::new(category_ticks, "category")?;
        let values = TickAxis::new(value_ticks, "value")?;
        Self::from_axes(categories, values)
    }

    pub fn from_axes(categories: TickAxis, values: TickAxis) -> ForecastResult<Self> {
        if !values.has_constant_step() {
            return Err(ForecastError::InvalidGrid(
                "value ticks must use a constant step".to_owned(),
            ));
        }
        Ok(Self {
            categories,
            values,
            category_labels: IndexMap::new(),
        })
    }

    pub fn from_config(config: &TickGridConfig) -> ForecastResult<Self> {
        let categories = TickAxis::new(config.category_ticks.clone(), "category")?;
        let values = TickAxis::stepped(
            config.value_start,
            config.value_end,
            config.value_step,
            "value",
        )?;
        let mut grid = Self::from_axes(categories, values)?;
        for label in &config.category_labels {
            grid = grid.with_category_label(label.tick, label.label.clone())?;
        }
        Ok(grid)
    }

    /// Attaches a display label to an existing category tick.
    pub fn with_category_label(
        mut self,
        tick: f64,
        label: impl Into<String>,
    ) -> ForecastResult<Self> {
        let anchor = self
            .categories
            .nearest(tick, TieBreak::Lower)
            .filter(|nearest| nearest.distance <= self.categories.epsilon())
            .ok_or_else(|| {
                ForecastError::InvalidGrid(format!("category label targets unknown tick {tick}"))
            })?;
        self.category_labels
            .insert(OrderedFloat(anchor.tick), label.into());
        Ok(self)
    }

    #[must_use]
    pub fn categories(&self) -> &TickAxis {
        &self.categories
    }

    #[must_use]
    pub fn values(&self) -> &TickAxis {
        &self.values
    }

    #[must_use]
    pub fn category_tolerance(&self) -> f64 {
        self.categories.snap_tolerance()
    }

    /// Display label for a category, falling back to the tick itself.
    #[must_use]
    pub fn category_label(&self, tick: f64) -> String {
        if let Some(label) = self.category_labels.get(&OrderedFloat(tick)) {
            return label.clone();
        }
        if tick.fract() == 0.0 {
            format!("{tick:.0}")
        } else {
            format_fixed(tick)
        }
    }
}
