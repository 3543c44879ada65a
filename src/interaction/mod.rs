use serde::{Deserialize, Serialize};

use crate::core::TieBreak;

/// Tie-break rules applied by the snap resolver on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapPolicy {
    pub category_tie_break: TieBreak,
    pub value_tie_break: TieBreak,
}

impl Default for SnapPolicy {
    /// Category midpoints go to the first-encountered tick; value midpoints
    /// round up to the higher tick.
    fn default() -> Self {
        Self {
            category_tie_break: TieBreak::Lower,
            value_tie_break: TieBreak::Higher,
        }
    }
}

/// A coordinate that landed on a valid grid tick pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnappedCoordinate {
    pub category: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RejectReason {
    /// One of the raw coordinates was NaN or infinite.
    NonFinite,
    /// The nearest category tick is farther away than the grid tolerance.
    OutsideCategoryTolerance { nearest: f64, distance: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SnapResult {
    Snapped(SnappedCoordinate),
    Rejected(RejectReason),
}

impl SnapResult {
    #[must_use]
    pub fn snapped(self) -> Option<SnappedCoordinate> {
        match self {
            Self::Snapped(coordinate) => Some(coordinate),
            Self::Rejected(_) => None,
        }
    }
}

/// What a pointer click did to the user series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClickOutcome {
    Placed(SnappedCoordinate),
    Replaced {
        coordinate: SnappedCoordinate,
        previous_value: f64,
    },
    /// Stray click; nothing changed.
    Rejected(RejectReason),
    /// Engine is read-only; nothing changed.
    ReadOnly,
}

impl ClickOutcome {
    /// `true` when the user series was touched.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Placed(_) | Self::Replaced { .. })
    }
}

/// Independent display toggles for the two reference series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesVisibility {
    pub show_submitters: bool,
    pub show_aggregate: bool,
}

impl Default for SeriesVisibility {
    fn default() -> Self {
        Self {
            show_submitters: true,
            show_aggregate: true,
        }
    }
}

impl SeriesVisibility {
    #[must_use]
    pub const fn new(show_submitters: bool, show_aggregate: bool) -> Self {
        Self {
            show_submitters,
            show_aggregate,
        }
    }

    #[must_use]
    pub const fn user_only() -> Self {
        Self::new(false, false)
    }
}
