use serde::{Deserialize, Serialize};

use crate::interaction::{RejectReason, SeriesVisibility};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub user_points_len: usize,
    pub selected_tags_len: usize,
    pub submitter_points_len: usize,
    pub aggregate_points_len: usize,
    pub visibility: SeriesVisibility,
    pub read_only: bool,
    pub submissions_emitted: u64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    PointPlaced {
        category: f64,
        value: f64,
    },
    PointReplaced {
        category: f64,
        previous_value: f64,
        value: f64,
    },
    ClickRejected {
        reason: RejectReason,
    },
    TagToggled {
        tag: String,
        selected: bool,
    },
    Submitted {
        sequence: u64,
        points_len: usize,
    },
    Reset,
    ReferenceSeriesReplaced {
        points_len: usize,
    },
    AggregateSeriesReplaced {
        points_len: usize,
    },
    VisibilityChanged(SeriesVisibility),
    GridReplaced {
        dropped_points: usize,
    },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating the
/// session directly.
pub trait ForecastPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &EngineEvent, context: PluginContext);
}
