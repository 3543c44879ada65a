use serde::{Deserialize, Serialize};

use crate::core::{
    AggregateStyle, CategoryLabel, DEFAULT_REASONING_TAGS, TickGridConfig, UserStyle,
};
use crate::error::{ForecastError, ForecastResult};
use crate::interaction::{SeriesVisibility, SnapPolicy};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEngineConfig {
    #[serde(default)]
    pub grid: TickGridConfig,
    #[serde(default)]
    pub user_style: UserStyle,
    #[serde(default)]
    pub aggregate_style: AggregateStyle,
    #[serde(default)]
    pub visibility: SeriesVisibility,
    #[serde(default)]
    pub snap_policy: SnapPolicy,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default = "default_tag_catalog")]
    pub tag_catalog: Vec<String>,
}

impl Default for ForecastEngineConfig {
    fn default() -> Self {
        Self {
            grid: TickGridConfig::default(),
            user_style: UserStyle::default(),
            aggregate_style: AggregateStyle::default(),
            visibility: SeriesVisibility::default(),
            snap_policy: SnapPolicy::default(),
            read_only: false,
            tag_catalog: default_tag_catalog(),
        }
    }
}

impl ForecastEngineConfig {
    /// Creates a config with the given category ticks and a stepped value axis.
    #[must_use]
    pub fn new(category_ticks: Vec<f64>, value_start: f64, value_end: f64, value_step: f64) -> Self {
        Self {
            grid: TickGridConfig {
                category_ticks,
                category_labels: Vec::new(),
                value_start,
                value_end,
                value_step,
            },
            ..Self::default()
        }
    }

    /// Adds a display label for one category tick.
    #[must_use]
    pub fn with_category_label(mut self, tick: f64, label: impl Into<String>) -> Self {
        self.grid.category_labels.push(CategoryLabel::new(tick, label));
        self
    }

    /// Sets color and owner label stamped on user points.
    #[must_use]
    pub fn with_user_style(mut self, style: UserStyle) -> Self {
        self.user_style = style;
        self
    }

    /// Sets color and unit suffix for derived median points.
    #[must_use]
    pub fn with_aggregate_style(mut self, style: AggregateStyle) -> Self {
        self.aggregate_style = style;
        self
    }

    /// Sets initial reference-series visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: SeriesVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets snap tie-break rules.
    #[must_use]
    pub fn with_snap_policy(mut self, policy: SnapPolicy) -> Self {
        self.snap_policy = policy;
        self
    }

    /// Disables every mutating operation.
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Replaces the reasoning tags offered to the user.
    #[must_use]
    pub fn with_tag_catalog<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tag_catalog = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ForecastResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ForecastError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ForecastResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ForecastError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_tag_catalog() -> Vec<String> {
    DEFAULT_REASONING_TAGS
        .iter()
        .map(|tag| (*tag).to_owned())
        .collect()
}
