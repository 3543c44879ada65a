use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_fixed;
use crate::error::{ForecastError, ForecastResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#RRGGBB` (leading `#` optional).
    pub fn from_hex(input: &str) -> ForecastResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ForecastError::InvalidData(format!(
                "color `{input}` must be formatted as #RRGGBB"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                ForecastError::InvalidData(format!("color `{input}` is not valid hex: {e}"))
            })
        };
        Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats as `#RRGGBB`, dropping alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let to_byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        )
    }

    pub fn validate(self) -> ForecastResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ForecastError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

pub const USER_FORECAST_COLOR: Color = Color::rgb8(0xEC, 0x48, 0x99);
pub const SUBMITTER_COLOR: Color = Color::rgb8(0x25, 0x63, 0xEB);
pub const AGGREGATE_COLOR: Color = Color::rgb8(0x93, 0x33, 0xEA);

/// Value type shared by every series.
///
/// `display_value` is derived from `value` and is recomputed on every value
/// change, so fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    category: f64,
    value: f64,
    display_value: String,
    color: Color,
    owner_label: String,
    #[serde(default)]
    tags: IndexSet<String>,
}

impl Point {
    #[must_use]
    pub fn new(category: f64, value: f64, color: Color, owner_label: impl Into<String>) -> Self {
        Self {
            category,
            value,
            display_value: format_fixed(value),
            color,
            owner_label: owner_label.into(),
            tags: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn without_tags(mut self) -> Self {
        self.tags.clear();
        self
    }

    #[must_use]
    pub fn category(&self) -> f64 {
        self.category
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn owner_label(&self) -> &str {
        &self.owner_label
    }

    #[must_use]
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    /// Replaces the value and its display string; identity fields stay put.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.display_value = format_fixed(value);
    }

    /// Checks finiteness, color range and display-string consistency.
    ///
    /// Points built through `new` always pass; this guards deserialized input.
    pub fn validate(&self) -> ForecastResult<()> {
        if !self.category.is_finite() || !self.value.is_finite() {
            return Err(ForecastError::InvalidData(format!(
                "point ({}, {}) must have finite category and value",
                self.category, self.value
            )));
        }
        self.color.validate()?;
        let expected = format_fixed(self.value);
        if self.display_value != expected {
            return Err(ForecastError::InvalidData(format!(
                "point display value `{}` does not match value {expected}",
                self.display_value
            )));
        }
        Ok(())
    }
}
