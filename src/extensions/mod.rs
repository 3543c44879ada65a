//! Optional observer hooks live here.
//!
//! Plugins see engine events and a read-only context; they never mutate the
//! session directly.

pub mod plugins;

pub use plugins::{EngineEvent, ForecastPlugin, PluginContext};
