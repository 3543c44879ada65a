//! dotplot-rs: grid-snapped forecast annotation engine.
//!
//! The crate turns data-space pointer clicks on a dot-plot chart into a
//! single user-authored series (one point per category), composites it with
//! read-only reference series for display, and emits tag-annotated
//! submissions. Drawing is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod sink;
pub mod telemetry;

pub use api::{ForecastEngine, ForecastEngineConfig};
pub use error::{ForecastError, ForecastResult};
