mod compositor;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod session;
mod snap_resolver;
mod submission;

pub use compositor::composite_points;
pub use engine::ForecastEngine;
pub use engine_config::ForecastEngineConfig;
pub use engine_init::EngineSeed;
pub use json_contract::{FORECAST_SUBMISSION_JSON_SCHEMA_V1, ForecastSubmissionJsonContractV1};
pub use session::ForecastSession;
pub use snap_resolver::resolve_snap;
pub use submission::{ForecastSubmission, SubmitDisabledReason, SubmitOutcome};
