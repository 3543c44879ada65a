use tracing::{debug, warn};

use crate::core::{AggregateSeries, ReferenceSeries, TickGrid};
use crate::error::{ForecastError, ForecastResult};
use crate::sink::SubmissionSink;

use super::{ForecastEngine, ForecastEngineConfig, ForecastSession};

/// Optional data supplied at construction time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineSeed {
    pub submitters: ReferenceSeries,
    pub aggregates: AggregateSeries,
    /// Resumed session, e.g. from `ForecastSession::resume`.
    pub initial_session: Option<ForecastSession>,
}

impl EngineSeed {
    #[must_use]
    pub fn new(submitters: ReferenceSeries, aggregates: AggregateSeries) -> Self {
        Self {
            submitters,
            aggregates,
            initial_session: None,
        }
    }

    #[must_use]
    pub fn with_initial_session(mut self, session: ForecastSession) -> Self {
        self.initial_session = Some(session);
        self
    }
}

impl<S: SubmissionSink> ForecastEngine<S> {
    /// Creates an engine with empty reference series and an empty session.
    pub fn new(sink: S, config: ForecastEngineConfig) -> ForecastResult<Self> {
        Self::with_seed(sink, config, EngineSeed::default())
    }

    /// Creates a fully initialized engine.
    ///
    /// Fails fast when the configured grid is malformed; nothing downstream
    /// can snap against a broken grid.
    pub fn with_seed(
        sink: S,
        config: ForecastEngineConfig,
        seed: EngineSeed,
    ) -> ForecastResult<Self> {
        let grid = TickGrid::from_config(&config.grid)?;
        config.user_style.color.validate()?;
        config.aggregate_style.color.validate()?;
        if config.user_style.owner_label.is_empty() {
            return Err(ForecastError::InvalidData(
                "user owner label must not be empty".to_owned(),
            ));
        }

        let session = match seed.initial_session {
            Some(session) => {
                let (session, dropped) = session.resnapped(&grid, config.snap_policy);
                if dropped > 0 {
                    warn!(dropped, "initial session points do not fit the tick grid");
                }
                session
            }
            None => ForecastSession::new(),
        };

        debug!(
            categories = grid.categories().len(),
            values = grid.values().len(),
            submitters = seed.submitters.len(),
            aggregates = seed.aggregates.len(),
            user_points = session.user_series().len(),
            read_only = config.read_only,
            "forecast engine initialized"
        );

        Ok(Self {
            sink,
            grid,
            snap_policy: config.snap_policy,
            user_style: config.user_style,
            aggregate_style: config.aggregate_style,
            visibility: config.visibility,
            read_only: config.read_only,
            tag_catalog: config.tag_catalog,
            submitters: seed.submitters,
            aggregates: seed.aggregates,
            session,
            submissions_emitted: 0,
            plugins: Vec::new(),
        })
    }
}
