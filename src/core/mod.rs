pub mod annotation;
pub mod point;
pub mod primitives;
pub mod series;
pub mod tick_grid;
pub mod user_series;

pub use annotation::{AnnotationSet, DEFAULT_REASONING_TAGS};
pub use point::{AGGREGATE_COLOR, Color, Point, SUBMITTER_COLOR, USER_FORECAST_COLOR};
pub use primitives::{DISPLAY_PRECISION, format_fixed};
pub use series::{
    AGGREGATE_OWNER_LABEL, AggregatePoint, AggregateSeries, AggregateStyle, ReferenceSeries,
};
pub use tick_grid::{
    CategoryLabel, MAX_STEPPED_TICKS, NearestTick, TickAxis, TickGrid, TickGridConfig, TieBreak,
};
pub use user_series::{USER_OWNER_LABEL, UpsertOutcome, UserSeries, UserStyle};
