use thiserror::Error;

pub type ForecastResult<T> = Result<T, ForecastError>;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("invalid tick grid: {0}")]
    InvalidGrid(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("submission sink failed: {0}")]
    SinkFailed(String),
}
