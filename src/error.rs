use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid race time `{0}`: expected MM:SS")]
    InvalidTime(String),

    #[error("dataset fetch failed: {0}")]
    Fetch(String),

    #[error("dataset decode failed: {0}")]
    Decode(String),

    #[error("render failed: {0}")]
    Render(String),
}
