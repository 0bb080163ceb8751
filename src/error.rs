use thiserror::Error;

pub type MotionResult<T> = Result<T, MotionError>;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid geometry: top={top}, height={height}")]
    InvalidGeometry { top: f64, height: f64 },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
