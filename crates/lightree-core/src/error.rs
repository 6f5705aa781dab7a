use thiserror::Error;

#[derive(Debug, Error)]
pub enum LightreeError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("photo {id} could not be decoded: {reason}")]
    PhotoDecode { id: u64, reason: String },
    #[error("hand detector failed: {0}")]
    Detector(String),
}

pub type Result<T> = std::result::Result<T, LightreeError>;
