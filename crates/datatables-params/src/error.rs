use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("parameter serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
