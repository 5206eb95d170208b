use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreprocError {
    #[error("Unknown resize mode: {0}")]
    UnknownResize(String),

    #[error("Unknown crop mode: {0}")]
    UnknownCrop(String),

    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    #[error("Unknown pixel format: {0}")]
    UnknownFourCc(String),

    #[error("Field '{field}' expects {expected} values, got {found}")]
    InvalidValueCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Failed to parse model-proc: {0}")]
    ModelProcParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PreprocError>;
