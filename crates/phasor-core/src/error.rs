use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhasorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PhasorError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PhasorError>;
