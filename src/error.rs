use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metadata provider error: {0}")]
    Provider(String),

    #[error("Metadata refresh timed out after {0:?}")]
    Timeout(Duration),

    #[error("Background refresh failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}
