use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
