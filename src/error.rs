use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or validate the lecture catalog.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Failure to bring up a lecture for display.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no lecture with id {0} in the catalog")]
    UnknownLecture(u32),

    #[error("could not load `{file}` for lecture {id}")]
    Fetch {
        id: u32,
        file: String,
        #[source]
        source: std::io::Error,
    },
}
