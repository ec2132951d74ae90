use thiserror::Error;

/// Errors raised while loading or reading listing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("listing configuration must be a mapping, found {0}")]
    NotAMapping(String),

    #[error("ordering for `{key}` must be an integer, found {value}")]
    InvalidOrdering { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
