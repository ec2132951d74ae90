use thiserror::Error;
use vitrine_config::ConfigError;

use crate::widget::RenderError;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, ListingError>;
