use std::path::PathBuf;

use sdl2::video::WindowBuildError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SystemError>;

#[derive(Error, Debug)]
pub enum SystemError {
    /// sdl2 reports most failures as plain strings
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Error while building window: {0}")]
    Window(#[from] WindowBuildError),

    #[error("Renderer error: {0}")]
    Renderer(String),

    #[error("Reading config {path:?} failed: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parsing config {path:?} failed: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<String> for SystemError {
    fn from(msg: String) -> Self {
        SystemError::Sdl(msg)
    }
}
