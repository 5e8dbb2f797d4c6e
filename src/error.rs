//! Launch-time errors. Drawing itself has no failure modes.

use thiserror::Error;

/// Problems with the command line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} needs a value")]
    MissingValue(&'static str),

    #[error("unknown theme {0:?}, expected system, dark or light")]
    UnknownTheme(String),

    #[error("invalid window size {0:?}, expected <width>x<height>")]
    InvalidSize(String),
}

/// Anything that stops the app from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Eframe(#[from] eframe::Error),
}

/// Result type alias for launching the app.
pub type Result<T> = std::result::Result<T, AppError>;
