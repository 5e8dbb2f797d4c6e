pub mod app;
pub mod canvas;
pub mod error;
pub mod styling;
pub mod ui;
pub mod utils;

pub use app::state::{AppState, BackgroundMode, Preferences, SwitchState};
pub use app::{LaunchConfig, ThemeChoice, WhiteboardApp, parse_launch_args};
pub use error::{AppError, ConfigError};
