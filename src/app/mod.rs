pub mod config;
pub mod input_handler;
pub mod navigation;
pub mod painter;
pub mod render_helper;
pub mod state;

pub use config::{LaunchConfig, ThemeChoice, parse_launch_args};
pub use painter::WhiteboardApp;
