use crate::error::ConfigError;
use eframe::egui;

/// Which platform theme the app runs under.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemeChoice {
    #[default]
    System,
    Dark,
    Light,
}

impl ThemeChoice {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        if value.eq_ignore_ascii_case("system") {
            Ok(ThemeChoice::System)
        } else if value.eq_ignore_ascii_case("dark") {
            Ok(ThemeChoice::Dark)
        } else if value.eq_ignore_ascii_case("light") {
            Ok(ThemeChoice::Light)
        } else {
            Err(ConfigError::UnknownTheme(value.to_string()))
        }
    }

    pub fn preference(self) -> egui::ThemePreference {
        match self {
            ThemeChoice::System => egui::ThemePreference::System,
            ThemeChoice::Dark => egui::ThemePreference::Dark,
            ThemeChoice::Light => egui::ThemePreference::Light,
        }
    }
}

/// Settings picked on the command line at launch.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub theme: ThemeChoice,
    pub window_size: [f32; 2],
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::System,
            window_size: [420.0, 820.0],
        }
    }
}

fn parse_size(value: &str) -> Result<[f32; 2], ConfigError> {
    let invalid = || ConfigError::InvalidSize(value.to_string());
    let (w, h) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w: f32 = w.trim().parse().map_err(|_| invalid())?;
    let h: f32 = h.trim().parse().map_err(|_| invalid())?;
    if !(w >= 1.0 && h >= 1.0) {
        return Err(invalid());
    }
    Ok([w, h])
}

/// Parse launch flags. Unknown flags are ignored with a warning.
pub fn parse_launch_args<I>(args: I) -> Result<LaunchConfig, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = LaunchConfig::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--theme"))?;
                config.theme = ThemeChoice::parse(&value)?;
            }
            "--size" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--size"))?;
                config.window_size = parse_size(&value)?;
            }
            other => {
                if let Some(value) = other.strip_prefix("--theme=") {
                    config.theme = ThemeChoice::parse(value)?;
                } else if let Some(value) = other.strip_prefix("--size=") {
                    config.window_size = parse_size(value)?;
                } else {
                    log::warn!("Ignoring unknown argument {other:?}");
                }
            }
        }
    }
    Ok(config)
}
