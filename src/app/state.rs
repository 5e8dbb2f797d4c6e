use crate::canvas::Board;
use eframe::egui::Color32;

/// Board background actually shown, combining the platform theme and the user's preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundMode {
    Black,
    White,
}

impl BackgroundMode {
    /// Black only when the platform is dark and the user hasn't asked for white.
    pub fn effective(system_dark: bool, prefs: &Preferences) -> Self {
        if system_dark && !prefs.white_background {
            BackgroundMode::Black
        } else {
            BackgroundMode::White
        }
    }

    pub fn background(self) -> Color32 {
        match self {
            BackgroundMode::Black => Color32::BLACK,
            BackgroundMode::White => Color32::WHITE,
        }
    }

    pub fn ink(self) -> Color32 {
        match self {
            BackgroundMode::Black => Color32::WHITE,
            BackgroundMode::White => Color32::BLACK,
        }
    }
}

/// User preferences. Live for the process only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub white_background: bool,
}

/// What the white-background switch shows and whether it can be flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitchState {
    pub checked: bool,
    pub enabled: bool,
}

impl SwitchState {
    /// In light mode white is the only reachable background, so the switch is pinned on.
    pub fn white_background(system_dark: bool, prefs: &Preferences) -> Self {
        Self {
            checked: !system_dark || prefs.white_background,
            enabled: system_dark,
        }
    }
}

/// Application state shared by every screen. Owned by the top-level app and lent to views.
#[derive(Debug, Default)]
pub struct AppState {
    pub board: Board,
    pub preferences: Preferences,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_white_background(&mut self, enabled: bool) {
        if self.preferences.white_background != enabled {
            log::debug!("White background preference set to {enabled}");
            self.preferences.white_background = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE_PREF: Preferences = Preferences {
        white_background: true,
    };
    const NO_PREF: Preferences = Preferences {
        white_background: false,
    };

    #[test]
    fn background_is_black_only_in_dark_mode_without_preference() {
        assert_eq!(BackgroundMode::effective(true, &NO_PREF), BackgroundMode::Black);
        assert_eq!(BackgroundMode::effective(true, &WHITE_PREF), BackgroundMode::White);
        assert_eq!(BackgroundMode::effective(false, &NO_PREF), BackgroundMode::White);
        assert_eq!(BackgroundMode::effective(false, &WHITE_PREF), BackgroundMode::White);
    }

    #[test]
    fn ink_contrasts_with_background() {
        for mode in [BackgroundMode::Black, BackgroundMode::White] {
            assert_ne!(mode.ink(), mode.background());
        }
        assert_eq!(BackgroundMode::Black.ink(), Color32::WHITE);
        assert_eq!(BackgroundMode::White.ink(), Color32::BLACK);
    }

    #[test]
    fn switch_pinned_on_in_light_mode() {
        for prefs in [NO_PREF, WHITE_PREF] {
            let state = SwitchState::white_background(false, &prefs);
            assert!(state.checked);
            assert!(!state.enabled);
        }
    }

    #[test]
    fn switch_follows_preference_in_dark_mode() {
        assert_eq!(
            SwitchState::white_background(true, &NO_PREF),
            SwitchState {
                checked: false,
                enabled: true
            }
        );
        assert_eq!(
            SwitchState::white_background(true, &WHITE_PREF),
            SwitchState {
                checked: true,
                enabled: true
            }
        );
    }

    #[test]
    fn preference_defaults_to_off() {
        let state = AppState::new();
        assert!(!state.preferences.white_background);
        assert!(state.board.strokes().is_empty());
    }

    #[test]
    fn setting_preference_updates_shared_state() {
        let mut state = AppState::new();
        state.set_white_background(true);
        assert_eq!(
            BackgroundMode::effective(true, &state.preferences),
            BackgroundMode::White
        );
    }
}
