use super::config::LaunchConfig;
use super::navigation::{Navigator, Route};
use super::state::{AppState, BackgroundMode};
use crate::{styling, ui};
use eframe::egui;

/// Top-level egui application. Owns the shared state and lends it to each screen.
pub struct WhiteboardApp {
    pub(crate) state: AppState,
    pub(crate) nav: Navigator,
    pub(crate) last_system_dark: Option<bool>,
}

impl WhiteboardApp {
    /// Set up styling and the theme preference, then start on the drawing screen.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &LaunchConfig) -> Self {
        styling::apply_global_style(&cc.egui_ctx);
        cc.egui_ctx.set_theme(config.theme.preference());
        Self::with_state(AppState::new())
    }

    /// Build the app around existing state without touching an egui context.
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            nav: Navigator::new(Route::Draw),
            last_system_dark: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_route(&self) -> Route {
        self.nav.current()
    }

    /// Switch screens. Leaving the drawing screen mid-drag drops the open stroke.
    pub fn navigate(&mut self, route: Route) -> bool {
        let moved = self.nav.navigate(route);
        self.drop_stroke_off_board();
        moved
    }

    /// Go back one screen, with the same stroke handling as [`Self::navigate`].
    pub fn back(&mut self) -> bool {
        let moved = self.nav.back();
        self.drop_stroke_off_board();
        moved
    }

    fn drop_stroke_off_board(&mut self) {
        if self.nav.current() != Route::Draw {
            self.state.board.cancel_stroke();
        }
    }

    /// Note the platform theme for this frame, logging when it flips.
    fn observe_system_theme(&mut self, ctx: &egui::Context) -> bool {
        let system_dark = ctx.theme() == egui::Theme::Dark;
        if self.last_system_dark != Some(system_dark) {
            log::debug!(
                "Platform theme is {}",
                if system_dark { "dark" } else { "light" }
            );
            self.last_system_dark = Some(system_dark);
        }
        system_dark
    }
}

impl eframe::App for WhiteboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let system_dark = self.observe_system_theme(ctx);
        let mode = BackgroundMode::effective(system_dark, &self.state.preferences);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.back();
        }

        if let Some(route) = ui::bottom_bar::bottom_bar(ctx, self.nav.current()) {
            self.navigate(route);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| match self.nav.current() {
                Route::Draw => {
                    ui::drawing_surface::drawing_surface(ui, &mut self.state.board, mode);
                }
                Route::Settings => {
                    let state = &mut self.state;
                    let prefs = state.preferences;
                    egui::Frame::central_panel(ui.style()).show(ui, |ui| {
                        ui::settings_panel::settings_panel(ui, system_dark, &prefs, |white| {
                            state.set_white_background(white)
                        });
                    });
                }
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!(
            "Closing board with {} committed strokes",
            self.state.board.strokes().len()
        );
    }
}
