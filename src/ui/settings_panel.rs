use crate::app::state::{Preferences, SwitchState};
use crate::ui::toggle::toggle_ui;
use eframe::egui;

/// Settings screen: the white-background switch and a caption explaining it.
///
/// `on_toggle` receives the new value whenever the user flips the switch.
pub fn settings_panel(
    ui: &mut egui::Ui,
    system_dark: bool,
    prefs: &Preferences,
    on_toggle: impl FnOnce(bool),
) {
    let switch = SwitchState::white_background(system_dark, prefs);

    egui::ScrollArea::vertical()
        .id_salt("settings_scroll")
        .show(ui, |ui| {
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("White background").strong().size(16.0));
                    let caption = if system_dark {
                        "Use a white board even while the device is in dark mode."
                    } else {
                        "The device is in light mode, so the board is always white."
                    };
                    ui.label(egui::RichText::new(caption).small().weak());
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut checked = switch.checked;
                    let response = ui
                        .add_enabled_ui(switch.enabled, |ui| toggle_ui(ui, &mut checked))
                        .inner;
                    if response.changed() {
                        on_toggle(checked);
                    }
                });
            });
        });
}
