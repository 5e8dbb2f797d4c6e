use eframe::egui;

/// Install tuned dark and light visuals plus roomy touch-friendly spacing.
///
/// Both themes are set up front; egui switches between them as the platform theme changes.
pub fn apply_global_style(ctx: &egui::Context) {
    let mut dark = egui::Visuals::dark();
    dark.panel_fill = egui::Color32::from_rgb(20, 20, 24);
    dark.window_fill = egui::Color32::from_rgb(26, 26, 32);
    dark.widgets.inactive.bg_fill = egui::Color32::from_rgb(58, 58, 68);
    dark.widgets.hovered.bg_fill = egui::Color32::from_rgb(74, 78, 96);
    dark.widgets.active.bg_fill = egui::Color32::from_rgb(120, 150, 220);
    dark.selection.bg_fill = egui::Color32::from_rgb(64, 88, 140);
    dark.selection.stroke.color = egui::Color32::from_rgb(230, 236, 255);

    let mut light = egui::Visuals::light();
    light.panel_fill = egui::Color32::from_rgb(246, 246, 250);
    light.window_fill = egui::Color32::from_rgb(252, 252, 255);
    light.widgets.inactive.bg_fill = egui::Color32::from_rgb(214, 214, 222);
    light.widgets.hovered.bg_fill = egui::Color32::from_rgb(196, 204, 226);
    light.widgets.active.bg_fill = egui::Color32::from_rgb(70, 100, 180);
    light.selection.bg_fill = egui::Color32::from_rgb(206, 218, 250);
    light.selection.stroke.color = egui::Color32::from_rgb(20, 30, 60);

    for visuals in [&mut dark, &mut light] {
        visuals.window_rounding = egui::Rounding::same(12.0);
        visuals.widgets.inactive.rounding = egui::Rounding::same(10.0);
        visuals.widgets.hovered.rounding = egui::Rounding::same(10.0);
        visuals.widgets.active.rounding = egui::Rounding::same(10.0);
    }

    ctx.set_visuals_of(egui::Theme::Dark, dark);
    ctx.set_visuals_of(egui::Theme::Light, light);

    ctx.all_styles_mut(|style| {
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.interact_size.y = 28.0;
    });
}
