use crate::app::navigation::Route;
use eframe::egui;

/// Bottom navigation bar with one item per route. The current route is highlighted.
///
/// Returns the route the user tapped this frame, if any.
pub fn bottom_bar(ctx: &egui::Context, current: Route) -> Option<Route> {
    let mut tapped = None;
    egui::TopBottomPanel::bottom("bottom_nav")
        .exact_height(64.0)
        .show(ctx, |ui| {
            let item_width = ui.available_width() / Route::ALL.len() as f32;
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for route in Route::ALL {
                    let text = egui::RichText::new(format!("{}\n{}", route.icon(), route.label()))
                        .size(14.0);
                    let item = egui::SelectableLabel::new(current == route, text);
                    let response = ui.add_sized([item_width, ui.available_height()], item);
                    if response.clicked() {
                        tapped = Some(route);
                    }
                }
            });
        });
    tapped
}
