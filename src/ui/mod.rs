//! egui screens and widgets for the board and its settings.
pub mod bottom_bar;
pub mod drawing_surface;
pub mod settings_panel;
pub mod toggle;
