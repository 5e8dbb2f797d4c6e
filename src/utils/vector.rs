use eframe::egui;

/// Lightweight 2D vector for board-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Screen position of this board point when the board's top-left sits at `origin`.
    pub fn to_screen(self, origin: egui::Pos2) -> egui::Pos2 {
        egui::pos2(origin.x + self.x, origin.y + self.y)
    }

    /// Board point under a screen position, relative to the board's top-left `origin`.
    pub fn from_screen(pos: egui::Pos2, origin: egui::Pos2) -> Self {
        Self {
            x: pos.x - origin.x,
            y: pos.y - origin.y,
        }
    }
}
