use crate::canvas::{Board, Stroke};
use crate::utils::profiler::ScopeTimer;
use eframe::egui::{self, Color32, Shape};

/// Shapes for one stroke with round caps and round joins.
///
/// egui lines end square, so every vertex also gets a filled disc of the stroke's
/// radius. A stroke that never moved has no segments and paints nothing.
pub fn stroke_shapes(stroke: &Stroke, origin: egui::Pos2, color: Color32) -> Vec<Shape> {
    if stroke.segment_count() == 0 {
        return Vec::new();
    }

    let points: Vec<egui::Pos2> = stroke
        .points()
        .iter()
        .map(|p| p.to_screen(origin))
        .collect();
    let radius = stroke.width() * 0.5;

    let mut shapes = Vec::with_capacity(points.len() + 1);
    shapes.push(Shape::line(
        points.clone(),
        egui::Stroke::new(stroke.width(), color),
    ));
    shapes.extend(
        points
            .into_iter()
            .map(|center| Shape::circle_filled(center, radius, color)),
    );
    shapes
}

/// Paint the board background and every stroke, committed ones first.
pub fn draw_board(
    painter: &egui::Painter,
    rect: egui::Rect,
    board: &Board,
    background: Color32,
    ink: Color32,
) {
    let _timer = ScopeTimer::new("render_board");
    painter.rect_filled(rect, 0.0, background);
    for stroke in board.visible_strokes() {
        painter.extend(stroke_shapes(stroke, rect.min, ink));
    }
}
