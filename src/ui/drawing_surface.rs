use crate::app::input_handler::handle_input;
use crate::app::render_helper::draw_board;
use crate::app::state::BackgroundMode;
use crate::canvas::Board;
use eframe::egui;

/// Drawing screen: fills the available space, turns drags into strokes and paints the board.
pub fn drawing_surface(ui: &mut egui::Ui, board: &mut Board, mode: BackgroundMode) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
    let rect = response.rect;

    if handle_input(board, ui.ctx(), &response, rect.min) {
        ui.ctx().request_repaint();
    }

    draw_board(&painter, rect, board, mode.background(), mode.ink());
}
