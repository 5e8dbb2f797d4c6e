use crate::canvas::{Board, DragFrame};
use crate::utils::vector::Vec2;
use eframe::egui;

/// Read this frame's drag on the drawing surface in board coordinates.
pub fn drag_frame(
    ctx: &egui::Context,
    response: &egui::Response,
    origin: egui::Pos2,
) -> DragFrame {
    let to_board = |pos: egui::Pos2| Vec2::from_screen(pos, origin);

    let started_at = if response.drag_started() {
        ctx.input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos())
            .map(to_board)
    } else {
        None
    };

    let moved = response.drag_started() || response.drag_delta() != egui::Vec2::ZERO;
    let moved_to = if response.dragged() && moved {
        response.interact_pointer_pos().map(to_board)
    } else {
        None
    };

    DragFrame {
        started_at,
        moved_to,
        released: response.drag_stopped(),
    }
}

/// Apply the frame's gestures to the board. Returns whether the board changed.
pub fn handle_input(
    board: &mut Board,
    ctx: &egui::Context,
    response: &egui::Response,
    origin: egui::Pos2,
) -> bool {
    let mut changed = false;
    for gesture in drag_frame(ctx, response, origin).gestures() {
        changed |= board.apply(gesture);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs the drawing surface's input path against a headless egui context.
    struct Surface {
        ctx: egui::Context,
        board: Board,
        time: f64,
    }

    impl Surface {
        fn new() -> Self {
            let mut surface = Self {
                ctx: egui::Context::default(),
                board: Board::new(),
                time: 0.0,
            };
            // lay the surface out once so the first press lands on it
            surface.frame(Vec::new());
            surface
        }

        fn frame(&mut self, events: Vec<egui::Event>) -> bool {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(400.0, 400.0),
                )),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            self.time += 1.0 / 60.0;

            let board = &mut self.board;
            let mut changed = false;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default()
                    .frame(egui::Frame::none())
                    .show(ctx, |ui| {
                        let (response, _painter) =
                            ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                        changed |= handle_input(board, ctx, &response, response.rect.min);
                    });
            });
            changed
        }

        fn press(&mut self, x: f32, y: f32) -> bool {
            let pos = egui::pos2(x, y);
            self.frame(vec![egui::Event::PointerMoved(pos), button(pos, true)])
        }

        fn move_to(&mut self, x: f32, y: f32) -> bool {
            self.frame(vec![egui::Event::PointerMoved(egui::pos2(x, y))])
        }

        fn release(&mut self, x: f32, y: f32) -> bool {
            self.frame(vec![button(egui::pos2(x, y), false)])
        }
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn pointer_drag_commits_pressed_and_moved_points() {
        let mut surface = Surface::new();
        surface.press(10.0, 10.0);
        surface.move_to(20.0, 10.0);
        surface.move_to(20.0, 20.0);
        surface.move_to(30.0, 30.0);
        assert!(surface.release(30.0, 30.0));

        assert!(surface.board.in_progress().is_none());
        assert_eq!(surface.board.strokes().len(), 1);
        assert_eq!(
            surface.board.strokes()[0].points(),
            &[
                Vec2::new(10.0, 10.0),
                Vec2::new(20.0, 10.0),
                Vec2::new(20.0, 20.0),
                Vec2::new(30.0, 30.0),
            ]
        );
    }

    #[test]
    fn holding_still_adds_no_points() {
        let mut surface = Surface::new();
        surface.press(10.0, 10.0);
        surface.move_to(40.0, 10.0);
        let held = surface
            .board
            .in_progress()
            .map(|s| s.points().len())
            .expect("drag should be open");

        assert!(!surface.frame(Vec::new()));
        assert!(!surface.frame(Vec::new()));
        assert_eq!(surface.board.in_progress().map(|s| s.points().len()), Some(held));

        surface.release(40.0, 10.0);
        assert_eq!(surface.board.strokes()[0].points().len(), held);
    }

    #[test]
    fn two_drags_commit_two_unconnected_strokes() {
        let mut surface = Surface::new();
        surface.press(10.0, 10.0);
        surface.move_to(50.0, 10.0);
        surface.release(50.0, 10.0);
        surface.frame(Vec::new());
        surface.press(100.0, 100.0);
        surface.move_to(100.0, 150.0);
        surface.release(100.0, 150.0);

        let strokes = surface.board.strokes();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].points()[0], Vec2::new(10.0, 10.0));
        assert_eq!(strokes[1].points()[0], Vec2::new(100.0, 100.0));
    }

    #[test]
    fn release_with_nothing_open_changes_nothing() {
        let mut surface = Surface::new();
        assert!(!surface.release(25.0, 25.0));
        assert!(!surface.move_to(60.0, 60.0));
        assert!(surface.board.strokes().is_empty());
        assert!(surface.board.in_progress().is_none());
    }
}
