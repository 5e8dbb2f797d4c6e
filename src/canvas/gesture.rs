use crate::utils::vector::Vec2;

/// One step of a drag sequence, in board coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Gesture {
    Start(Vec2),
    Move(Vec2),
    End,
}

/// What the pointer did to the drawing surface during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragFrame {
    /// Where the press that began the drag landed, set on the frame the drag starts.
    pub started_at: Option<Vec2>,
    /// Pointer position if it moved while dragging this frame.
    pub moved_to: Option<Vec2>,
    pub released: bool,
}

impl DragFrame {
    /// Gestures for this frame, in the order the board must see them.
    ///
    /// A quick flick can start, move and release within a single frame, so all
    /// three may come out together.
    pub fn gestures(&self) -> Vec<Gesture> {
        let mut out = Vec::with_capacity(3);
        if let Some(origin) = self.started_at {
            out.push(Gesture::Start(origin));
        }
        if let Some(pos) = self.moved_to {
            if self.started_at != Some(pos) {
                out.push(Gesture::Move(pos));
            }
        }
        if self.released {
            out.push(Gesture::End);
        }
        out
    }
}
