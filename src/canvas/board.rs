use super::gesture::Gesture;
use super::stroke::Stroke;
use crate::utils::vector::Vec2;

/// Committed strokes plus the one being drawn right now.
///
/// Committed strokes are append-only: nothing removes or edits them, and their
/// order is the order they are painted in.
#[derive(Debug, Default)]
pub struct Board {
    strokes: Vec<Stroke>,
    in_progress: Option<Stroke>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `pos`. A stroke that was still open is dropped
    /// without being committed.
    pub fn begin_stroke(&mut self, pos: Vec2) {
        if self.in_progress.is_some() {
            log::debug!("Discarding unfinished stroke on new drag start");
        }
        self.in_progress = Some(Stroke::begin(pos));
    }

    /// Extend the open stroke to `pos`. Returns `false` when no stroke is open.
    pub fn extend_stroke(&mut self, pos: Vec2) -> bool {
        match self.in_progress.take() {
            Some(stroke) => {
                self.in_progress = Some(stroke.line_to(pos));
                true
            }
            None => false,
        }
    }

    /// Commit the open stroke. Returns `false` when no stroke is open.
    pub fn end_stroke(&mut self) -> bool {
        match self.in_progress.take() {
            Some(stroke) => {
                log::debug!(
                    "Committed stroke #{} with {} points",
                    self.strokes.len() + 1,
                    stroke.points().len()
                );
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Drop the open stroke without committing it. Returns `false` when none was open.
    pub fn cancel_stroke(&mut self) -> bool {
        let cancelled = self.in_progress.take().is_some();
        if cancelled {
            log::debug!("Cancelled unfinished stroke");
        }
        cancelled
    }

    /// Feed one gesture event to the board. Returns whether anything changed.
    pub fn apply(&mut self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::Start(pos) => {
                self.begin_stroke(pos);
                true
            }
            Gesture::Move(pos) => self.extend_stroke(pos),
            Gesture::End => self.end_stroke(),
        }
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn in_progress(&self) -> Option<&Stroke> {
        self.in_progress.as_ref()
    }

    /// Everything to paint this frame, bottom to top.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().chain(self.in_progress.iter())
    }
}
