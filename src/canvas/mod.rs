//! Board model: strokes, the open stroke, and the drag gestures that build them.
pub mod board;
pub mod gesture;
pub mod stroke;

pub use board::Board;
pub use gesture::{DragFrame, Gesture};
pub use stroke::{STROKE_WIDTH, Stroke};
