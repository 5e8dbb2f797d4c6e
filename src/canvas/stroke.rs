use crate::utils::vector::Vec2;

/// Rendering width shared by every stroke on the board.
pub const STROKE_WIDTH: f32 = 10.0;

/// A freehand line: the points of one drag, in the order they were captured.
///
/// Strokes are values. Extending one consumes it and hands back the longer
/// stroke, so the in-progress stroke is replaced on every move rather than
/// edited behind the board's back.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Vec2>,
    width: f32,
}

impl Stroke {
    /// Start a path at `origin`.
    pub fn begin(origin: Vec2) -> Self {
        Self {
            points: vec![origin],
            width: STROKE_WIDTH,
        }
    }

    /// Return this stroke with a segment appended that ends at `point`.
    #[must_use]
    pub fn line_to(mut self, point: Vec2) -> Self {
        self.points.push(point);
        self
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Number of line segments in the path. A stroke that never moved has none.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_origin_and_fixed_width() {
        let stroke = Stroke::begin(Vec2::new(1.0, 2.0));
        assert_eq!(stroke.points(), &[Vec2::new(1.0, 2.0)]);
        assert_eq!(stroke.width(), STROKE_WIDTH);
        assert_eq!(stroke.segment_count(), 0);
    }

    #[test]
    fn line_to_appends_in_order() {
        let stroke = Stroke::begin(Vec2::new(10.0, 10.0))
            .line_to(Vec2::new(20.0, 10.0))
            .line_to(Vec2::new(20.0, 20.0));
        assert_eq!(
            stroke.points(),
            &[
                Vec2::new(10.0, 10.0),
                Vec2::new(20.0, 10.0),
                Vec2::new(20.0, 20.0),
            ]
        );
        assert_eq!(stroke.segment_count(), 2);
    }
}
