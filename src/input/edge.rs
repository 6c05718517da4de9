use super::Direction;

/// Tracks the previous joystick direction and reports rising edges.
///
/// An edge is a move from Center into any other direction. Holding a
/// direction, or sliding from one deflection to another without passing
/// through Center, never produces an edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: Direction,
}

impl EdgeDetector {
    /// Create a detector that assumes the stick starts at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample. Returns the new direction if this sample is an edge.
    pub fn update(&mut self, direction: Direction) -> Option<Direction> {
        let edge = (self.last.is_center() && !direction.is_center()).then_some(direction);
        self.last = direction;
        edge
    }
}
