use crate::state::Position;

/// Fixed width/height of the board, set when the game is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Clamps a position onto the board.
    pub fn clamp(&self, position: Position) -> Position {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_positions_onto_board() {
        let dims = MapDimensions::new(90, 80);
        assert_eq!(dims.clamp(Position::new(-4, 3)), Position::new(0, 3));
        assert_eq!(dims.clamp(Position::new(95, 85)), Position::new(89, 79));
        assert!(dims.contains(dims.clamp(Position::new(1000, -1000))));
    }
}
