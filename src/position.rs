use crate::bitboard::{COLUMNS, ROWS};

/// A cell in the board's own frame: row 0 is where gravity pulls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub fn new(col: u8, row: u8) -> Self {
        Position { col, row }
    }

    pub fn is_valid(&self) -> bool {
        (self.col as usize) < COLUMNS && (self.row as usize) < ROWS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Position::new(7, 7).is_valid());
        assert!(!Position::new(8, 0).is_valid());
        assert!(!Position::new(0, 8).is_valid());
    }
}
