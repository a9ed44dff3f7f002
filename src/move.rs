use crate::color::Color;
use crate::direction::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Drop a token on top of `column`.
    Token { color: Color, column: u8 },
    /// Turn the board so gravity pulls toward `direction`.
    Tilt { direction: Direction },
}

impl Move {
    pub fn token(color: Color, column: u8) -> Self {
        Move::Token { color, column }
    }

    pub fn tilt(direction: Direction) -> Self {
        Move::Tilt { direction }
    }

    pub fn is_tilt(&self) -> bool {
        matches!(self, Move::Tilt { .. })
    }

    pub fn column(&self) -> Option<u8> {
        match self {
            Move::Token { column, .. } => Some(*column),
            Move::Tilt { .. } => None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Move::Token { color, .. } => Some(*color),
            Move::Tilt { .. } => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Move::Token { .. } => None,
            Move::Tilt { direction } => Some(*direction),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Token { color, column } => write!(f, "Token({}, {})", color, column),
            Move::Tilt { direction } => write!(f, "Tilt({})", direction),
        }
    }
}
