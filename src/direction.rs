/// Direction gravity pulls toward, relative to the board's reference orientation.
///
/// The board is always stored so that gravity points at `Up`; a tilt turns the
/// board until the requested side faces that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Number of 90-degree left turns that bring this side under gravity.
    pub fn left_turns(&self) -> usize {
        *self as usize
    }

    pub fn from_int(i: u8) -> Option<Direction> {
        Direction::ALL.get(i as usize).copied()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Left => "LEFT",
            Direction::Down => "DOWN",
            Direction::Right => "RIGHT",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_turns() {
        assert_eq!(Direction::Up.left_turns(), 0);
        assert_eq!(Direction::Left.left_turns(), 1);
        assert_eq!(Direction::Down.left_turns(), 2);
        assert_eq!(Direction::Right.left_turns(), 3);
    }

    #[test]
    fn test_from_int() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_int(direction as u8), Some(direction));
        }
        assert_eq!(Direction::from_int(4), None);
    }
}
