/// Token color. The discriminants are the values used on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Yellow = 1,
    Red = 2,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::Yellow => Color::Red,
            Color::Red => Color::Yellow,
        }
    }

    /// Marker used in board descriptors.
    pub fn to_char(&self) -> char {
        match self {
            Color::Yellow => 'y',
            Color::Red => 'r',
        }
    }

    pub fn from_int(i: u8) -> Option<Color> {
        match i {
            1 => Some(Color::Yellow),
            2 => Some(Color::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let color_str = match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
        };
        write!(f, "{}", color_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Yellow.opposite(), Color::Red);
        assert_eq!(Color::Red.opposite(), Color::Yellow);
    }

    #[test]
    fn test_conversions() {
        for color in [Color::Yellow, Color::Red] {
            assert_eq!(Color::from_int(color as u8), Some(color));
        }
        assert_eq!(Color::Yellow.to_char(), 'y');
        assert_eq!(Color::Red.to_char(), 'r');
        assert_eq!(Color::from_int(0), None);
    }
}
