use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    YellowWin,
    RedWin,
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::YellowWin => Some(Color::Yellow),
            GameOutcome::RedWin => Some(Color::Red),
            GameOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::YellowWin => write!(f, "yellow wins"),
            GameOutcome::RedWin => write!(f, "red wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// State of a position, derived from the board on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Over(GameOutcome),
}

impl GameStatus {
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over(outcome) => Some(*outcome),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}
