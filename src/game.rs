use crate::bitboard::{COLUMNS, ROWS};
use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::error::{GameError, ParseError};
use crate::outcome::{GameOutcome, GameStatus};
use crate::r#move::Move;

/// Tilts offered by `generate`. Gravity is always `Up` in the stored frame,
/// so tilting toward it again is never legal.
const TILTS: [Direction; 3] = [Direction::Left, Direction::Down, Direction::Right];

/// A board plus the color to move. Terminal states are derived from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    mover: Color,
}

impl Game {
    /// Empty board, yellow to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Yellow)
    }

    pub fn from_board(board: Board, mover: Color) -> Self {
        Game { board, mover }
    }

    pub fn from_descriptor(descriptor: &str, mover: Color) -> Result<Self, ParseError> {
        Ok(Self::from_board(descriptor.parse()?, mover))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color whose turn it is.
    pub fn turn(&self) -> Color {
        self.mover
    }

    /// Current state of the position.
    ///
    /// Both colors holding a four-in-a-row (only reachable through a tilt) is
    /// a draw, as is a full board.
    pub fn status(&self) -> GameStatus {
        let yellow = self.board.has_yellow_connect4();
        let red = self.board.has_red_connect4();
        let outcome = match (yellow, red) {
            (true, true) => GameOutcome::Draw,
            (true, false) => GameOutcome::YellowWin,
            (false, true) => GameOutcome::RedWin,
            (false, false) if self.board.is_full() => GameOutcome::Draw,
            (false, false) => return GameStatus::InProgress,
        };
        GameStatus::Over(outcome)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.status().outcome()
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// `Err(GameOver)` once the position is terminal.
    pub fn validate(&self) -> Result<(), GameError> {
        match self.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::Over(outcome) => Err(GameError::GameOver(outcome)),
        }
    }

    /// Legal moves: the three tilts, then one token per column with room.
    #[hotpath::measure]
    pub fn generate(&self) -> Result<Vec<Move>, GameError> {
        self.validate()?;

        let heights = self.board.heights();
        let mut moves = Vec::with_capacity(TILTS.len() + COLUMNS);
        moves.extend(TILTS.iter().map(|&direction| Move::tilt(direction)));
        moves.extend(
            (0..COLUMNS)
                .filter(|&column| heights[column] < ROWS)
                .map(|column| Move::token(self.mover, column as u8)),
        );
        Ok(moves)
    }

    pub fn is_legal_move(&self, move_: &Move) -> bool {
        self.validate().is_ok() && self.play(move_).is_some()
    }

    /// Board after `move_`, or `None` if the move is malformed for this position.
    fn play(&self, move_: &Move) -> Option<Board> {
        match *move_ {
            Move::Tilt { direction } => match direction.left_turns() {
                0 => None,
                turns => Some(self.board.rotate_left(turns).apply_gravity()),
            },
            // Tokens are always played in the mover's color.
            Move::Token { column, .. } => {
                let column = column as usize;
                if column >= COLUMNS || self.board.heights()[column] >= ROWS {
                    None
                } else {
                    Some(self.board.add_token(column, self.mover))
                }
            }
        }
    }

    /// Plays `move_` and returns the resulting game with its outcome, if the
    /// move ended it. `self` is never modified.
    #[hotpath::measure]
    pub fn apply(&self, move_: &Move) -> Result<(Game, Option<GameOutcome>), GameError> {
        self.validate()?;

        let Some(board) = self.play(move_) else {
            tracing::debug!(%move_, mover = %self.mover, "rejected invalid move");
            return Err(GameError::InvalidMove(*move_));
        };

        let next = Game {
            board,
            mover: self.mover.opposite(),
        };
        let outcome = next.outcome();
        if let Some(outcome) = outcome {
            tracing::debug!(%move_, %outcome, board = %next.board, "game over");
        }
        Ok((next, outcome))
    }

    /// In-place form of [`Game::apply`]; on error the game is unchanged.
    pub fn make_move(&mut self, move_: &Move) -> Result<Option<GameOutcome>, GameError> {
        let (next, outcome) = self.apply(move_)?;
        *self = next;
        Ok(outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} to move)", self.board, self.mover)
    }
}
