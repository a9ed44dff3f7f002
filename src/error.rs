use crate::outcome::GameOutcome;
use crate::r#move::Move;

/// Errors raised while reading a board descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 8 columns, found {found}")]
    ColumnCount { found: usize },

    #[error("column {column} spans {rows} rows, expected 8")]
    RowCount { column: usize, rows: usize },

    #[error("invalid character {found:?} in column {column}")]
    InvalidChar { column: usize, found: char },
}

/// Errors returned by move generation and application.
///
/// `GameOver` is a terminal signal rather than a failure: it carries the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(Move),

    #[error("game is over - {0}")]
    GameOver(GameOutcome),
}
