pub mod bitboard;
pub mod board;
pub mod color;
pub mod direction;
pub mod error;
pub mod game;
pub mod r#move;
pub mod outcome;
pub mod position;
pub mod rotation;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn spooky_g4(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use color::Color;
    use direction::Direction;
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGame>()?;
    m.add_class::<PyMove>()?;
    m.add_class::<PyGameOutcome>()?;
    m.add("YELLOW", Color::Yellow as u8)?;
    m.add("RED", Color::Red as u8)?;
    m.add("UP", Direction::Up as u8)?;
    m.add("LEFT", Direction::Left as u8)?;
    m.add("DOWN", Direction::Down as u8)?;
    m.add("RIGHT", Direction::Right as u8)?;
    m.add("STARTING_POSITION", board::STARTING_POSITION)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::Board;
    use crate::color::Color;
    use crate::direction::Direction;
    use crate::game::Game;
    use crate::outcome::GameOutcome;
    use crate::position::Position;
    use crate::r#move::Move;

    fn color_from_int(color: u8) -> PyResult<Color> {
        Color::from_int(color).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid color: {}", color))
        })
    }

    fn value_error(err: impl std::fmt::Display) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        #[pyo3(signature = (descriptor = board::STARTING_POSITION))]
        pub fn new(descriptor: &str) -> PyResult<Self> {
            let board = descriptor.parse().map_err(value_error)?;
            Ok(PyBoard { board })
        }

        pub fn get_piece(&self, col: usize, row: usize) -> Option<u8> {
            let pos = Position::new(col as u8, row as u8);
            self.board.get_piece(&pos).map(|c| c as u8)
        }

        pub fn heights(&self) -> Vec<usize> {
            self.board.heights().to_vec()
        }

        pub fn count(&self) -> usize {
            self.board.count()
        }

        pub fn has_yellow_connect4(&self) -> bool {
            self.board.has_yellow_connect4()
        }

        pub fn has_red_connect4(&self) -> bool {
            self.board.has_red_connect4()
        }

        pub fn rotate_left(&self, times: usize) -> PyBoard {
            PyBoard {
                board: self.board.rotate_left(times),
            }
        }

        pub fn apply_gravity(&self) -> PyBoard {
            PyBoard {
                board: self.board.apply_gravity(),
            }
        }

        pub fn add_token(&self, column: usize, color: u8) -> PyResult<PyBoard> {
            Ok(PyBoard {
                board: self.board.add_token(column, color_from_int(color)?),
            })
        }

        /// Display grid indexed `[col][row]` with row 0 on top; 0 marks an empty cell.
        pub fn to_array(&self) -> Vec<Vec<u8>> {
            self.board
                .to_array()
                .iter()
                .map(|col| col.iter().map(|cell| cell.map_or(0, |c| c as u8)).collect())
                .collect()
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Board('{}')", self.board)
        }

        pub fn __eq__(&self, other: &PyBoard) -> bool {
            self.board == other.board
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        #[pyo3(signature = (descriptor = board::STARTING_POSITION, color = Color::Yellow as u8))]
        pub fn new(descriptor: &str, color: u8) -> PyResult<Self> {
            let game = Game::from_descriptor(descriptor, color_from_int(color)?)
                .map_err(value_error)?;
            Ok(PyGame { game })
        }

        pub fn turn(&self) -> u8 {
            self.game.turn() as u8
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn outcome(&self) -> Option<PyGameOutcome> {
            self.game.outcome().map(|outcome| PyGameOutcome { outcome })
        }

        /// Legal moves. Raises `ValueError` naming the result once the game is over.
        pub fn legal_moves(&self) -> PyResult<Vec<PyMove>> {
            let moves = self.game.generate().map_err(value_error)?;
            Ok(moves.into_iter().map(|move_| PyMove { move_ }).collect())
        }

        pub fn is_legal_move(&self, move_: &PyMove) -> bool {
            self.game.is_legal_move(&move_.move_)
        }

        /// Plays `move_` in place and returns the outcome if it ended the game.
        /// Raises `ValueError` for invalid moves or a finished game.
        pub fn make_move(&mut self, move_: &PyMove) -> PyResult<Option<PyGameOutcome>> {
            let outcome = self.game.make_move(&move_.move_).map_err(value_error)?;
            Ok(outcome.map(|outcome| PyGameOutcome { outcome }))
        }

        pub fn board(&self) -> PyBoard {
            PyBoard {
                board: *self.game.board(),
            }
        }

        pub fn clone(&self) -> PyGame {
            PyGame { game: self.game }
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.game.hash(&mut hasher);
            hasher.finish()
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(board='{}', turn={}, over={})",
                self.game.board(),
                self.game.turn(),
                self.game.is_over()
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[staticmethod]
        pub fn token(color: u8, column: u8) -> PyResult<Self> {
            Ok(PyMove {
                move_: Move::token(color_from_int(color)?, column),
            })
        }

        #[staticmethod]
        pub fn tilt(direction: u8) -> PyResult<Self> {
            let direction = Direction::from_int(direction).ok_or_else(|| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Invalid direction: {}",
                    direction
                ))
            })?;
            Ok(PyMove {
                move_: Move::tilt(direction),
            })
        }

        pub fn is_tilt(&self) -> bool {
            self.move_.is_tilt()
        }

        pub fn column(&self) -> Option<u8> {
            self.move_.column()
        }

        pub fn color(&self) -> Option<u8> {
            self.move_.color().map(|c| c as u8)
        }

        pub fn direction(&self) -> Option<u8> {
            self.move_.direction().map(|d| d as u8)
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            match &self.move_ {
                Move::Token { color, column } => {
                    format!("Move.token({}, {})", *color as u8, column)
                }
                Move::Tilt { direction } => format!("Move.tilt({})", *direction as u8),
            }
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }

    #[pyclass(name = "GameOutcome")]
    #[derive(Clone, Copy, Debug)]
    pub struct PyGameOutcome {
        outcome: GameOutcome,
    }

    #[pymethods]
    impl PyGameOutcome {
        pub fn winner(&self) -> Option<u8> {
            self.outcome.winner().map(|color| color as u8)
        }

        pub fn is_draw(&self) -> bool {
            self.outcome.is_draw()
        }

        pub fn __str__(&self) -> String {
            self.outcome.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("GameOutcome({})", self.outcome)
        }

        pub fn __eq__(&self, other: &PyGameOutcome) -> bool {
            self.outcome == other.outcome
        }
    }
}
