use std::fmt;
use std::str::FromStr;

use crate::bitboard::{Bitboard, CELLS, COLUMNS, ROWS};
use crate::color::Color;
use crate::error::ParseError;
use crate::position::Position;

/// Descriptor of the empty board.
pub const STARTING_POSITION: &str = "8|8|8|8|8|8|8|8";

/// Two color planes over the 8×8 grid. No cell is ever set in both.
///
/// Every transform returns a new board; gravity always pulls toward row 0 of
/// the stored frame and tilts are expressed by rotating the planes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    yellow: Bitboard,
    red: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Board {
            yellow: Bitboard::empty(),
            red: Bitboard::empty(),
        }
    }

    #[inline]
    pub fn yellow_stones(&self) -> Bitboard {
        self.yellow
    }

    #[inline]
    pub fn red_stones(&self) -> Bitboard {
        self.red
    }

    #[inline]
    pub fn stones_for(&self, color: Color) -> Bitboard {
        match color {
            Color::Yellow => self.yellow,
            Color::Red => self.red,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.yellow | self.red
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Color> {
        if !pos.is_valid() {
            return None;
        }
        let (col, row) = (pos.col as usize, pos.row as usize);
        if self.red.get(col, row) {
            Some(Color::Red)
        } else if self.yellow.get(col, row) {
            Some(Color::Yellow)
        } else {
            None
        }
    }

    /// Number of occupied cells in each column.
    pub fn heights(&self) -> [usize; COLUMNS] {
        let occupied = self.occupied();
        std::array::from_fn(|col| (occupied & Bitboard::column_mask(col)).count() as usize)
    }

    /// Total number of tokens on the board.
    pub fn count(&self) -> usize {
        (self.yellow.count() + self.red.count()) as usize
    }

    pub fn is_full(&self) -> bool {
        self.count() == CELLS
    }

    pub fn has_yellow_connect4(&self) -> bool {
        self.yellow.has_connect4()
    }

    pub fn has_red_connect4(&self) -> bool {
        self.red.has_connect4()
    }

    pub fn has_connect4(&self, color: Color) -> bool {
        self.stones_for(color).has_connect4()
    }

    /// Applies `times` left rotations. Tokens stay where they land; follow with
    /// [`Board::apply_gravity`] to let them fall.
    #[hotpath::measure]
    pub fn rotate_left(&self, times: usize) -> Board {
        let mut board = *self;
        for _ in 0..times % 4 {
            board.yellow = board.yellow.rotate_left();
            board.red = board.red.rotate_left();
        }
        board
    }

    /// Lets every token fall toward row 0 until nothing has a gap below it.
    ///
    /// Each pass moves every unsupported token down one row; eight passes
    /// settle any column.
    #[hotpath::measure]
    pub fn apply_gravity(&self) -> Board {
        let mut board = *self;
        for _ in 0..ROWS {
            let gaps = !(board.yellow | board.red);
            let yellow_drop = gaps & board.yellow.south();
            board.yellow = (board.yellow ^ yellow_drop.north()) | yellow_drop;
            let red_drop = gaps & board.red.south();
            board.red = (board.red ^ red_drop.north()) | red_drop;
        }
        board
    }

    /// Puts a `color` token on top of `column`. A full or out-of-range column
    /// leaves the board unchanged; legality is the caller's concern.
    pub fn add_token(&self, column: usize, color: Color) -> Board {
        if column >= COLUMNS {
            return *self;
        }
        let height = self.heights()[column];
        if height >= ROWS {
            return *self;
        }
        let mut board = *self;
        match color {
            Color::Yellow => board.yellow |= Bitboard::cell(column, height),
            Color::Red => board.red |= Bitboard::cell(column, height),
        }
        board
    }

    /// The grid in display orientation: `array[col][7 - row]` holds cell (`col`, `row`).
    pub fn to_array(&self) -> [[Option<Color>; ROWS]; COLUMNS] {
        let mut array = [[None; ROWS]; COLUMNS];
        for (col, row) in self.yellow.iter_ones() {
            array[col][ROWS - 1 - row] = Some(Color::Yellow);
        }
        for (col, row) in self.red.iter_ones() {
            array[col][ROWS - 1 - row] = Some(Color::Red);
        }
        array
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Reads a `col0|col1|...|col7` descriptor where `y`/`r` are tokens and
    /// digits are runs of empty rows. Each plane is read with the other
    /// color's marker counted as an empty row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, r) = (Color::Yellow.to_char(), Color::Red.to_char());
        let yellow = Bitboard::parse(s, y, Some(r)).inspect_err(|err| {
            tracing::trace!(descriptor = s, %err, "rejected board descriptor");
        })?;
        let red = Bitboard::parse(s, r, Some(y))?;
        Ok(Board { yellow, red })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..COLUMNS {
            if col > 0 {
                write!(f, "|")?;
            }
            let mut empty = 0;
            for row in 0..ROWS {
                let token = if self.red.get(col, row) {
                    Color::Red
                } else if self.yellow.get(col, row) {
                    Color::Yellow
                } else {
                    empty += 1;
                    continue;
                };
                if empty > 0 {
                    write!(f, "{}", empty)?;
                    empty = 0;
                }
                write!(f, "{}", token.to_char())?;
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
        }
        Ok(())
    }
}
