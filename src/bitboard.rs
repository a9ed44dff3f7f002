use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};
use std::str::FromStr;

use crate::error::ParseError;
use crate::rotation::ROTATION_TABLE;

pub const COLUMNS: usize = 8;
pub const ROWS: usize = 8;
pub const CELLS: usize = COLUMNS * ROWS;

/// Bit 0 of every column (the southmost row).
const ROW0: u64 = 0x0101_0101_0101_0101;

const NORTH_MASK: u64 = !ROW0;
const NORTH2_MASK: u64 = !(ROW0 | ROW0 << 1);
const NORTH3_MASK: u64 = !(ROW0 | ROW0 << 1 | ROW0 << 2);
const SOUTH_MASK: u64 = !(ROW0 << 7);
const NO_MASK: u64 = !0;

/// Generates a one-step shift together with its 2- and 3-step variants,
/// each masked so that bits never wrap into a neighbouring column.
macro_rules! ray {
    ($(#[$doc:meta])* $name:ident, $shift:ident, $step:literal, $m1:expr, $m2:expr, $m3:expr) => {
        paste::paste! {
            $(#[$doc])*
            #[inline]
            pub const fn $name(self) -> Self {
                Bitboard(self.0.$shift($step) & $m1)
            }

            #[inline]
            pub const fn [<$name 2>](self) -> Self {
                Bitboard(self.0.$shift(2 * $step) & $m2)
            }

            #[inline]
            pub const fn [<$name 3>](self) -> Self {
                Bitboard(self.0.$shift(3 * $step) & $m3)
            }
        }
    };
}

/// Occupancy of one color on the 8×8 grid.
///
/// Bit `8 * col + row` is set when that cell holds a token. Each column is one
/// byte; row 0 is the low bit of the byte, and gravity always pulls toward it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// All bits zero.
    #[inline]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    #[inline]
    pub(crate) const fn from_bits(bits: u64) -> Self {
        Bitboard(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Single bit set at (`col`, `row`).
    #[inline]
    pub(crate) const fn cell(col: usize, row: usize) -> Self {
        debug_assert!(col < COLUMNS && row < ROWS);
        Bitboard(1u64 << (8 * col + row))
    }

    /// Mask covering every cell of column `col`.
    #[inline]
    pub(crate) const fn column_mask(col: usize) -> Self {
        Bitboard(0xffu64 << (8 * col))
    }

    #[inline]
    pub fn get(self, col: usize, row: usize) -> bool {
        col < COLUMNS && row < ROWS && self.0 & Self::cell(col, row).0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Population count, i.e. the number of tokens of this color.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The byte holding column `index`, bit `r` standing for row `r`.
    #[inline]
    pub const fn column(self, index: usize) -> u8 {
        (self.0 >> (8 * index)) as u8
    }

    ray!(
        /// One row north, inside the same column.
        north, wrapping_shl, 1, NORTH_MASK, NORTH2_MASK, NORTH3_MASK
    );
    ray!(
        /// One column east. Nothing to mask: bits leaving column 7 fall off the end.
        east, wrapping_shl, 8, NO_MASK, NO_MASK, NO_MASK
    );
    ray!(
        /// One column west and one row north.
        north_west, wrapping_shr, 7, NORTH_MASK, NORTH2_MASK, NORTH3_MASK
    );
    ray!(
        /// One column east and one row north.
        north_east, wrapping_shl, 9, NORTH_MASK, NORTH2_MASK, NORTH3_MASK
    );

    /// One row south, inside the same column.
    #[inline]
    pub const fn south(self) -> Self {
        Bitboard((self.0 >> 1) & SOUTH_MASK)
    }

    /// One column west.
    #[inline]
    pub const fn west(self) -> Self {
        Bitboard(self.0 >> 8)
    }

    /// Whether four tokens line up vertically, horizontally or diagonally.
    #[inline]
    pub const fn has_connect4(self) -> bool {
        let b = self.0;
        let vertical = b & self.north().0 & self.north2().0 & self.north3().0;
        let horizontal = b & self.east().0 & self.east2().0 & self.east3().0;
        let left_diagonal = b & self.north_west().0 & self.north_west2().0 & self.north_west3().0;
        let right_diagonal = b & self.north_east().0 & self.north_east2().0 & self.north_east3().0;
        (vertical | horizontal | left_diagonal | right_diagonal) != 0
    }

    /// Rotates the grid 90 degrees left: cell (`col`, `row`) moves to (`7 - row`, `col`).
    #[inline]
    pub fn rotate_left(self) -> Self {
        let mut rotated = 0u64;
        for col in 0..COLUMNS {
            rotated |= ROTATION_TABLE.get(self.column(col)).0 << col;
        }
        Bitboard(rotated)
    }

    /// Iterate over (`col`, `row`) of set bits, column by column.
    #[inline]
    pub fn iter_ones(self) -> BitIterator {
        BitIterator { bits: self.0 }
    }

    /// Parse a descriptor in which `token` marks an occupied cell. Digits
    /// `1`-`8` skip that many empty rows; `blank`, if given, skips one row.
    pub(crate) fn parse(s: &str, token: char, blank: Option<char>) -> Result<Self, ParseError> {
        let fields: Vec<&str> = s.split('|').collect();
        if fields.len() != COLUMNS {
            return Err(ParseError::ColumnCount {
                found: fields.len(),
            });
        }

        let mut bits = 0u64;
        for (col, field) in fields.iter().enumerate() {
            let mut row = 0usize;
            for c in field.chars() {
                let skip = match c {
                    _ if c == token => {
                        if row >= ROWS {
                            return Err(ParseError::RowCount {
                                column: col,
                                rows: row + 1,
                            });
                        }
                        bits |= 1u64 << (8 * col + row);
                        1
                    }
                    _ if Some(c) == blank => 1,
                    '1'..='8' => c as usize - '0' as usize,
                    _ => return Err(ParseError::InvalidChar { column: col, found: c }),
                };
                // `skip` is 1 after placing a token, so the row counter always advances.
                row += skip;
            }
            if row != ROWS {
                return Err(ParseError::RowCount { column: col, rows: row });
            }
        }

        Ok(Bitboard(bits))
    }
}

/// Single-plane descriptor: `x` for a token, digits for runs of empty rows.
impl FromStr for Bitboard {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bitboard::parse(s, 'x', None)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Iterator over the (`col`, `row`) cells of a `Bitboard`.
pub struct BitIterator {
    bits: u64,
}

impl Iterator for BitIterator {
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<(usize, usize)> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some((index / 8, index % 8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb(s: &str) -> Bitboard {
        s.parse().unwrap()
    }

    fn check_shift(f: fn(Bitboard) -> Bitboard, cases: &[(&str, &str)]) {
        for (k, (input, expected)) in cases.iter().enumerate() {
            assert_eq!(f(bb(input)), bb(expected), "case {k}: {input}");
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(bb("8|8|8|8|8|8|8|8"), Bitboard::empty());
        assert_eq!(bb("x7|8|8|8|8|8|8|8").bits(), 1);
        assert_eq!(
            bb("x6x|8|8|8|8|xxxxxxxx|8|8").bits(),
            1 | 1 << 7 | 0xff << 40
        );
        // Chained digits add up.
        assert_eq!(
            bb("x321x|53|44|8|8|xxxxxxxx|8|11111111").bits(),
            1 | 1 << 7 | 0xff << 40
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "8|8|8|8|8|8|8".parse::<Bitboard>(),
            Err(ParseError::ColumnCount { found: 7 })
        );
        assert_eq!(
            "8|8|8|8|8|8|8|8|8".parse::<Bitboard>(),
            Err(ParseError::ColumnCount { found: 9 })
        );
        assert_eq!(
            "x6|8|8|8|8|8|8|8".parse::<Bitboard>(),
            Err(ParseError::RowCount { column: 0, rows: 7 })
        );
        // The last column is checked like the others.
        assert_eq!(
            "8|8|8|8|8|8|8|111111111".parse::<Bitboard>(),
            Err(ParseError::RowCount { column: 7, rows: 9 })
        );
        assert_eq!(
            "8|8|8|8|8|8|8|xxxxxxxxx".parse::<Bitboard>(),
            Err(ParseError::RowCount { column: 7, rows: 9 })
        );
        assert_eq!(
            "8|8|y7|8|8|8|8|8".parse::<Bitboard>(),
            Err(ParseError::InvalidChar { column: 2, found: 'y' })
        );
        assert_eq!(
            "8|08|8|8|8|8|8|8".parse::<Bitboard>(),
            Err(ParseError::InvalidChar { column: 1, found: '0' })
        );
        assert!("".parse::<Bitboard>().is_err());
    }

    #[test]
    fn test_north() {
        check_shift(
            Bitboard::north,
            &[
                ("x7|8|8|8|8|8|8|8", "1x6|8|8|8|8|8|8|8"),
                ("7x|8|8|8|8|8|8|8", "8|8|8|8|8|8|8|8"),
                ("8|1x6|8|8|8|8|8|8", "8|2x5|8|8|8|8|8|8"),
                ("8|8|3x4|8|8|8|8|8", "8|8|4x3|8|8|8|8|8"),
            ],
        );
        check_shift(
            Bitboard::north2,
            &[
                ("x7|8|8|8|8|8|8|8", "2x5|8|8|8|8|8|8|8"),
                ("6xx|8|8|8|8|8|8|5xxx", "8|8|8|8|8|8|8|7x"),
                ("8|8|3x4|8|8|8|8|8", "8|8|5x2|8|8|8|8|8"),
            ],
        );
        check_shift(
            Bitboard::north3,
            &[
                ("x7|8|8|8|8|8|8|8", "3x4|8|8|8|8|8|8|8"),
                ("5xxx|8|8|8|8|8|8|4xxxx", "8|8|8|8|8|8|8|7x"),
                ("8|8|3x4|8|8|8|8|8", "8|8|6x1|8|8|8|8|8"),
            ],
        );
    }

    #[test]
    fn test_south() {
        check_shift(
            Bitboard::south,
            &[
                ("x7|8|8|8|x7|8|8|8", "8|8|8|8|8|8|8|8"),
                ("7x|8|8|8|8|8|8|8", "6x1|8|8|8|8|8|8|8"),
                ("8|1x6|8|8|2x5|8|8|8", "8|x7|8|8|1x6|8|8|8"),
                ("8|8|xx6|8|8|8|8|8", "8|8|x7|8|8|8|8|8"),
            ],
        );
    }

    #[test]
    fn test_east_west() {
        check_shift(
            Bitboard::east,
            &[
                ("x7|8|8|8|8|8|8|8", "8|x7|8|8|8|8|8|8"),
                ("8|8|8|8|8|1x6|8|8", "8|8|8|8|8|8|1x6|8"),
                ("8|8|8|8|8|8|8|3x4", "8|8|8|8|8|8|8|8"),
            ],
        );
        check_shift(
            Bitboard::east2,
            &[
                ("x7|8|8|8|8|8|8|8", "8|8|x7|8|8|8|8|8"),
                ("8|8|8|8|8|8|x7|3x4", "8|8|8|8|8|8|8|8"),
            ],
        );
        check_shift(
            Bitboard::east3,
            &[
                ("x7|8|8|8|8|8|8|8", "8|8|8|x7|8|8|8|8"),
                ("8|8|8|8|1x6|1x6|8|8", "8|8|8|8|8|8|8|1x6"),
            ],
        );
        check_shift(
            Bitboard::west,
            &[
                ("8|x7|8|8|8|8|8|8", "x7|8|8|8|8|8|8|8"),
                ("3x4|8|8|8|8|8|8|8", "8|8|8|8|8|8|8|8"),
            ],
        );
    }

    #[test]
    fn test_diagonals() {
        check_shift(
            Bitboard::north_west,
            &[
                ("x7|8|8|8|x7|8|8|8", "8|8|8|1x6|8|8|8|8"),
                ("8|x7|8|3x4|8|6xx|8|8", "1x6|8|4x3|8|7x|8|8|8"),
            ],
        );
        check_shift(
            Bitboard::north_west2,
            &[
                ("x7|8|8|8|x7|8|8|8", "8|8|2x5|8|8|8|8|8"),
                ("8|x7|8|3x4|8|5xxx|8|8", "8|5x2|8|7x|8|8|8|8"),
            ],
        );
        check_shift(
            Bitboard::north_west3,
            &[
                ("x7|8|8|8|x7|8|8|8", "8|3x4|8|8|8|8|8|8"),
                ("8|x7|8|3x4|8|4xxxx|8|8", "6x1|8|7x|8|8|8|8|8"),
            ],
        );
        check_shift(
            Bitboard::north_east,
            &[
                ("8|8|8|8|8|x5x1|x7|x7", "8|8|8|8|8|8|1x5x|1x6"),
                ("x7|8|8|8|8|7x|8|8", "8|1x6|8|8|8|8|8|8"),
            ],
        );
        check_shift(
            Bitboard::north_east2,
            &[
                ("8|8|8|8|8|x5x1|x7|x7", "8|8|8|8|8|8|8|2x5"),
                ("8|8|8|8|8|4xxxx|8|8", "8|8|8|8|8|8|8|6xx"),
            ],
        );
        check_shift(
            Bitboard::north_east3,
            &[
                ("8|8|8|8|8|x5x1|x7|x7", "8|8|8|8|8|8|8|8"),
                ("8|8|8|8|4xxxx|8|8|8", "8|8|8|8|8|8|8|7x"),
            ],
        );
    }

    #[test]
    fn test_has_connect4() {
        let cases = [
            ("8|8|8|8|8|x5x1|x7|x7", false),
            ("8|1x6|8|8|2x5|8|8|8", false),
            ("8|8|8|8|xxx1x3|x5x1|x7|1x6", false),
            ("8|1x6|1x6|1xxx4|2x5|8|8|8", false),
            ("8|8|8|8|8|2xxxx2|x7|x7", true),
            ("8|4xxxx|8|8|2x5|8|8|8", true),
            ("8|8|x7|1x6|2x5|3x4|x7|x7", true),
            ("8|7x|6xx|5x2|4x3|8|8|8", true),
            ("8|7x|7x|5x2|4x3|7x|7x|7x", false),
            ("8|7x|7x|5x2|7x|7x|7x|7x", true),
        ];
        for (input, expected) in cases {
            assert_eq!(bb(input).has_connect4(), expected, "{input}");
        }
    }

    #[test]
    fn test_count() {
        assert_eq!(bb("8|8|8|8|8|x5x1|x7|x7").count(), 4);
        assert_eq!(bb("8|8|8|8|xxx1x3|x5x1|x7|1x6").count(), 8);
        assert_eq!(bb("8|4xxxx|8|8|2x5|8|8|8").count(), 5);
    }

    #[test]
    fn test_column() {
        let b = bb("8|xx6|8|8|8|8|8|7x");
        assert_eq!(b.column(0), 0);
        assert_eq!(b.column(1), 0b0000_0011);
        assert_eq!(b.column(7), 0b1000_0000);
    }

    #[test]
    fn test_rotate_left() {
        let b = bb("xx6|8|8|8|8|8|8|8");
        assert_eq!(b.rotate_left(), bb("8|8|8|8|8|8|x7|x7"));
        assert_eq!(b.rotate_left().rotate_left(), bb("8|8|8|8|8|8|8|6xx"));
        assert_eq!(
            b.rotate_left().rotate_left().rotate_left(),
            bb("7x|7x|8|8|8|8|8|8")
        );
    }

    #[test]
    fn test_rotate_left_closure() {
        for input in [
            "8|8|8|8|xxx1x3|x5x1|x7|1x6",
            "x6x|8|8|8|8|xxxxxxxx|8|8",
            "xxxxxxxx|xxxxxxxx|xxxxxxxx|xxxxxxxx|xxxxxxxx|xxxxxxxx|xxxxxxxx|xxxxxxxx",
        ] {
            let b = bb(input);
            let turned = b.rotate_left().rotate_left().rotate_left().rotate_left();
            assert_eq!(turned, b, "{input}");
            assert_eq!(b.rotate_left().count(), b.count());
        }
    }

    #[test]
    fn test_iter_ones() {
        let cells: Vec<_> = bb("1x6|8|8|8|8|8|8|7x").iter_ones().collect();
        assert_eq!(cells, vec![(0, 1), (7, 7)]);
        assert_eq!(Bitboard::empty().iter_ones().count(), 0);
    }

    #[test]
    fn test_get() {
        let b = bb("8|8|3x4|8|8|8|8|8");
        assert!(b.get(2, 3));
        assert!(!b.get(2, 4));
        assert!(!b.get(8, 0));
    }
}
