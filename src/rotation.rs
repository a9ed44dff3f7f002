use crate::bitboard::Bitboard;

/// Maps a column byte to the row it becomes after a 90-degree left turn.
///
/// Entry `b` is the rotation of a board whose only non-empty column is column 0
/// with pattern `b`: row `r` of that column lands in column `7 - r`, row 0.
/// Shifting an entry left by `col` places it in row `col`, which is where
/// column `col` ends up.
pub struct RotationTable([u64; 256]);

impl RotationTable {
    const fn build() -> Self {
        let mut table = [0u64; 256];
        let mut pattern = 0;
        while pattern < 256 {
            let mut row = 0;
            while row < 8 {
                if pattern & (1 << row) != 0 {
                    table[pattern] |= 1u64 << (8 * (7 - row));
                }
                row += 1;
            }
            pattern += 1;
        }
        RotationTable(table)
    }

    #[inline]
    pub const fn get(&self, column: u8) -> Bitboard {
        Bitboard::from_bits(self.0[column as usize])
    }
}

/// Built at compile time; read-only for the whole process.
pub static ROTATION_TABLE: RotationTable = RotationTable::build();
