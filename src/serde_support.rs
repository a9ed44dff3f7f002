use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::game::Game;
use crate::r#move::Move;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const TOKEN: u8 = 0;
const TILT: u8 = 1;
const NO_COLOR: u8 = 0;

/// The flat record exchanged with peers. Fields that do not apply to the
/// move kind are zero.
#[derive(Serialize, Deserialize)]
struct MoveRecord {
    #[serde(rename = "Type")]
    kind: u8,
    #[serde(rename = "Direction", default)]
    direction: u8,
    #[serde(rename = "ColumnIdx", default)]
    column: i64,
    #[serde(rename = "Col", default)]
    color: u8,
}

impl From<Move> for MoveRecord {
    fn from(move_: Move) -> Self {
        match move_ {
            Move::Token { color, column } => MoveRecord {
                kind: TOKEN,
                direction: Direction::Up as u8,
                column: column.into(),
                color: color as u8,
            },
            Move::Tilt { direction } => MoveRecord {
                kind: TILT,
                direction: direction as u8,
                column: 0,
                color: NO_COLOR,
            },
        }
    }
}

impl TryFrom<MoveRecord> for Move {
    type Error = String;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        match record.kind {
            TOKEN => {
                let color = Color::from_int(record.color)
                    .ok_or_else(|| format!("Invalid token color: {}", record.color))?;
                // Any column off the board is left for `Game::apply` to reject.
                let column = u8::try_from(record.column).unwrap_or(u8::MAX);
                Ok(Move::token(color, column))
            }
            TILT => {
                let direction = Direction::from_int(record.direction)
                    .ok_or_else(|| format!("Invalid direction: {}", record.direction))?;
                Ok(Move::tilt(direction))
            }
            kind => Err(format!("Invalid move type: {}", kind)),
        }
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MoveRecord::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = MoveRecord::deserialize(deserializer)?;
        Move::try_from(record).map_err(serde::de::Error::custom)
    }
}

/// Boards travel as their descriptor string.
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid board: {}", e)))
    }
}

#[derive(Serialize, Deserialize)]
struct GameRecord {
    board: Board,
    #[serde(rename = "color")]
    mover: u8,
}

impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        GameRecord {
            board: *self.board(),
            mover: self.turn() as u8,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = GameRecord::deserialize(deserializer)?;
        let mover = Color::from_int(record.mover).ok_or_else(|| {
            serde::de::Error::custom(format!("Invalid color to move: {}", record.mover))
        })?;
        Ok(Game::from_board(record.board, mover))
    }
}
