use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Zero-based position of a cell within a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub column: u32,
    pub row: u32,
}

impl CellPosition {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CellPositionParseError {
    #[error("Invalid character in position string")]
    InvalidCharacter,
    #[error("Invalid format for position string")]
    InvalidFormat,
}

impl FromStr for CellPosition {
    type Err = CellPositionParseError;

    /// Parse a position in A1 notation, e.g. `B3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut column_str = String::new();
        let mut row_str = String::new();
        let mut found_numeric = false;

        for c in s.chars() {
            if c.is_ascii_alphabetic() {
                if found_numeric {
                    return Err(CellPositionParseError::InvalidFormat);
                }
                column_str.push(c.to_ascii_uppercase());
            } else if c.is_ascii_digit() {
                found_numeric = true;
                row_str.push(c);
            } else {
                return Err(CellPositionParseError::InvalidCharacter);
            }
        }

        if column_str.is_empty() || row_str.is_empty() {
            return Err(CellPositionParseError::InvalidFormat);
        }

        let column = column_str
            .bytes()
            .try_fold(0u32, |column, c| {
                column
                    .checked_mul(26)?
                    .checked_add(u32::from(c - b'A') + 1)
            })
            .ok_or(CellPositionParseError::InvalidFormat)?
            - 1;

        let row = row_str
            .parse::<u32>()
            .map_err(|_| CellPositionParseError::InvalidFormat)?
            .checked_sub(1)
            .ok_or(CellPositionParseError::InvalidFormat)?;

        Ok(CellPosition { column, row })
    }
}

fn column_name(mut column: u32) -> String {
    let mut name = Vec::new();
    loop {
        name.push(char::from(b'A' + (column % 26) as u8));
        if column < 26 {
            break;
        }
        column = column / 26 - 1;
    }
    name.into_iter().rev().collect()
}

impl Display for CellPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}{1}", column_name(self.column), u64::from(self.row) + 1)
    }
}

impl<'de> Deserialize<'de> for CellPosition {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<CellPosition>().map_err(de::Error::custom)
    }
}

impl Serialize for CellPosition {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
