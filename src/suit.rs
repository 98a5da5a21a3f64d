use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FiggieError, FiggieResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "s")]
    Spades,
    #[serde(rename = "c")]
    Clubs,
    #[serde(rename = "d")]
    Diamonds,
    #[serde(rename = "h")]
    Hearts,
}

impl Suit {
    pub fn from_char(c: char) -> FiggieResult<Suit> {
        match c.to_ascii_lowercase() {
            's' => Ok(Suit::Spades),
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            _ => Err(FiggieError::InvalidSuit(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Clubs => "\u{2663}",
            Suit::Diamonds => "\u{2666}",
            Suit::Hearts => "\u{2665}",
        }
    }

    /// The other suit of the same colour. In a real deal the goal suit is
    /// always the partner of the 12-card suit.
    pub fn partner(self) -> Suit {
        match self {
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
            Suit::Diamonds => Suit::Hearts,
            Suit::Hearts => Suit::Diamonds,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Suit {
    type Err = FiggieError;

    fn from_str(s: &str) -> FiggieResult<Suit> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_char(c),
            (Some(c), Some(_)) => Err(FiggieError::InvalidSuit(c)),
            (None, _) => Err(FiggieError::InvalidSuit(' ')),
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

/// One count per suit, stored in `ALL_SUITS` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SuitCountsRepr", into = "SuitCountsRepr")]
pub struct SuitCounts(pub [u32; 4]);

impl SuitCounts {
    pub fn new(s: u32, c: u32, d: u32, h: u32) -> SuitCounts {
        SuitCounts([s, c, d, h])
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Parses `"S,C,D,H"`, e.g. `"0,0,5,3"`.
    pub fn parse(notation: &str) -> FiggieResult<SuitCounts> {
        let parts: Vec<&str> = notation.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(FiggieError::InvalidConfig(format!(
                "expected 4 comma-separated counts, got '{}'",
                notation
            )));
        }
        let mut counts = [0u32; 4];
        for (slot, part) in counts.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                FiggieError::InvalidConfig(format!("invalid card count '{}'", part))
            })?;
        }
        Ok(SuitCounts(counts))
    }
}

impl Index<Suit> for SuitCounts {
    type Output = u32;

    fn index(&self, suit: Suit) -> &u32 {
        &self.0[suit.index()]
    }
}

impl IndexMut<Suit> for SuitCounts {
    fn index_mut(&mut self, suit: Suit) -> &mut u32 {
        &mut self.0[suit.index()]
    }
}

impl fmt::Display for SuitCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "s:{} c:{} d:{} h:{}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[derive(Serialize, Deserialize)]
struct SuitCountsRepr {
    #[serde(default)]
    s: u32,
    #[serde(default)]
    c: u32,
    #[serde(default)]
    d: u32,
    #[serde(default)]
    h: u32,
}

impl From<SuitCountsRepr> for SuitCounts {
    fn from(r: SuitCountsRepr) -> Self {
        SuitCounts([r.s, r.c, r.d, r.h])
    }
}

impl From<SuitCounts> for SuitCountsRepr {
    fn from(counts: SuitCounts) -> Self {
        let [s, c, d, h] = counts.0;
        SuitCountsRepr { s, c, d, h }
    }
}
