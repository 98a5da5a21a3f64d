use std::fmt;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{FiggieError, FiggieResult};
use crate::suit::{Suit, SuitCounts};

static LAYOUTS_JSON: &str = include_str!("../data/layouts.json");

pub const TOTAL_CARDS: u32 = 40;
pub const LAYOUT_COUNT: usize = 12;

/// Cash paid for every goal-suit card at round end, majority or not.
pub const GOAL_CARD_VALUE: f64 = 10.0;

/// One hypothesis for the true deal of a round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckLayout {
    pub counts: SuitCounts,
    pub goal: Suit,
    pub majority: u32,
    pub payoff: f64,
}

impl DeckLayout {
    pub fn count(&self, suit: Suit) -> u32 {
        self.counts[suit]
    }

    pub fn is_goal(&self, suit: Suit) -> bool {
        self.goal == suit
    }
}

impl fmt::Display for DeckLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} goal {} (majority {}, bonus {:.0})",
            self.counts, self.goal, self.majority, self.payoff
        )
    }
}

#[derive(Deserialize, Debug)]
struct LayoutEntry {
    s: u32,
    c: u32,
    d: u32,
    h: u32,
    goal: Suit,
    majority: u32,
    payoff: f64,
}

impl TryFrom<LayoutEntry> for DeckLayout {
    type Error = FiggieError;

    fn try_from(entry: LayoutEntry) -> FiggieResult<DeckLayout> {
        let layout = DeckLayout {
            counts: SuitCounts::new(entry.s, entry.c, entry.d, entry.h),
            goal: entry.goal,
            majority: entry.majority,
            payoff: entry.payoff,
        };
        if layout.counts.total() != TOTAL_CARDS {
            return Err(FiggieError::InvalidLayout(format!(
                "{} holds {} cards, expected {}",
                layout.counts,
                layout.counts.total(),
                TOTAL_CARDS
            )));
        }
        if layout.majority == 0 || layout.majority > layout.count(layout.goal) {
            return Err(FiggieError::InvalidLayout(format!(
                "majority {} impossible with {} goal cards",
                layout.majority,
                layout.count(layout.goal)
            )));
        }
        if !(layout.payoff.is_finite() && layout.payoff >= 0.0) {
            return Err(FiggieError::InvalidLayout(format!(
                "payoff {} must be a non-negative number",
                layout.payoff
            )));
        }
        Ok(layout)
    }
}

pub fn parse_layouts(json: &str) -> FiggieResult<[DeckLayout; LAYOUT_COUNT]> {
    let entries: Vec<LayoutEntry> = serde_json::from_str(json)?;
    if entries.len() != LAYOUT_COUNT {
        return Err(FiggieError::InvalidLayout(format!(
            "expected {} layouts, found {}",
            LAYOUT_COUNT,
            entries.len()
        )));
    }
    let layouts = entries
        .into_iter()
        .map(DeckLayout::try_from)
        .collect::<FiggieResult<Vec<_>>>()?;
    layouts
        .try_into()
        .map_err(|_| FiggieError::InvalidLayout("layout count changed while parsing".to_string()))
}

static LAYOUTS: Lazy<[DeckLayout; LAYOUT_COUNT]> =
    Lazy::new(|| parse_layouts(LAYOUTS_JSON).expect("Failed to parse embedded deck layouts"));

/// The 12 possible deals, in goal order clubs, spades, diamonds, hearts.
pub fn all_layouts() -> &'static [DeckLayout; LAYOUT_COUNT] {
    &LAYOUTS
}
