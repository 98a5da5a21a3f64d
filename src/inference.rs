//! Floor inference from quotes.
//!
//! An aggressive bid suggests the bidder already holds part of the suit and is
//! chasing majority. These thresholds are heuristics and live in
//! `EngineConfig`, not in code.

use serde::{Deserialize, Serialize};

use crate::error::{FiggieError, FiggieResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorTier {
    /// Lowest price that triggers this tier.
    pub min_price: u32,
    /// Cards the quoting player is then assumed to hold.
    pub min_held: u32,
}

/// Price tiers, highest price first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FloorTier>", into = "Vec<FloorTier>")]
pub struct FloorTiers(Vec<FloorTier>);

impl FloorTiers {
    pub fn new(tiers: Vec<FloorTier>) -> FiggieResult<FloorTiers> {
        for pair in tiers.windows(2) {
            if pair[0].min_price <= pair[1].min_price {
                return Err(FiggieError::InvalidConfig(format!(
                    "floor tiers must be ordered by strictly decreasing price ({} then {})",
                    pair[0].min_price, pair[1].min_price
                )));
            }
        }
        Ok(FloorTiers(tiers))
    }

    /// Minimum holding implied by a bid at `price`, if any tier applies.
    pub fn floor_for(&self, price: u32) -> Option<u32> {
        self.0
            .iter()
            .find(|tier| price >= tier.min_price)
            .map(|tier| tier.min_held)
    }

    pub fn tiers(&self) -> &[FloorTier] {
        &self.0
    }
}

impl Default for FloorTiers {
    fn default() -> Self {
        FloorTiers(vec![
            FloorTier { min_price: 20, min_held: 3 },
            FloorTier { min_price: 15, min_held: 2 },
            FloorTier { min_price: 12, min_held: 1 },
        ])
    }
}

impl TryFrom<Vec<FloorTier>> for FloorTiers {
    type Error = FiggieError;

    fn try_from(tiers: Vec<FloorTier>) -> FiggieResult<FloorTiers> {
        FloorTiers::new(tiers)
    }
}

impl From<FloorTiers> for Vec<FloorTier> {
    fn from(tiers: FloorTiers) -> Self {
        tiers.0
    }
}
