use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FiggieError, FiggieResult};
use crate::inference::FloorTiers;
use crate::valuation::check_majority_constant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Geometric ratio spreading the majority bonus over the cards needed.
    pub majority_constant: f64,
    /// Bid price tiers and the holding each one implies.
    pub floor_tiers: FloorTiers,
    /// Holding implied by posting an offer.
    pub offer_floor: u32,
    /// Length of a round in seconds, used to decay offer premiums.
    pub round_seconds: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            majority_constant: 1.1,
            floor_tiers: FloorTiers::default(),
            offer_floor: 1,
            round_seconds: 240.0,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> FiggieResult<EngineConfig> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> FiggieResult<EngineConfig> {
        let text = fs::read_to_string(path)?;
        EngineConfig::from_json(&text)
    }

    pub fn validate(&self) -> FiggieResult<()> {
        check_majority_constant(self.majority_constant)?;
        if !(self.round_seconds.is_finite() && self.round_seconds > 0.0) {
            return Err(FiggieError::InvalidConfig(format!(
                "round_seconds must be positive, got {}",
                self.round_seconds
            )));
        }
        Ok(())
    }
}
