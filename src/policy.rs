//! Turns expected values into quotes. Deliberately thin: every number it
//! needs comes from `RoundBelief`.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::belief::RoundBelief;
use crate::config::EngineConfig;
use crate::error::FiggieResult;
use crate::suit::{Suit, SuitCounts, ALL_SUITS};

/// Price bounds the exchange reports for one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub buy_value: u32,
    pub sell_value: u32,
}

/// Read-only game state handed to the bot on every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickView {
    pub hand: SuitCounts,
    pub chips: i64,
    pub time_remaining: f64,
    #[serde(default)]
    pub markets: BTreeMap<Suit, Market>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Offer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Offer => write!(f, "offer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub side: Side,
    pub suit: Suit,
    pub price: u32,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.side, self.suit, self.price)
    }
}

/// Bid a random fraction of the buy value, capped by the market.
pub fn bid_price<R: Rng>(buy_value: f64, market: &Market, rng: &mut R) -> u32 {
    let upper = buy_value.max(0.0);
    let drawn = rng.gen_range(0.0..=upper).floor() as u32;
    drawn.min(market.buy_value)
}

/// Offer above the sell value. The premium band shrinks from 3x toward 1x as
/// the round runs out.
pub fn offer_price<R: Rng>(
    sell_value: f64,
    time_remaining: f64,
    round_seconds: f64,
    market: &Market,
    rng: &mut R,
) -> u32 {
    let low = sell_value.max(0.0);
    if !(round_seconds > 0.0) {
        return (low.ceil() as u32).max(market.sell_value);
    }
    let remaining = time_remaining.clamp(0.0, round_seconds);
    let high = (1.0 + 2.0 * (remaining / round_seconds)) * low;
    let drawn = rng.gen_range(low..=high).ceil() as u32;
    drawn.max(market.sell_value)
}

/// One bid per suit with a market, plus an offer for every suit we hold.
pub fn decide<R: Rng>(
    belief: &RoundBelief,
    view: &TickView,
    config: &EngineConfig,
    rng: &mut R,
) -> FiggieResult<Vec<Order>> {
    let k = config.majority_constant;
    let mut orders = Vec::new();
    for suit in ALL_SUITS {
        let Some(market) = view.markets.get(&suit) else {
            continue;
        };
        let buy_value = belief.expected_buy_value(suit, k)?;
        orders.push(Order {
            side: Side::Bid,
            suit,
            price: bid_price(buy_value, market, rng),
        });
        if view.hand[suit] > 0 {
            let sell_value = belief.expected_sell_value(suit, k)?;
            orders.push(Order {
                side: Side::Offer,
                suit,
                price: offer_price(
                    sell_value,
                    view.time_remaining,
                    config.round_seconds,
                    market,
                    rng,
                ),
            });
        }
    }
    Ok(orders)
}
