use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::belief::RoundBelief;
use crate::config::EngineConfig;
use crate::error::{FiggieError, FiggieResult};
use crate::players::Roster;
use crate::policy::{decide, Order, TickView};
use crate::suit::{Suit, SuitCounts, ALL_SUITS};

/// Everything the game connection can tell the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStart {
        bot: String,
        opponents: Vec<String>,
        hand: SuitCounts,
    },
    Bid {
        player: String,
        price: u32,
        suit: Suit,
    },
    Offer {
        player: String,
        price: u32,
        suit: Suit,
    },
    Trade {
        seller: String,
        buyer: String,
        price: u32,
        suit: Suit,
    },
    Tick {
        view: TickView,
    },
}

/// One method per event kind; the event source calls these in arrival order.
pub trait GameEventHandler {
    fn on_round_start(&mut self, bot: &str, opponents: &[String], hand: SuitCounts)
        -> FiggieResult<()>;

    fn on_bid(&mut self, player: &str, price: u32, suit: Suit) -> FiggieResult<()>;

    fn on_offer(&mut self, player: &str, price: u32, suit: Suit) -> FiggieResult<()>;

    fn on_trade(&mut self, seller: &str, buyer: &str, price: u32, suit: Suit) -> FiggieResult<()>;

    fn on_tick(&mut self, view: &TickView) -> FiggieResult<Vec<Order>>;

    fn dispatch(&mut self, event: &GameEvent) -> FiggieResult<Vec<Order>> {
        match event {
            GameEvent::RoundStart {
                bot,
                opponents,
                hand,
            } => self.on_round_start(bot, opponents, *hand).map(|_| Vec::new()),
            GameEvent::Bid {
                player,
                price,
                suit,
            } => self.on_bid(player, *price, *suit).map(|_| Vec::new()),
            GameEvent::Offer {
                player,
                price,
                suit,
            } => self.on_offer(player, *price, *suit).map(|_| Vec::new()),
            GameEvent::Trade {
                seller,
                buyer,
                price,
                suit,
            } => self.on_trade(seller, buyer, *price, *suit).map(|_| Vec::new()),
            GameEvent::Tick { view } => self.on_tick(view),
        }
    }
}

/// The trading bot: owns the belief state of the current round and quotes
/// from it on every tick.
pub struct FiggieBot<R: Rng> {
    config: EngineConfig,
    rng: R,
    round: Option<RoundBelief>,
}

impl<R: Rng> FiggieBot<R> {
    pub fn new(config: EngineConfig, rng: R) -> FiggieResult<FiggieBot<R>> {
        config.validate()?;
        Ok(FiggieBot {
            config,
            rng,
            round: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn round(&self) -> FiggieResult<&RoundBelief> {
        self.round.as_ref().ok_or(FiggieError::NoActiveRound)
    }

    fn round_mut(&mut self) -> Option<&mut RoundBelief> {
        if self.round.is_none() {
            debug!("event ignored, no round in progress");
        }
        self.round.as_mut()
    }

    /// Drops the belief state after a consistency failure. Nothing is quoted
    /// until the next round start.
    fn abort_round(&mut self, err: &FiggieError) {
        error!(%err, "discarding round belief state");
        self.round = None;
    }
}

impl<R: Rng> GameEventHandler for FiggieBot<R> {
    fn on_round_start(
        &mut self,
        bot: &str,
        opponents: &[String],
        hand: SuitCounts,
    ) -> FiggieResult<()> {
        let roster = Roster::new(bot, opponents)?;
        info!(bot, opponents = opponents.len(), %hand, "round started");
        self.round = Some(RoundBelief::new(roster, hand, &self.config));
        Ok(())
    }

    fn on_bid(&mut self, player: &str, price: u32, suit: Suit) -> FiggieResult<()> {
        if let Some(round) = self.round_mut() {
            let id = round.roster().id(player)?;
            round.observe_bid(id, price, suit);
        }
        Ok(())
    }

    fn on_offer(&mut self, player: &str, _price: u32, suit: Suit) -> FiggieResult<()> {
        if let Some(round) = self.round_mut() {
            let id = round.roster().id(player)?;
            round.observe_offer(id, suit);
        }
        Ok(())
    }

    fn on_trade(&mut self, seller: &str, buyer: &str, price: u32, suit: Suit) -> FiggieResult<()> {
        if let Some(round) = self.round_mut() {
            let seller = round.roster().id(seller)?;
            let buyer = round.roster().id(buyer)?;
            round.observe_trade(seller, buyer, price, suit);
        }
        Ok(())
    }

    fn on_tick(&mut self, view: &TickView) -> FiggieResult<Vec<Order>> {
        let Some(round) = self.round.as_mut() else {
            return Ok(Vec::new());
        };

        let tracked = round.own_hand();
        if round.sync_own_hand(&view.hand) {
            warn!(%tracked, reported = %view.hand, "tracked hand differs from reported hand, resyncing");
        }
        let round = &*round;

        let result = round.goal_probabilities().and_then(|goals| {
            let counts = round.card_counts();
            let goal_pct = ALL_SUITS.map(|s| (s.to_char(), (goals[s.index()] * 1000.0).round() / 10.0));
            info!(
                chips = view.chips,
                known = counts.total(),
                cards = %counts,
                ?goal_pct,
                "tick"
            );
            decide(round, view, &self.config, &mut self.rng)
        });

        match result {
            Ok(orders) => {
                for order in &orders {
                    debug!(%order, "quoting");
                }
                Ok(orders)
            }
            Err(err) => {
                if matches!(err, FiggieError::InconsistentObservations { .. }) {
                    self.abort_round(&err);
                }
                Err(err)
            }
        }
    }
}
