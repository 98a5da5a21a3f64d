use tracing::debug;

use crate::config::EngineConfig;
use crate::error::FiggieResult;
use crate::inference::FloorTiers;
use crate::ledger::OwnershipLedger;
use crate::players::{PlayerId, Roster};
use crate::suit::{Suit, SuitCounts, ALL_SUITS};
use crate::valuation::{
    check_majority_constant, distribution, expected_value, goal_probabilities, LayoutDistribution,
};

/// Everything the bot believes about the current round. Built at round start
/// and thrown away when the round ends.
#[derive(Debug, Clone)]
pub struct RoundBelief {
    roster: Roster,
    ledgers: [OwnershipLedger; 4],
    floor_tiers: FloorTiers,
    offer_floor: u32,
}

impl RoundBelief {
    pub fn new(roster: Roster, hand: SuitCounts, config: &EngineConfig) -> RoundBelief {
        let ledgers =
            ALL_SUITS.map(|suit| OwnershipLedger::new(roster.len(), roster.bot(), hand[suit]));
        RoundBelief {
            roster,
            ledgers,
            floor_tiers: config.floor_tiers.clone(),
            offer_floor: config.offer_floor,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ledger(&self, suit: Suit) -> &OwnershipLedger {
        &self.ledgers[suit.index()]
    }

    pub fn ledger_mut(&mut self, suit: Suit) -> &mut OwnershipLedger {
        &mut self.ledgers[suit.index()]
    }

    /// A bid by `player` at `price`. Bids above the configured tiers imply the
    /// bidder already holds some of the suit. The bot's own quotes carry no
    /// information.
    pub fn observe_bid(&mut self, player: PlayerId, price: u32, suit: Suit) {
        if self.roster.is_bot(player) {
            return;
        }
        if let Some(floor) = self.floor_tiers.floor_for(price) {
            debug!(
                player = self.roster.name(player),
                %suit, price, floor, "bid raises holding floor"
            );
            self.ledger_mut(suit).raise_floor(player, floor);
        }
    }

    /// An offer can only be posted by someone holding the suit.
    pub fn observe_offer(&mut self, player: PlayerId, suit: Suit) {
        if self.roster.is_bot(player) {
            return;
        }
        let floor = self.offer_floor;
        debug!(player = self.roster.name(player), %suit, floor, "offer raises holding floor");
        self.ledger_mut(suit).raise_floor(player, floor);
    }

    /// A completed trade: the price is read as a bid by the buyer, then one
    /// card changes hands.
    pub fn observe_trade(&mut self, seller: PlayerId, buyer: PlayerId, price: u32, suit: Suit) {
        self.observe_bid(buyer, price, suit);
        self.ledger_mut(suit).transfer(buyer, seller);
        debug!(
            seller = self.roster.name(seller),
            buyer = self.roster.name(buyer),
            %suit,
            price,
            known = self.ledger(suit).total(),
            "trade recorded"
        );
    }

    /// Known cards of `suit` across all players, a lower bound on its size.
    pub fn suit_card_count_estimate(&self, suit: Suit) -> u32 {
        self.ledger(suit).total()
    }

    pub fn card_counts(&self) -> SuitCounts {
        SuitCounts(ALL_SUITS.map(|suit| self.suit_card_count_estimate(suit)))
    }

    pub fn own_count(&self, suit: Suit) -> u32 {
        self.ledger(suit).count(self.roster.bot())
    }

    pub fn own_hand(&self) -> SuitCounts {
        SuitCounts(ALL_SUITS.map(|suit| self.own_count(suit)))
    }

    /// Resets the bot's own entries to the hand reported by the game, which
    /// is ground truth. Returns true if anything changed.
    pub fn sync_own_hand(&mut self, hand: &SuitCounts) -> bool {
        let bot = self.roster.bot();
        let mut changed = false;
        for suit in ALL_SUITS {
            if self.own_count(suit) != hand[suit] {
                self.ledger_mut(suit).set_exact(bot, hand[suit]);
                changed = true;
            }
        }
        changed
    }

    /// Recomputed from the ledgers on every call.
    pub fn layout_probabilities(&self) -> FiggieResult<LayoutDistribution> {
        distribution(&self.card_counts())
    }

    pub fn goal_probabilities(&self) -> FiggieResult<[f64; 4]> {
        Ok(goal_probabilities(&self.layout_probabilities()?))
    }

    pub fn expected_value_at(&self, suit: Suit, own: i32, majority_constant: f64) -> FiggieResult<f64> {
        let k = check_majority_constant(majority_constant)?;
        let dist = self.layout_probabilities()?;
        expected_value(suit, &dist, own, k)
    }

    pub fn expected_buy_value(&self, suit: Suit, majority_constant: f64) -> FiggieResult<f64> {
        self.expected_value_at(suit, self.own_count(suit) as i32, majority_constant)
    }

    /// Value given up by selling: a buy evaluated one card lower.
    pub fn expected_sell_value(&self, suit: Suit, majority_constant: f64) -> FiggieResult<f64> {
        self.expected_value_at(suit, self.own_count(suit) as i32 - 1, majority_constant)
    }
}
