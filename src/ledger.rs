use crate::players::PlayerId;

/// Believed card counts for a single suit, indexed by `PlayerId`.
///
/// Ids must come from the `Roster` the ledger was sized for; an id from
/// another round's roster may index out of bounds.
///
/// The bot's entry is exact. Every other entry is a lower bound on the
/// player's hidden holding that only moves through `raise_floor` or `transfer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipLedger {
    counts: Vec<u32>,
}

impl OwnershipLedger {
    pub fn new(players: usize, bot: PlayerId, dealt: u32) -> OwnershipLedger {
        let mut counts = vec![0; players];
        counts[bot.index()] = dealt;
        OwnershipLedger { counts }
    }

    /// One card moved from `seller` to `buyer`. A seller already at zero must
    /// have sold from supply we never saw, so only the buyer moves.
    pub fn transfer(&mut self, buyer: PlayerId, seller: PlayerId) {
        if self.counts[seller.index()] > 0 {
            self.counts[seller.index()] -= 1;
        }
        self.counts[buyer.index()] += 1;
    }

    pub fn raise_floor(&mut self, player: PlayerId, minimum: u32) {
        let count = &mut self.counts[player.index()];
        if *count < minimum {
            *count = minimum;
        }
    }

    /// Overwrites an entry with a known exact count. Only the bot's own entry
    /// is ever known exactly.
    pub fn set_exact(&mut self, player: PlayerId, count: u32) {
        self.counts[player.index()] = count;
    }

    pub fn count(&self, player: PlayerId) -> u32 {
        self.counts[player.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Roster;

    fn roster() -> Roster {
        Roster::new("bot", &["a", "b"]).unwrap()
    }

    #[test]
    fn new_ledger_only_counts_dealt_cards() {
        let r = roster();
        let ledger = OwnershipLedger::new(r.len(), r.bot(), 4);
        assert_eq!(ledger.count(r.bot()), 4);
        assert_eq!(ledger.count(r.id("a").unwrap()), 0);
        assert_eq!(ledger.total(), 4);
    }

    #[test]
    fn transfer_moves_one_card() {
        let r = roster();
        let a = r.id("a").unwrap();
        let mut ledger = OwnershipLedger::new(r.len(), r.bot(), 2);
        ledger.transfer(a, r.bot());
        assert_eq!(ledger.count(a), 1);
        assert_eq!(ledger.count(r.bot()), 1);
        assert_eq!(ledger.total(), 2);
    }

    #[test]
    fn set_exact_overwrites_in_both_directions() {
        let r = roster();
        let mut ledger = OwnershipLedger::new(r.len(), r.bot(), 5);
        ledger.set_exact(r.bot(), 7);
        assert_eq!(ledger.count(r.bot()), 7);
        ledger.set_exact(r.bot(), 2);
        assert_eq!(ledger.count(r.bot()), 2);
        assert_eq!(ledger.total(), 2);
    }

    #[test]
    fn transfer_from_empty_seller_only_credits_buyer() {
        let r = roster();
        let a = r.id("a").unwrap();
        let b = r.id("b").unwrap();
        let mut ledger = OwnershipLedger::new(r.len(), r.bot(), 0);
        ledger.transfer(b, a);
        assert_eq!(ledger.count(a), 0);
        assert_eq!(ledger.count(b), 1);
        assert_eq!(ledger.total(), 1);
    }
}
