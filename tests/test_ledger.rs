use figgie_engine::config::EngineConfig;
use figgie_engine::belief::RoundBelief;
use figgie_engine::error::FiggieError;
use figgie_engine::ledger::OwnershipLedger;
use figgie_engine::players::Roster;
use figgie_engine::suit::{Suit, SuitCounts, ALL_SUITS};

fn roster() -> Roster {
    Roster::new("me", &["alice", "bob", "carol", "dave"]).unwrap()
}

fn round(hand: SuitCounts) -> RoundBelief {
    RoundBelief::new(roster(), hand, &EngineConfig::default())
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

#[test]
fn test_roster_bot_is_first() {
    let r = roster();
    assert_eq!(r.len(), 5);
    assert_eq!(r.id("me").unwrap(), r.bot());
    assert!(r.is_bot(r.bot()));
    assert_eq!(r.opponents().count(), 4);
    assert!(r.opponents().all(|id| !r.is_bot(id)));
}

#[test]
fn test_roster_names_round_trip() {
    let r = roster();
    for name in ["me", "alice", "bob", "carol", "dave"] {
        assert_eq!(r.name(r.id(name).unwrap()), name);
    }
}

#[test]
fn test_roster_unknown_player() {
    assert!(matches!(
        roster().id("mallory"),
        Err(FiggieError::UnknownPlayer(name)) if name == "mallory"
    ));
}

#[test]
fn test_roster_duplicate_player() {
    assert!(matches!(
        Roster::new("me", &["alice", "alice"]),
        Err(FiggieError::DuplicatePlayer(_))
    ));
    assert!(Roster::new("me", &["me"]).is_err());
}

// ---------------------------------------------------------------------------
// Ledger operations
// ---------------------------------------------------------------------------

#[test]
fn test_raise_floor_only_raises() {
    let r = roster();
    let alice = r.id("alice").unwrap();
    let mut ledger = OwnershipLedger::new(r.len(), r.bot(), 0);

    ledger.raise_floor(alice, 2);
    assert_eq!(ledger.count(alice), 2);
    ledger.raise_floor(alice, 1);
    assert_eq!(ledger.count(alice), 2);
    ledger.raise_floor(alice, 2);
    assert_eq!(ledger.count(alice), 2);
    ledger.raise_floor(alice, 4);
    assert_eq!(ledger.count(alice), 4);
}

#[test]
fn test_raise_floor_idempotent() {
    let r = roster();
    let bob = r.id("bob").unwrap();
    let mut once = OwnershipLedger::new(r.len(), r.bot(), 3);
    once.raise_floor(bob, 3);
    let mut twice = once.clone();
    twice.raise_floor(bob, 3);
    twice.raise_floor(bob, 1);
    assert_eq!(once, twice);
}

#[test]
fn test_total_sums_all_players() {
    let r = roster();
    let mut ledger = OwnershipLedger::new(r.len(), r.bot(), 3);
    ledger.raise_floor(r.id("alice").unwrap(), 2);
    ledger.raise_floor(r.id("dave").unwrap(), 1);
    assert_eq!(ledger.total(), 6);
}

#[test]
fn test_transfer_conserves_total_when_seller_has_cards() {
    let r = roster();
    let alice = r.id("alice").unwrap();
    let bob = r.id("bob").unwrap();
    let mut ledger = OwnershipLedger::new(r.len(), r.bot(), 0);
    ledger.raise_floor(alice, 2);
    ledger.transfer(bob, alice);
    assert_eq!(ledger.count(alice), 1);
    assert_eq!(ledger.count(bob), 1);
    assert_eq!(ledger.total(), 2);
}

// ---------------------------------------------------------------------------
// Round belief
// ---------------------------------------------------------------------------

#[test]
fn test_new_round_seeds_ledgers_from_hand() {
    let hand = SuitCounts::new(0, 0, 5, 3);
    let belief = round(hand);
    assert_eq!(belief.own_hand(), hand);
    assert_eq!(belief.card_counts(), hand);
    for suit in ALL_SUITS {
        for id in belief.roster().opponents() {
            assert_eq!(belief.ledger(suit).count(id), 0);
        }
    }
}

#[test]
fn test_two_bought_diamonds_scenario() {
    let mut belief = round(SuitCounts::new(0, 0, 5, 3));
    let alice = belief.roster().id("alice").unwrap();
    let me = belief.roster().bot();
    belief.ledger_mut(Suit::Diamonds).raise_floor(alice, 1);

    belief.observe_trade(alice, me, 8, Suit::Diamonds);
    assert_eq!(belief.own_count(Suit::Diamonds), 6);
    assert_eq!(belief.ledger(Suit::Diamonds).count(alice), 0);

    // alice is exhausted: we still gain a card, she stays at zero
    belief.observe_trade(alice, me, 8, Suit::Diamonds);
    assert_eq!(belief.own_count(Suit::Diamonds), 7);
    assert_eq!(belief.ledger(Suit::Diamonds).count(alice), 0);
}

#[test]
fn test_bot_entry_tracks_true_hand_through_trades() {
    let mut belief = round(SuitCounts::new(2, 1, 5, 3));
    let r = belief.roster().clone();
    let me = r.bot();
    let bob = r.id("bob").unwrap();
    let carol = r.id("carol").unwrap();

    let mut hand = SuitCounts::new(2, 1, 5, 3);
    let trades = [
        (bob, me, Suit::Spades),
        (me, carol, Suit::Diamonds),
        (me, bob, Suit::Hearts),
        (carol, me, Suit::Hearts),
        (bob, carol, Suit::Clubs),
        (me, bob, Suit::Clubs),
    ];
    for (seller, buyer, suit) in trades {
        belief.observe_trade(seller, buyer, 10, suit);
        if buyer == me {
            hand[suit] += 1;
        }
        if seller == me {
            hand[suit] -= 1;
        }
        assert_eq!(belief.own_hand(), hand);
    }
}

#[test]
fn test_quote_floor_scenario() {
    let mut belief = round(SuitCounts::new(0, 0, 5, 3));
    let x = belief.roster().id("carol").unwrap();

    belief.observe_bid(x, 25, Suit::Clubs);
    assert_eq!(belief.ledger(Suit::Clubs).count(x), 3);

    belief.observe_bid(x, 13, Suit::Clubs);
    assert_eq!(belief.ledger(Suit::Clubs).count(x), 3);
    assert_eq!(belief.suit_card_count_estimate(Suit::Clubs), 3);
}

#[test]
fn test_low_bid_implies_nothing() {
    let mut belief = round(SuitCounts::new(0, 0, 5, 3));
    let x = belief.roster().id("bob").unwrap();
    belief.observe_bid(x, 11, Suit::Spades);
    assert_eq!(belief.ledger(Suit::Spades).count(x), 0);
}

#[test]
fn test_own_quotes_ignored() {
    let mut belief = round(SuitCounts::new(0, 0, 5, 3));
    let me = belief.roster().bot();
    belief.observe_bid(me, 30, Suit::Spades);
    belief.observe_offer(me, Suit::Clubs);
    assert_eq!(belief.own_hand(), SuitCounts::new(0, 0, 5, 3));
}

#[test]
fn test_offer_implies_one_card() {
    let mut belief = round(SuitCounts::new(0, 0, 5, 3));
    let dave = belief.roster().id("dave").unwrap();
    belief.observe_offer(dave, Suit::Hearts);
    assert_eq!(belief.ledger(Suit::Hearts).count(dave), 1);
    assert_eq!(belief.suit_card_count_estimate(Suit::Hearts), 4);
}

#[test]
fn test_trade_applies_bid_floor_before_transfer() {
    let mut belief = round(SuitCounts::new(0, 0, 5, 3));
    let alice = belief.roster().id("alice").unwrap();
    let bob = belief.roster().id("bob").unwrap();

    // a 20+ purchase says alice had 3 already, then she receives one more
    belief.observe_trade(bob, alice, 21, Suit::Clubs);
    assert_eq!(belief.ledger(Suit::Clubs).count(alice), 4);
    assert_eq!(belief.ledger(Suit::Clubs).count(bob), 0);
    assert_eq!(belief.suit_card_count_estimate(Suit::Clubs), 4);
}
