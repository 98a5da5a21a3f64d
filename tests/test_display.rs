use figgie_engine::belief::RoundBelief;
use figgie_engine::config::EngineConfig;
use figgie_engine::display::{belief_table, layout_table, probability_bar};
use figgie_engine::players::Roster;
use figgie_engine::suit::SuitCounts;
use figgie_engine::valuation::distribution;

fn plain() {
    colored::control::set_override(false);
}

#[test]
fn test_layout_table_lists_every_layout() {
    plain();
    let dist = distribution(&SuitCounts::default()).unwrap();
    let table = layout_table(&dist);
    assert!(table.contains("Probability"));
    assert!(table.contains("Majority"));
    // uniform prior: each of the 12 layouts at 1/12
    assert_eq!(table.matches("8.3%").count(), 12);
}

#[test]
fn test_layout_table_shows_ruled_out_layouts() {
    plain();
    // 11 known spades leaves only the three 12-spade layouts
    let dist = distribution(&SuitCounts::new(11, 0, 0, 0)).unwrap();
    let table = layout_table(&dist);
    assert_eq!(table.matches("0.0%").count(), 9);
}

#[test]
fn test_belief_table_rows() {
    plain();
    let roster = Roster::new("me", &["alice", "bob"]).unwrap();
    let belief = RoundBelief::new(roster, SuitCounts::new(0, 0, 5, 3), &EngineConfig::default());
    let table = belief_table(&belief, 1.1).unwrap();
    for header in ["Suit", "Known", "Held", "P(goal)", "Buy EV", "Sell EV"] {
        assert!(table.contains(header), "missing {header}");
    }
    assert!(belief_table(&belief, 0.5).is_err());
}

#[test]
fn test_probability_bar_width() {
    plain();
    assert_eq!(probability_bar(0.5, 4), "\u{2588}\u{2588}\u{2591}\u{2591} 50.0%");
    assert_eq!(probability_bar(1.5, 4), "\u{2588}\u{2588}\u{2588}\u{2588} 150.0%");
}
