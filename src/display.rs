use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use itertools::Itertools;

use crate::belief::RoundBelief;
use crate::error::FiggieResult;
use crate::layouts::all_layouts;
use crate::policy::{Order, Side};
use crate::suit::{Suit, ALL_SUITS};
use crate::valuation::{goal_probabilities, LayoutDistribution};

pub fn suit_display(suit: Suit) -> String {
    let label = format!("{}{}", suit.to_char(), suit.symbol());
    match suit {
        Suit::Spades | Suit::Clubs => label.white().to_string(),
        Suit::Diamonds | Suit::Hearts => label.red().to_string(),
    }
}

pub fn probability_bar(p: f64, width: usize) -> String {
    let filled = ((p * width as f64).round() as usize).min(width);
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.1}%", p * 100.0);

    if p >= 0.5 {
        format!("{} {}", bar.green(), pct)
    } else if p >= 0.2 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.dimmed(), pct)
    }
}

/// All 12 layouts with their current probability.
pub fn layout_table(dist: &LayoutDistribution) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("s").set_alignment(CellAlignment::Right),
        Cell::new("c").set_alignment(CellAlignment::Right),
        Cell::new("d").set_alignment(CellAlignment::Right),
        Cell::new("h").set_alignment(CellAlignment::Right),
        Cell::new("Goal"),
        Cell::new("Majority").set_alignment(CellAlignment::Right),
        Cell::new("Bonus").set_alignment(CellAlignment::Right),
        Cell::new("Probability"),
    ]);

    for (i, (layout, &p)) in all_layouts().iter().zip_eq(dist.iter()).enumerate() {
        let mut row = vec![Cell::new(i)];
        for suit in ALL_SUITS {
            row.push(Cell::new(layout.count(suit)).set_alignment(CellAlignment::Right));
        }
        row.push(Cell::new(suit_display(layout.goal)));
        row.push(Cell::new(layout.majority).set_alignment(CellAlignment::Right));
        row.push(Cell::new(format!("{:.0}", layout.payoff)).set_alignment(CellAlignment::Right));
        row.push(Cell::new(probability_bar(p, 20)));
        table.add_row(row);
    }

    table.to_string()
}

/// Per-suit view of a round: what we know, what we hold, what a card is worth.
pub fn belief_table(belief: &RoundBelief, majority_constant: f64) -> FiggieResult<String> {
    let dist = belief.layout_probabilities()?;
    let goals = goal_probabilities(&dist);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Suit"),
        Cell::new("Known").set_alignment(CellAlignment::Right),
        Cell::new("Held").set_alignment(CellAlignment::Right),
        Cell::new("P(goal)"),
        Cell::new("Buy EV").set_alignment(CellAlignment::Right),
        Cell::new("Sell EV").set_alignment(CellAlignment::Right),
    ]);

    for suit in ALL_SUITS {
        let buy = belief.expected_buy_value(suit, majority_constant)?;
        let sell = belief.expected_sell_value(suit, majority_constant)?;
        table.add_row(vec![
            Cell::new(suit_display(suit)),
            Cell::new(belief.suit_card_count_estimate(suit)).set_alignment(CellAlignment::Right),
            Cell::new(belief.own_count(suit)).set_alignment(CellAlignment::Right),
            Cell::new(probability_bar(goals[suit.index()], 12)),
            Cell::new(format!("{:.2}", buy)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", sell)).set_alignment(CellAlignment::Right),
        ]);
    }

    Ok(table.to_string())
}

pub fn styled_order(order: &Order) -> String {
    let text = format!("{} {} @ {}", order.side, suit_display(order.suit), order.price);
    match order.side {
        Side::Bid => text.green().bold().to_string(),
        Side::Offer => text.red().bold().to_string(),
    }
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
