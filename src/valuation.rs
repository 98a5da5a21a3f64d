use itertools::Itertools;

use crate::error::{FiggieError, FiggieResult};
use crate::layouts::{all_layouts, DeckLayout, GOAL_CARD_VALUE, LAYOUT_COUNT};
use crate::suit::{Suit, SuitCounts, ALL_SUITS};

/// Probability of each entry of `all_layouts()`, same order.
pub type LayoutDistribution = [f64; LAYOUT_COUNT];

/// `n choose k`, zero when `k > n`.
pub fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    // Each partial product is itself a binomial coefficient, so the division is exact.
    (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
}

/// Relative likelihood of `layout` given the known card totals: the number of
/// ways to draw the observed cards of every suit out of the layout's suit sizes.
pub fn layout_weight(layout: &DeckLayout, observed: &SuitCounts) -> u64 {
    ALL_SUITS
        .iter()
        .map(|&suit| binomial(layout.count(suit), observed[suit]))
        .product()
}

pub fn distribution_over(
    layouts: &[DeckLayout; LAYOUT_COUNT],
    observed: &SuitCounts,
) -> FiggieResult<LayoutDistribution> {
    let weights: Vec<u64> = layouts
        .iter()
        .map(|layout| layout_weight(layout, observed))
        .collect();
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return Err(FiggieError::InconsistentObservations {
            counts: observed.0,
        });
    }
    let mut dist = [0.0; LAYOUT_COUNT];
    for (p, &w) in dist.iter_mut().zip_eq(&weights) {
        *p = w as f64 / total as f64;
    }
    Ok(dist)
}

/// Distribution over the 12 real layouts for the observed per-suit totals.
pub fn distribution(observed: &SuitCounts) -> FiggieResult<LayoutDistribution> {
    distribution_over(all_layouts(), observed)
}

/// Probability that each suit is the goal suit, indexed like `ALL_SUITS`.
pub fn goal_probabilities(dist: &LayoutDistribution) -> [f64; 4] {
    let mut goals = [0.0; 4];
    for (layout, &p) in all_layouts().iter().zip_eq(dist.iter()) {
        goals[layout.goal.index()] += p;
    }
    goals
}

pub fn check_majority_constant(k: f64) -> FiggieResult<f64> {
    if k.is_finite() && k > 1.0 {
        Ok(k)
    } else {
        Err(FiggieError::InvalidMajorityConstant(k))
    }
}

/// Share of the majority bonus earned by the card taking us from `own` to
/// `own + 1`. The shares grow geometrically with ratio `k` and sum to the
/// full payoff over `0..majority`; at or past majority the share is zero.
pub fn majority_value(layout: &DeckLayout, own: i32, k: f64) -> f64 {
    if own >= layout.majority as i32 {
        return 0.0;
    }
    let majority = layout.majority as i32;
    layout.payoff * (1.0 - k) / (1.0 - k.powi(majority)) * k.powi(own)
}

/// Value of one more card of `suit` under `layout` when holding `own`.
pub fn card_value(layout: &DeckLayout, suit: Suit, own: i32, k: f64) -> f64 {
    if !layout.is_goal(suit) {
        return 0.0;
    }
    GOAL_CARD_VALUE + majority_value(layout, own, k)
}

/// Probability-weighted value of one more card of `suit` at holding `own`.
///
/// `own` is signed so the sell side can evaluate `holding - 1` at zero.
pub fn expected_value(
    suit: Suit,
    dist: &LayoutDistribution,
    own: i32,
    majority_constant: f64,
) -> FiggieResult<f64> {
    let k = check_majority_constant(majority_constant)?;
    Ok(all_layouts()
        .iter()
        .zip_eq(dist.iter())
        .map(|(layout, &p)| p * card_value(layout, suit, own, k))
        .sum())
}
