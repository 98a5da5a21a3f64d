use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FiggieResult;
use crate::events::{GameEvent, GameEventHandler};
use crate::policy::Order;

/// A recorded sequence of game events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub events: Vec<GameEvent>,
}

impl Transcript {
    pub fn from_json(json: &str) -> FiggieResult<Transcript> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> FiggieResult<Transcript> {
        let text = fs::read_to_string(path)?;
        Transcript::from_json(&text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub ticks: usize,
    pub orders: usize,
}

/// Feeds every event to `handler` in order. `on_event` sees each event with
/// the orders it produced. Stops at the first error.
pub fn replay<H, F>(handler: &mut H, transcript: &Transcript, mut on_event: F) -> FiggieResult<ReplaySummary>
where
    H: GameEventHandler,
    F: FnMut(&H, &GameEvent, &[Order]),
{
    let mut summary = ReplaySummary::default();
    for (i, event) in transcript.events.iter().enumerate() {
        debug!(index = i, ?event, "replaying");
        let orders = handler.dispatch(event)?;
        summary.events += 1;
        if matches!(event, GameEvent::Tick { .. }) {
            summary.ticks += 1;
        }
        summary.orders += orders.len();
        on_event(handler, event, &orders);
    }
    Ok(summary)
}
