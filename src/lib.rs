pub mod belief;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod inference;
pub mod layouts;
pub mod ledger;
pub mod logging;
pub mod players;
pub mod policy;
pub mod replay;
pub mod suit;
pub mod valuation;
