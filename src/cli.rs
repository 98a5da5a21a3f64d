use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

use crate::config::EngineConfig;
use crate::display::{
    belief_table, layout_table, print_error, print_section, styled_order, suit_display,
};
use crate::error::FiggieResult;
use crate::events::{FiggieBot, GameEvent};
use crate::logging::init_logging;
use crate::replay::{replay, Transcript};
use crate::suit::{Suit, SuitCounts};
use crate::valuation::{check_majority_constant, distribution, expected_value};

#[derive(Parser)]
#[command(name = "figgie", version = "1.0.0", about = "Figgie belief tracking and card valuation.")]
struct Cli {
    /// Log verbosity (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Level {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the 12 deck layouts and their probability given known card counts
    Layouts {
        /// Known cards per suit as S,C,D,H (e.g., 3,2,6,4)
        #[arg(short, long, default_value = "0,0,0,0")]
        counts: String,
    },
    /// Expected value of buying or selling one card of a suit
    Value {
        /// Suit to value (s, c, d, h)
        suit: String,
        /// Known cards per suit as S,C,D,H
        #[arg(short, long, default_value = "0,0,0,0")]
        counts: String,
        /// Cards of the suit you hold
        #[arg(short, long, default_value = "0")]
        own: u32,
        /// Majority weighting constant (> 1)
        #[arg(short = 'k', long, default_value = "1.1")]
        majority_constant: f64,
    },
    /// Replay a recorded round transcript through the bot
    Replay {
        /// Transcript JSON file
        file: PathBuf,
        /// Engine config JSON file
        #[arg(long)]
        config: Option<PathBuf>,
        /// RNG seed for quote sizing
        #[arg(long, default_value = "0")]
        seed: u64,
        /// Print the belief table after every tick
        #[arg(short, long)]
        verbose: bool,
    },
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.log_level.into());

    let result = match cli.command {
        Commands::Layouts { counts } => cmd_layouts(&counts),
        Commands::Value {
            suit,
            counts,
            own,
            majority_constant,
        } => cmd_value(&suit, &counts, own, majority_constant),
        Commands::Replay {
            file,
            config,
            seed,
            verbose,
        } => cmd_replay(&file, config.as_deref(), seed, verbose),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn cmd_layouts(counts: &str) -> FiggieResult<()> {
    let counts = SuitCounts::parse(counts)?;
    let dist = distribution(&counts)?;
    print_section(&format!("Deck layouts given known cards {}", counts), &layout_table(&dist));
    Ok(())
}

fn cmd_value(suit: &str, counts: &str, own: u32, majority_constant: f64) -> FiggieResult<()> {
    let k = check_majority_constant(majority_constant)?;
    let suit: Suit = suit.parse()?;
    let counts = SuitCounts::parse(counts)?;
    let dist = distribution(&counts)?;
    let buy = expected_value(suit, &dist, own as i32, k)?;
    let sell = expected_value(suit, &dist, own as i32 - 1, k)?;

    println!();
    println!(
        "  {} holding {} with known cards {}",
        suit_display(suit),
        own.to_string().bold(),
        counts
    );
    println!("  {:<10} {}", "Buy EV".bold(), format!("{:.2}", buy).green());
    println!("  {:<10} {}", "Sell EV".bold(), format!("{:.2}", sell).red());
    println!();
    Ok(())
}

fn cmd_replay(
    file: &std::path::Path,
    config: Option<&std::path::Path>,
    seed: u64,
    verbose: bool,
) -> FiggieResult<()> {
    let config = match config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    let k = config.majority_constant;
    let transcript = Transcript::from_path(file)?;
    let mut bot = FiggieBot::new(config, StdRng::seed_from_u64(seed))?;

    let summary = replay(&mut bot, &transcript, |bot, event, orders| {
        if let GameEvent::Tick { view } = event {
            println!(
                "\n{} chips {} | {:.0}s left",
                "Tick".cyan().bold(),
                view.chips,
                view.time_remaining
            );
            if verbose {
                if let Ok(round) = bot.round() {
                    match belief_table(round, k) {
                        Ok(table) => println!("{}", table),
                        Err(e) => print_error(&e.to_string()),
                    }
                }
            }
            for order in orders {
                println!("  {}", styled_order(order));
            }
        }
    })?;

    if let Ok(round) = bot.round() {
        print_section("Final belief", &belief_table(round, k)?);
    }
    println!(
        "\n{} events, {} ticks, {} orders",
        summary.events, summary.ticks, summary.orders
    );
    Ok(())
}
