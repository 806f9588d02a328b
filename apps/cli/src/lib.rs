//! # RocketShoes CLI Library
//!
//! Terminal front end for the RocketShoes cart. Each invocation restores the
//! cart, runs one operation, and prints the result.
//!
//! ## Module Organization
//! ```text
//! rocketshoes_cli/
//! ├── lib.rs          ◄─── You are here (arguments, tracing, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   └── session.rs  ◄─── Database + CartStore + toasts
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── cart.rs     ◄─── show / add / remove / update
//! └── error.rs        ◄─── CliError with machine-readable codes
//! ```
//!
//! ## Output Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ rocketshoes update 5 10                                              │
//! │                                                                         │
//! │  stderr │ Quantidade solicitada fora de estoque   ◄── toast             │
//! │  stderr │ [StockExceeded] Insufficient stock ...  ◄── error detail      │
//! │  stdout │ { "items": [...], "summary": {...} }    ◄── cart after        │
//! │  exit   │ 1                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

#[cfg(test)]
mod testing;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rocketshoes_cart::{CartConfig, CartStore};
use rocketshoes_core::validation::validate_product_id;
use rocketshoes_core::ProductId;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::cart::{self, CartResponse};
use error::{CliError, ErrorCode};
use state::Session;

#[derive(Debug, Parser)]
#[command(name = "rocketshoes")]
#[command(author, version, about = "RocketShoes shopping cart")]
pub struct Cli {
    /// Path to cart.toml (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the cart
    Show,
    /// Add one unit of a product
    Add {
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
    },
    /// Remove a product entirely
    Remove {
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
    },
    /// Set the amount of a product already in the cart
    Update {
        #[arg(value_parser = parse_product_id)]
        id: ProductId,
        amount: u32,
    },
}

fn parse_product_id(raw: &str) -> Result<ProductId, String> {
    validate_product_id(raw).map_err(|e| e.to_string())
}

/// Runs one CLI invocation.
pub async fn run(cli: Cli) -> ExitCode {
    init_tracing();

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<(), CliError> {
    let config = match cli.config {
        Some(path) => CartConfig::load(Some(path))?,
        None => CartConfig::load_or_default(None),
    };
    info!(api = %config.api.base_url, locale = %config.locale(), "Starting RocketShoes cart");

    let mut session = Session::open(&config).await?;

    let outcome = dispatch(session.store(), cli.command).await;

    for toast in session.drain_toasts() {
        eprintln!("{}", toast.message);
    }

    let response = match &outcome {
        Ok(response) => response.clone(),
        Err(_) => cart::show(session.store()),
    };
    let printed = serde_json::to_string_pretty(&response)
        .map_err(|e| CliError::new(ErrorCode::Internal, e.to_string()));

    session.close().await;

    println!("{}", printed?);
    outcome.map(|_| ())
}

/// Runs a parsed command against the store.
pub async fn dispatch(store: &CartStore, command: Command) -> Result<CartResponse, CliError> {
    match command {
        Command::Show => Ok(cart::show(store)),
        Command::Add { id } => cart::add(store, id).await,
        Command::Remove { id } => cart::remove(store, id).await,
        Command::Update { id, amount } => cart::update_amount(store, id, amount).await,
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rocketshoes_cart=trace` - Trace the cart store only
/// - Default: INFO, DEBUG for the rocketshoes crates
///
/// Logs go to stderr so stdout carries only the cart.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rocketshoes=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
