//! # RocketShoes CLI Entry Point
//!
//! ```bash
//! # Show the cart
//! rocketshoes show
//!
//! # Add product 5 (again to add one more)
//! rocketshoes add 5
//!
//! # Set product 5 to 3 pairs
//! rocketshoes update 5 3
//!
//! # Remove product 5
//! rocketshoes remove 5
//!
//! # Use a specific config file
//! rocketshoes --config ./cart.toml show
//! ```

use std::process::ExitCode;

use clap::Parser;
use rocketshoes_cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    rocketshoes_cli::run(Cli::parse()).await
}
