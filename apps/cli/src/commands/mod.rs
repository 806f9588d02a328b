//! # Commands Module
//!
//! The operations a user can run against the cart.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── show, add, remove, update
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ rocketshoes update 5 3                                               │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  Command::Update { id: 5, amount: 3 }                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart::update_amount(store, 5, 3)                                       │
//! │    -> Result<CartResponse, CliError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout: { "items": [...], "summary": {...} }                           │
//! │  stderr: toasts, error detail                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
