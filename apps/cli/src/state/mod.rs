//! # State Module
//!
//! Everything one CLI invocation holds open while it runs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session                                              │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────────┐  │
//! │  │   Database   │  │ Arc<CartStore>   │  │ toast receiver           │  │
//! │  │  (SQLite     │  │  HttpShopApi     │  │ drained to stderr after  │  │
//! │  │   pool)      │  │  SqliteCart-     │  │ the operation            │  │
//! │  │              │  │  Storage         │  │                          │  │
//! │  └──────────────┘  └──────────────────┘  └──────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod session;

pub use session::Session;
