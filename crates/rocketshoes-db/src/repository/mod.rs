//! # Repository Module
//!
//! Database repository implementations for the cart.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  SqliteCartStorage (rocketshoes-cart)                                  │
//! │       │                                                                 │
//! │       │  db.slots().put("@RocketShoes:cart", snapshot)                 │
//! │       ▼                                                                 │
//! │  SlotRepository                                                        │
//! │  ├── get(&self, key)                                                   │
//! │  └── put(&self, key, value)                                            │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SlotRepository`](slot::SlotRepository) - Named storage slots

pub mod slot;
