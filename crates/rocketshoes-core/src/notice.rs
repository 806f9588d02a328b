//! # Notices
//!
//! The user-facing messages a cart operation can produce.
//!
//! ## Notice Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Operation → Notice                                   │
//! │                                                                         │
//! │  Operation        Stock exceeded?    Any other failure                  │
//! │  ─────────        ───────────────    ─────────────────                  │
//! │  Add              StockExceeded      AddFailed                          │
//! │  Remove           (never)            RemoveFailed                       │
//! │  UpdateAmount     StockExceeded      UpdateFailed                       │
//! │                                                                         │
//! │  Successful operations produce no notice.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are rendered in the display language. Brazilian Portuguese is
//! the storefront's original language and the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Operation
// =============================================================================

/// The cart operation a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Operation {
    Add,
    Remove,
    UpdateAmount,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Remove => write!(f, "remove"),
            Operation::UpdateAmount => write!(f, "update_amount"),
        }
    }
}

// =============================================================================
// Notice
// =============================================================================

/// A transient, non-blocking message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Notice {
    /// Adding a product failed.
    AddFailed,

    /// Removing a product failed.
    RemoveFailed,

    /// Changing a product's amount failed.
    UpdateFailed,

    /// The requested amount is more than the stock holds.
    StockExceeded,
}

impl Notice {
    /// Returns the generic failure notice for an operation.
    pub fn failed(operation: Operation) -> Self {
        match operation {
            Operation::Add => Notice::AddFailed,
            Operation::Remove => Notice::RemoveFailed,
            Operation::UpdateAmount => Notice::UpdateFailed,
        }
    }

    /// Renders the notice in the given display language.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::PtBr, Notice::AddFailed) => "Erro na adição do produto",
            (Locale::PtBr, Notice::RemoveFailed) => "Erro na remoção do produto",
            (Locale::PtBr, Notice::UpdateFailed) => "Erro na alteração de quantidade do produto",
            (Locale::PtBr, Notice::StockExceeded) => "Quantidade solicitada fora de estoque",
            (Locale::En, Notice::AddFailed) => "Failed to add product",
            (Locale::En, Notice::RemoveFailed) => "Failed to remove product",
            (Locale::En, Notice::UpdateFailed) => "Failed to change product quantity",
            (Locale::En, Notice::StockExceeded) => "Requested quantity is out of stock",
        }
    }
}

// =============================================================================
// Locale
// =============================================================================

/// Display language for notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,

    /// English.
    #[serde(rename = "en")]
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-BR"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(ValidationError::InvalidFormat {
                field: "locale".to_string(),
                reason: format!("unknown locale '{}'. Valid options: pt-BR, en", other),
            }),
        }
    }
}
