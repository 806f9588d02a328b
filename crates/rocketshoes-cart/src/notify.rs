//! # Notifiers
//!
//! Where user-facing notices go once an operation fails.
//!
//! ```text
//! CartStore ── notify(Notice) ──► LogNotifier      → tracing::warn!
//!                             └─► ChannelNotifier  → mpsc → UI toast layer
//! ```
//!
//! Notifying never blocks and never fails the operation that triggered it.

use rocketshoes_core::{Locale, Notice};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{trace, warn};

/// Fire-and-forget sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

// =============================================================================
// Toast
// =============================================================================

/// A notice rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub notice: Notice,
    pub message: &'static str,
}

impl Toast {
    pub fn new(notice: Notice, locale: Locale) -> Self {
        Toast {
            notice,
            message: notice.message(locale),
        }
    }
}

// =============================================================================
// Log Notifier
// =============================================================================

/// Writes notices to the log. Used when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier {
    locale: Locale,
}

impl LogNotifier {
    pub fn new(locale: Locale) -> Self {
        LogNotifier { locale }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        warn!(?notice, message = notice.message(self.locale), "Cart notice");
    }
}

// =============================================================================
// Channel Notifier
// =============================================================================

/// Forwards rendered notices to a UI over an unbounded channel.
///
/// A dropped receiver is not an error; the toast is simply discarded.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Toast>,
    locale: Locale,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiver the UI drains.
    pub fn new(locale: Locale) -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelNotifier { tx, locale }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if self.tx.send(Toast::new(notice, self.locale)).is_err() {
            trace!(?notice, "Toast receiver gone, notice dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_notifier_renders_in_locale() {
        let (notifier, mut rx) = ChannelNotifier::new(Locale::PtBr);

        notifier.notify(Notice::StockExceeded);
        notifier.notify(Notice::RemoveFailed);

        assert_eq!(
            rx.recv().await.unwrap(),
            Toast {
                notice: Notice::StockExceeded,
                message: "Quantidade solicitada fora de estoque",
            }
        );
        assert_eq!(rx.recv().await.unwrap().message, "Erro na remoção do produto");
    }

    #[test]
    fn test_channel_notifier_ignores_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::new(Locale::En);
        drop(rx);

        notifier.notify(Notice::AddFailed);
    }

    #[test]
    fn test_toast_serializes_for_ui() {
        let toast = Toast::new(Notice::UpdateFailed, Locale::En);
        let json = serde_json::to_value(&toast).unwrap();

        assert_eq!(json["notice"], "update_failed");
        assert_eq!(json["message"], "Failed to change product quantity");
    }
}
