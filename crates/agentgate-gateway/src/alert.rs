//! Out-of-band violation alerts.
//!
//! Every VIOLATION is pushed to an `AlertSink` in addition to the audit log.
//! The engine writes to the sink but does not own what happens downstream.
//! Sinks are invoked after the engine lock is released.

use tokio::sync::mpsc;

pub trait AlertSink: Send + Sync {
    /// `line` is the rendered audit entry.
    fn alert(&self, line: &str);
}

/// Default sink: operator-visible `warn!` on target `agentgate::alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn alert(&self, line: &str) {
        tracing::warn!(target: "agentgate::alert", "ALERT: {line}");
    }
}

/// Forwards alerts to an async consumer (pager, webhook relay, ...).
/// A closed receiver is logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct ChannelAlertSink {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelAlertSink {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Convenience constructor returning the sink and its receiver.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AlertSink for ChannelAlertSink {
    fn alert(&self, line: &str) {
        if self.tx.send(format!("ALERT: {line}")).is_err() {
            tracing::debug!(target: "agentgate::alert", "alert receiver closed; dropping alert");
        }
    }
}
