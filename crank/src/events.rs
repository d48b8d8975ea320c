use solana_sdk::{pubkey::Pubkey, signature::Signature};
use tokio::sync::mpsc;

/// Something the scheduler did or observed for one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct CrankEvent {
    pub handle: Pubkey,
    pub kind: CrankEventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CrankEventKind {
    /// The buffer account changed on chain; `result` is the latest value.
    StateUpdated { result: Vec<u8> },
    /// An update request was handed off for submission.
    AttemptDispatched,
    AttemptSucceeded { signature: Signature },
    AttemptFailed { reason: String },
}

/// Fire-and-forget event channel. Emitting never blocks the scheduler; if
/// the receiving side is gone the event is dropped.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<CrankEvent>,
}

impl EventSink {
    pub fn channel() -> (EventSink, mpsc::UnboundedReceiver<CrankEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (EventSink { tx }, rx)
    }

    pub fn emit(&self, handle: Pubkey, kind: CrankEventKind) {
        let _ = self.tx.send(CrankEvent { handle, kind });
    }
}
