use hubfeed_types::Actor;
use tokio::sync::broadcast;

const SELECTION_CAPACITY: usize = 16;

/// "Actor selected" notification channel of a feed cell.
///
/// The UI layer sends when the user interacts with the cell's actor; the
/// presenter never sends. There is no initial value: a subscriber only sees
/// actors sent after it subscribed.
#[derive(Debug, Clone)]
pub struct ActorSelection {
    tx: broadcast::Sender<Actor>,
}

impl Default for ActorSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorSelection {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(SELECTION_CAPACITY);
        Self { tx }
    }

    /// Broadcast a selection. Returns the number of subscribers reached;
    /// nobody listening is not an error.
    pub fn send(&self, actor: Actor) -> usize {
        self.tx.send(actor).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Actor> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
