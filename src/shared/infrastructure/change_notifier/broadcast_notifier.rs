use crate::shared::infrastructure::change_notifier::ChangeNotifier;
use tokio::sync::broadcast;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 64;

pub struct BroadcastNotifier<Event: Clone + Send + 'static> {
    sender: broadcast::Sender<Event>,
}

impl<Event: Clone + Send + 'static> BroadcastNotifier<Event> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }
}

impl<Event: Clone + Send + 'static> Default for BroadcastNotifier<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event> ChangeNotifier<Event> for BroadcastNotifier<Event>
where
    Event: Clone + Send + std::fmt::Debug + 'static,
{
    fn publish(&self, event: Event) {
        if let Err(broadcast::error::SendError(dropped)) = self.sender.send(event) {
            trace!(event = ?dropped, "no subscribers for change event");
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}
