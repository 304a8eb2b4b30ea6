// Change notification port.
//
// Purpose
// - Let presentation code re-render derived views whenever a store changes.
//
// Responsibilities
// - Stores publish one event per committed change.
// - Subscribers receive every event published after they subscribed.
//
// Boundaries
// - Publishing never fails the store operation; an event with no listener is dropped.
// - Subscribers get a `tokio::sync::broadcast::Receiver`. It is part of the contract:
//   a receiver that falls more than the channel capacity behind sees `Lagged` and
//   resumes with the oldest retained event. Adapters other than BroadcastNotifier
//   hand out receivers from a broadcast channel they own.

use tokio::sync::broadcast;

pub trait ChangeNotifier<Event: Clone + Send + 'static>: Send + Sync {
    fn publish(&self, event: Event);
    fn subscribe(&self) -> broadcast::Receiver<Event>;
}

pub mod broadcast_notifier;
