//! Fan-out of table updates to connected players and spectators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use holdem_engine::view::Update;
use serde::Serialize;
use tokio::sync::mpsc;

// bounded so a stalled client cannot grow memory; it is dropped instead
const EVENT_CHANNEL_BUFFER: usize = 1000;

/// An update as delivered to one subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub table_id: String,
    /// Set for updates only this player may see
    pub recipient: Option<String>,
    pub update: Update,
}

pub type NotificationSender = mpsc::Sender<Notification>;
pub type NotificationReceiver = mpsc::Receiver<Notification>;

/// Where a table sends the updates its engine produces.
pub trait Notifier: Send + Sync {
    fn send_private(&self, table_id: &str, player_id: &str, update: Update);
    fn broadcast(&self, table_id: &str, update: Update);
}

struct Subscriber {
    id: usize,
    /// `None` for spectators, who only see broadcasts
    player_id: Option<String>,
    sender: NotificationSender,
}

/// Receives a table's updates until dropped.
pub struct EventSubscription {
    bus: EventBus,
    table_id: String,
    subscriber_id: usize,
    pub receiver: NotificationReceiver,
}

impl EventSubscription {
    pub fn receiver(&mut self) -> &mut NotificationReceiver {
        &mut self.receiver
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(&self.table_id, self.subscriber_id);
    }
}

#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<EventBusInner>,
}

#[derive(Default)]
struct EventBusInner {
    subscribers: RwLock<HashMap<String, Vec<Subscriber>>>,
    next_id: AtomicUsize,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<Subscriber>>> {
        self.inner.subscribers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<Subscriber>>> {
        self.inner.subscribers.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Subscribes a seated player: broadcasts plus their private updates.
    pub fn subscribe(&self, table_id: &str, player_id: &str) -> EventSubscription {
        self.subscription(table_id, Some(player_id.to_string()))
    }

    /// Subscribes to broadcasts only.
    pub fn watch(&self, table_id: &str) -> EventSubscription {
        self.subscription(table_id, None)
    }

    fn subscription(&self, table_id: &str, player_id: Option<String>) -> EventSubscription {
        let (subscriber_id, receiver) = self.subscribe_raw(table_id, player_id);
        EventSubscription {
            bus: self.clone(),
            table_id: table_id.to_string(),
            subscriber_id,
            receiver,
        }
    }

    fn subscribe_raw(&self, table_id: &str, player_id: Option<String>) -> (usize, NotificationReceiver) {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_BUFFER);
        let id = self.inner.next_id.fetch_add(1, Ordering::AcqRel);
        tracing::info!(
            table_id,
            player_id = player_id.as_deref().unwrap_or("-"),
            subscriber_id = id,
            "subscribed to table updates"
        );
        self.write()
            .entry(table_id.to_string())
            .or_default()
            .push(Subscriber {
                id,
                player_id,
                sender: tx,
            });
        (id, rx)
    }

    fn deliver(&self, table_id: &str, recipient: Option<&str>, update: Update) {
        let targets: Vec<(usize, NotificationSender)> = {
            let guard = self.read();
            let Some(list) = guard.get(table_id) else {
                tracing::trace!(table_id, "no subscribers for table");
                return;
            };
            list.iter()
                .filter(|s| recipient.is_none() || s.player_id.as_deref() == recipient)
                .map(|s| (s.id, s.sender.clone()))
                .collect()
        };

        let notification = Notification {
            table_id: table_id.to_string(),
            recipient: recipient.map(str::to_string),
            update,
        };
        let mut failed = Vec::new();
        for (id, sender) in targets {
            if let Err(e) = sender.try_send(notification.clone()) {
                tracing::warn!(table_id, subscriber_id = id, error = %e, "dropping subscriber");
                failed.push(id);
            }
        }
        if !failed.is_empty() {
            self.remove_subscribers(table_id, &failed);
        }
    }

    pub fn unsubscribe(&self, table_id: &str, subscriber_id: usize) {
        self.remove_subscribers(table_id, &[subscriber_id]);
    }

    /// Forgets every subscriber of a closed table; their receivers end.
    pub fn drop_table(&self, table_id: &str) {
        self.write().remove(table_id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.read().values().map(Vec::len).sum()
    }

    pub fn table_subscriber_count(&self, table_id: &str) -> usize {
        self.read().get(table_id).map_or(0, Vec::len)
    }

    fn remove_subscribers(&self, table_id: &str, ids: &[usize]) {
        let mut guard = self.write();
        if let Some(list) = guard.get_mut(table_id) {
            list.retain(|s| !ids.contains(&s.id));
            if list.is_empty() {
                guard.remove(table_id);
            }
        }
    }
}

impl Notifier for EventBus {
    fn send_private(&self, table_id: &str, player_id: &str, update: Update) {
        self.deliver(table_id, Some(player_id), update);
    }

    fn broadcast(&self, table_id: &str, update: Update) {
        self.deliver(table_id, None, update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(message: &str) -> Update {
        Update::Status {
            message: message.to_string(),
        }
    }

    #[test]
    fn subscription_drop_unsubscribes() {
        let bus = EventBus::new();
        {
            let _sub = bus.subscribe("t", "alice");
            assert_eq!(bus.subscriber_count(), 1);
        }
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn broadcast_reaches_players_and_spectators() {
        let bus = EventBus::new();
        let mut alice = bus.subscribe("t", "alice");
        let mut watcher = bus.watch("t");
        let mut elsewhere = bus.watch("other");

        bus.broadcast("t", status("ping"));

        assert_eq!(alice.receiver.try_recv().unwrap().update, status("ping"));
        let seen = watcher.receiver.try_recv().unwrap();
        assert_eq!(seen.recipient, None);
        assert_eq!(seen.table_id, "t");
        assert!(elsewhere.receiver.try_recv().is_err());
    }

    #[test]
    fn private_updates_reach_only_their_player() {
        let bus = EventBus::new();
        let mut alice = bus.subscribe("t", "alice");
        let mut bob = bus.subscribe("t", "bob");
        let mut watcher = bus.watch("t");

        bus.send_private("t", "alice", status("secret"));

        let got = alice.receiver.try_recv().unwrap();
        assert_eq!(got.recipient.as_deref(), Some("alice"));
        assert!(bob.receiver.try_recv().is_err());
        assert!(watcher.receiver.try_recv().is_err());
    }

    #[test]
    fn stale_receiver_is_pruned() {
        let bus = EventBus::new();
        let (id, rx) = bus.subscribe_raw("t", None);
        drop(rx);
        bus.broadcast("t", status("gone"));
        assert_eq!(bus.subscriber_count(), 0);
        bus.unsubscribe("t", id);
    }

    #[test]
    fn dropping_a_table_ends_its_streams() {
        let bus = EventBus::new();
        let mut sub = bus.subscribe("t", "alice");
        bus.drop_table("t");
        assert_eq!(bus.table_subscriber_count("t"), 0);
        assert!(matches!(
            sub.receiver.try_recv(),
            Err(mpsc::error::TryRecvError::Disconnected)
        ));
    }
}
