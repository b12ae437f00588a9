//! Hosts Hold'em tables: one tokio task per table owns its
//! [`Engine`](holdem_engine::engine::Engine) and processes player requests
//! and timer expiries strictly one at a time.

pub mod actor;
pub mod errors;
pub mod events;
pub mod history;
pub mod logging;
pub mod messages;
pub mod pool;

pub use actor::{TableActor, TableHandle};
pub use errors::TableError;
pub use events::{EventBus, EventSubscription, Notification, Notifier};
pub use history::{HistoryStore, HistoryWriter};
pub use logging::{init_logging, init_test_logging, LogEntry, LogFormat, TestLogSubscriber};
pub use messages::{TableMessage, TableSummary};
pub use pool::TablePool;
