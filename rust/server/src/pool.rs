//! Registry of running tables.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use holdem_engine::engine::Engine;
use holdem_engine::player::Player;
use holdem_engine::settings::GameSettings;
use tokio::sync::RwLock;

use crate::actor::{TableActor, TableHandle};
use crate::errors::TableError;
use crate::events::{EventBus, EventSubscription, Notifier};
use crate::history::HistoryWriter;
use crate::messages::TableSummary;

type RemovedHook = Arc<dyn Fn(&str, &Player) + Send + Sync>;

/// Spawns one [`TableActor`] per table and hands out their handles.
#[derive(Clone)]
pub struct TablePool {
    tables: Arc<RwLock<HashMap<String, TableHandle>>>,
    bus: EventBus,
    history: Option<HistoryWriter>,
    on_removed: Option<RemovedHook>,
}

impl Default for TablePool {
    fn default() -> Self {
        Self::new(EventBus::new())
    }
}

impl TablePool {
    pub fn new(bus: EventBus) -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
            bus,
            history: None,
            on_removed: None,
        }
    }

    /// Every table created afterwards records its hands here.
    pub fn with_history(mut self, history: HistoryWriter) -> Self {
        self.history = Some(history);
        self
    }

    /// Called with the table id and the departing player whenever a player
    /// leaves any table, so wallets can be settled elsewhere.
    pub fn on_player_removed<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &Player) + Send + Sync + 'static,
    {
        self.on_removed = Some(Arc::new(hook));
        self
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Starts a table. A blank table id is replaced with a generated one.
    ///
    /// # Errors
    ///
    /// [`TableError::Settings`] for invalid settings, [`TableError::Duplicate`]
    /// when a table with the id is already running.
    pub async fn create_table(&self, mut settings: GameSettings) -> Result<TableHandle, TableError> {
        if settings.table_id.trim().is_empty() {
            settings.table_id = uuid::Uuid::new_v4().to_string();
        }
        let mut tables = self.tables.write().await;
        if tables.get(&settings.table_id).is_some_and(TableHandle::is_open) {
            return Err(TableError::Duplicate(settings.table_id));
        }

        let mut engine = Engine::new(settings)?;
        if let Some(hook) = &self.on_removed {
            let hook = Arc::clone(hook);
            engine.add_removed_listener(move |table_id, player| hook(table_id, player));
        }
        let notifier: Arc<dyn Notifier> = Arc::new(self.bus.clone());
        let (actor, handle) = TableActor::new(engine, notifier, self.history.clone());
        tokio::spawn(actor.run());

        tracing::info!(table_id = %handle.table_id(), "table created");
        tables.insert(handle.table_id().to_string(), handle.clone());
        Ok(handle)
    }

    pub async fn get(&self, table_id: &str) -> Result<TableHandle, TableError> {
        self.tables
            .read()
            .await
            .get(table_id)
            .filter(|h| h.is_open())
            .cloned()
            .ok_or_else(|| TableError::NotFound(table_id.to_string()))
    }

    /// Player subscription to a running table.
    pub async fn subscribe(
        &self,
        table_id: &str,
        player_id: &str,
    ) -> Result<EventSubscription, TableError> {
        self.get(table_id).await?;
        Ok(self.bus.subscribe(table_id, player_id))
    }

    pub async fn list(&self) -> Vec<TableSummary> {
        let handles: Vec<TableHandle> = self.tables.read().await.values().cloned().collect();
        let mut summaries = Vec::with_capacity(handles.len());
        for handle in handles {
            if let Ok(summary) = handle.summary().await {
                summaries.push(summary);
            }
        }
        summaries.sort_by(|a, b| a.table_id.cmp(&b.table_id));
        summaries
    }

    pub async fn active_count(&self) -> usize {
        self.tables
            .read()
            .await
            .values()
            .filter(|h| h.is_open())
            .count()
    }

    /// Stops a table and disconnects its subscribers.
    pub async fn close_table(&self, table_id: &str) -> Result<(), TableError> {
        let handle = self
            .tables
            .write()
            .await
            .remove(table_id)
            .ok_or_else(|| TableError::NotFound(table_id.to_string()))?;
        // an actor that already stopped has nothing left to close
        let _ = handle.close().await;
        self.bus.drop_table(table_id);
        tracing::info!(table_id, "table removed");
        Ok(())
    }

    /// Closes tables that have not seen a player request for `max_idle`.
    /// Returns the ids closed.
    pub async fn close_idle(&self, max_idle: Duration) -> Vec<String> {
        let idle: Vec<String> = self
            .list()
            .await
            .into_iter()
            .filter(|s| s.idle >= max_idle)
            .map(|s| s.table_id)
            .collect();
        for table_id in &idle {
            let _ = self.close_table(table_id).await;
        }
        idle
    }
}
