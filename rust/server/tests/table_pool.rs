use std::time::Duration;

use holdem_engine::engine::NewPlayer;
use holdem_engine::settings::GameSettings;
use holdem_server::{TableError, TablePool};

fn settings(table_id: &str) -> GameSettings {
    GameSettings {
        table_id: table_id.to_string(),
        ..GameSettings::default()
    }
}

#[tokio::test]
async fn tables_are_listed_by_id() {
    let pool = TablePool::default();
    pool.create_table(settings("b")).await.unwrap();
    let a = pool.create_table(settings("a")).await.unwrap();
    a.join(NewPlayer::new("ann", "ann", 500)).await.unwrap();

    let list = pool.list().await;
    let ids: Vec<&str> = list.iter().map(|s| s.table_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(list[0].players, 1);
    assert_eq!(list[0].max_players, 9);
    assert_eq!((list[1].small_blind, list[1].big_blind), (1, 2));
    assert_eq!(pool.active_count().await, 2);
}

#[tokio::test]
async fn duplicate_and_invalid_tables_are_refused() {
    let pool = TablePool::default();
    pool.create_table(settings("dup")).await.unwrap();
    assert_eq!(
        pool.create_table(settings("dup")).await.unwrap_err(),
        TableError::Duplicate("dup".to_string())
    );

    let bad = GameSettings {
        big_blind: 0,
        ..settings("bad")
    };
    assert_eq!(pool.create_table(bad).await.unwrap_err().code(), "invalid_settings");
    assert!(matches!(pool.get("bad").await, Err(TableError::NotFound(_))));
}

#[tokio::test]
async fn blank_ids_are_generated() {
    let pool = TablePool::default();
    let table = pool.create_table(settings(" ")).await.unwrap();
    assert_eq!(table.table_id().len(), 36);
    assert!(pool.get(table.table_id()).await.is_ok());
}

#[tokio::test]
async fn closing_stops_the_actor_and_its_streams() {
    let pool = TablePool::default();
    let table = pool.create_table(settings("shut")).await.unwrap();
    table.join(NewPlayer::new("ann", "ann", 500)).await.unwrap();
    let mut sub = pool.subscribe("shut", "ann").await.unwrap();

    pool.close_table("shut").await.unwrap();

    assert!(matches!(table.view().await, Err(TableError::Closed(_))));
    assert!(sub.receiver.recv().await.is_none());
    assert!(matches!(pool.get("shut").await, Err(TableError::NotFound(_))));
    assert!(matches!(
        pool.close_table("shut").await,
        Err(TableError::NotFound(_))
    ));
    // the id is free again
    pool.create_table(settings("shut")).await.unwrap();
}

#[tokio::test]
async fn idle_tables_are_closed() {
    let pool = TablePool::default();
    pool.create_table(settings("quiet")).await.unwrap();
    assert!(pool.close_idle(Duration::from_secs(3600)).await.is_empty());
    assert_eq!(pool.close_idle(Duration::ZERO).await, vec!["quiet".to_string()]);
    assert_eq!(pool.active_count().await, 0);
}

#[tokio::test]
async fn summaries_serialize_for_listings() {
    let pool = TablePool::default();
    let table = pool.create_table(settings("json")).await.unwrap();
    table.join(NewPlayer::new("ann", "ann", 500)).await.unwrap();

    let list = pool.list().await;
    let value = serde_json::to_value(&list[0]).unwrap();
    assert_eq!(value["table_id"], "json");
    assert_eq!(value["players"], 1);
    assert_eq!(value["phase"], "complete");
    assert_eq!(value["small_blind"], 1);
    assert!(value["idle"].is_u64());
}
