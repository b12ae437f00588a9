use holdem_engine::engine::NewPlayer;
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::settings::GameSettings;
use holdem_server::{init_test_logging, TablePool};
use tracing::Level;

#[tokio::test]
async fn table_activity_is_logged_with_table_and_player() {
    let logs = init_test_logging();
    let pool = TablePool::default();
    let table = pool
        .create_table(GameSettings {
            table_id: "logged".to_string(),
            ..GameSettings::default()
        })
        .await
        .unwrap();
    table.join(NewPlayer::new("ann", "ann", 500)).await.unwrap();
    table.join(NewPlayer::new("ben", "ben", 500)).await.unwrap();
    let _ = table.act(PlayerAction::new("ben", ActionKind::Evict).against("ann")).await;

    let entries = logs.for_table("logged");
    let joined = entries
        .iter()
        .filter(|e| e.message.contains("player joined"))
        .count();
    assert_eq!(joined, 2);

    let rejected = entries
        .iter()
        .find(|e| e.message.contains("action rejected"))
        .expect("rejection logged");
    assert_eq!(rejected.level, Level::WARN);
    assert_eq!(rejected.field("player_id"), Some("ben"));
    assert_eq!(rejected.field("action"), Some("evict"));
}
