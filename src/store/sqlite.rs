use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::TicketRepository;
use crate::db::Database;
use crate::models::Ticket;
use crate::utils::error::CoreError;

pub struct SqliteTicketStore {
    pool: SqlitePool,
}

impl SqliteTicketStore {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl TicketRepository for SqliteTicketStore {
    async fn insert(&self, event_id: i32, price: f64) -> Result<i64, CoreError> {
        let id = sqlx::query("INSERT INTO tickets (eventID, price) VALUES (?, ?)")
            .bind(event_id)
            .bind(price)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        info!(ticket_id = id, event_id, price, "Ticket stored");
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Ticket>, CoreError> {
        let tickets =
            sqlx::query_as::<_, Ticket>("SELECT id, eventID, price FROM tickets ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        debug!(count = tickets.len(), "Tickets listed");
        Ok(tickets)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), CoreError> {
        let removed = sqlx::query("DELETE FROM tickets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if removed == 0 {
            debug!(ticket_id = id, "No ticket to delete");
        } else {
            info!(ticket_id = id, "Ticket deleted");
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), CoreError> {
        let removed = sqlx::query("DELETE FROM tickets")
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!(removed, "All tickets deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use std::collections::HashSet;
    use std::sync::Arc;

    async fn setup_store() -> SqliteTicketStore {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        SqliteTicketStore::new(&db)
    }

    fn pairs(tickets: &[Ticket]) -> Vec<(i32, f64)> {
        tickets.iter().map(|t| (t.event_id, t.price)).collect()
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_id() {
        let store = setup_store().await;

        let id = store.insert(2, 44.99).await.unwrap();
        assert!(id > 0);

        let tickets = store.list_all().await.unwrap();
        assert_eq!(
            tickets,
            vec![Ticket {
                id,
                event_id: 2,
                price: 44.99
            }]
        );
        assert!(tickets[0].is_persisted());
    }

    #[tokio::test]
    async fn test_repeated_purchases_are_separate_rows() {
        let store = setup_store().await;

        let first = store.insert(1, 29.99).await.unwrap();
        let second = store.insert(1, 29.99).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_buy_two_then_cancel_first() {
        let store = setup_store().await;

        let first = store.insert(0, 24.99).await.unwrap();
        store.insert(2, 44.99).await.unwrap();

        let tickets = store.list_all().await.unwrap();
        assert_eq!(pairs(&tickets), vec![(0, 24.99), (2, 44.99)]);

        store.delete_by_id(first).await.unwrap();

        let tickets = store.list_all().await.unwrap();
        assert_eq!(pairs(&tickets), vec![(2, 44.99)]);
    }

    #[tokio::test]
    async fn test_delete_leaves_other_tickets() {
        let store = setup_store().await;

        let a = store.insert(0, 24.99).await.unwrap();
        let b = store.insert(1, 29.99).await.unwrap();
        let c = store.insert(3, 4.99).await.unwrap();

        store.delete_by_id(b).await.unwrap();

        let ids: Vec<i64> = store.list_all().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let store = setup_store().await;
        store.insert(0, 24.99).await.unwrap();
        let before = store.list_all().await.unwrap();

        store.delete_by_id(12345).await.unwrap();

        assert_eq!(store.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_all_empties_store() {
        let store = setup_store().await;
        store.insert(0, 24.99).await.unwrap();
        store.insert(1, 29.99).await.unwrap();

        store.delete_all().await.unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let store = setup_store().await;

        let first = store.insert(0, 24.99).await.unwrap();
        store.delete_by_id(first).await.unwrap();
        let second = store.insert(0, 24.99).await.unwrap();
        assert!(second > first);

        store.delete_all().await.unwrap();
        let third = store.insert(0, 24.99).await.unwrap();
        assert!(third > second);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(setup_store().await);

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            tasks.spawn(async move { store.insert(i % 4, 1.0).await });
        }

        let mut ids = HashSet::new();
        while let Some(result) = tasks.join_next().await {
            ids.insert(result.unwrap().unwrap());
        }

        assert_eq!(ids.len(), 16);
        assert_eq!(store.list_all().await.unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_tickets_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("tickets.db").display()),
            max_connections: 4,
        };

        let db = Database::connect(&config).await.unwrap();
        db.migrate().await.unwrap();
        let id = SqliteTicketStore::new(&db).insert(2, 44.99).await.unwrap();
        db.close().await;

        let db = Database::connect(&config).await.unwrap();
        db.migrate().await.unwrap();
        let tickets = SqliteTicketStore::new(&db).list_all().await.unwrap();

        assert_eq!(
            tickets,
            vec![Ticket {
                id,
                event_id: 2,
                price: 44.99
            }]
        );
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_storage_error() {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        let store = SqliteTicketStore::new(&db);
        db.close().await;

        assert!(matches!(
            store.insert(0, 24.99).await,
            Err(CoreError::Storage(_))
        ));
        assert!(matches!(store.list_all().await, Err(CoreError::Storage(_))));
    }
}
