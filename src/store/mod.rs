mod sqlite;

pub use sqlite::SqliteTicketStore;

use async_trait::async_trait;

use crate::models::Ticket;
use crate::utils::error::CoreError;

/// Persistence for purchased tickets. Tickets are never updated: a row is
/// either present or deleted, and deleted ids are not handed out again.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Stores a new ticket and returns its freshly assigned id.
    async fn insert(&self, event_id: i32, price: f64) -> Result<i64, CoreError>;

    /// Every stored ticket, in insertion order.
    async fn list_all(&self) -> Result<Vec<Ticket>, CoreError>;

    /// Deleting an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), CoreError>;

    async fn delete_all(&self) -> Result<(), CoreError>;
}
