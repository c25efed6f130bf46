use std::sync::Arc;

use tracing::info;

use crate::catalog::EventCatalog;
use crate::models::{Ticket, TicketView};
use crate::store::TicketRepository;
use crate::utils::error::CoreError;

/// Purchase, listing and cancellation on top of the catalog and the ticket
/// store. Each write is awaited before anything that depends on it is read.
#[derive(Clone)]
pub struct BoxOffice {
    catalog: Arc<EventCatalog>,
    tickets: Arc<dyn TicketRepository>,
}

impl BoxOffice {
    pub fn new(catalog: Arc<EventCatalog>, tickets: Arc<dyn TicketRepository>) -> Self {
        Self { catalog, tickets }
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Buys one ticket for `event_id` at the event's current price.
    pub async fn purchase(&self, event_id: i32) -> Result<Ticket, CoreError> {
        let event = self.catalog.find_event_by_id(event_id)?;
        let mut ticket = Ticket::new(event.id, event.price);
        ticket.id = self.tickets.insert(ticket.event_id, ticket.price).await?;

        info!(ticket_id = ticket.id, event = %event.title, "Ticket purchased");
        Ok(ticket)
    }

    pub async fn my_tickets(&self) -> Result<Vec<TicketView>, CoreError> {
        let tickets = self.tickets.list_all().await?;
        Ok(self.catalog.join(tickets))
    }

    /// Cancels a ticket and returns the remaining ones.
    pub async fn cancel(&self, ticket_id: i64) -> Result<Vec<TicketView>, CoreError> {
        self.tickets.delete_by_id(ticket_id).await?;
        self.my_tickets().await
    }

    pub async fn reset(&self) -> Result<(), CoreError> {
        self.tickets.delete_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::store::SqliteTicketStore;

    async fn setup() -> (BoxOffice, Arc<SqliteTicketStore>) {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        let store = Arc::new(SqliteTicketStore::new(&db));
        let office = BoxOffice::new(Arc::new(EventCatalog::festival()), store.clone());
        (office, store)
    }

    #[tokio::test]
    async fn test_purchase_snapshots_event_price() {
        let (office, _) = setup().await;

        let ticket = office.purchase(2).await.unwrap();

        assert!(ticket.is_persisted());
        assert_eq!(ticket.event_id, 2);
        assert_eq!(ticket.price, 44.99);
    }

    #[tokio::test]
    async fn test_purchase_unknown_event_stores_nothing() {
        let (office, _) = setup().await;

        let result = office.purchase(42).await;

        assert!(matches!(result, Err(CoreError::EventNotFound(42))));
        assert!(office.my_tickets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_my_tickets_joins_events() {
        let (office, store) = setup().await;
        office.purchase(0).await.unwrap();
        store.insert(99, 5.0).await.unwrap();

        let views = office.my_tickets().await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(
            views[0].event.as_ref().unwrap().event.title,
            "Limp Schisskit"
        );
        assert!(views[1].event.is_none());
        assert_eq!(views[1].refund(), 5.0);
    }

    #[tokio::test]
    async fn test_cancel_returns_remaining_tickets() {
        let (office, _) = setup().await;
        let first = office.purchase(0).await.unwrap();
        let second = office.purchase(2).await.unwrap();

        let remaining = office.cancel(first.id).await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].ticket, second);
    }

    #[tokio::test]
    async fn test_cancel_unknown_ticket_changes_nothing() {
        let (office, _) = setup().await;
        office.purchase(1).await.unwrap();

        let remaining = office.cancel(777).await.unwrap();

        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let (office, _) = setup().await;
        office.purchase(1).await.unwrap();
        office.purchase(3).await.unwrap();

        office.reset().await.unwrap();

        assert!(office.my_tickets().await.unwrap().is_empty());
    }
}
