use std::sync::Arc;

use crate::catalog::EventCatalog;
use crate::db::Database;
use crate::services::BoxOffice;
use crate::store::{SqliteTicketStore, TicketRepository};

/// Shared handler state. Built once in `main` from the opened database.
#[derive(Clone)]
pub struct AppState {
    pub box_office: BoxOffice,
}

impl AppState {
    pub fn new(catalog: Arc<EventCatalog>, tickets: Arc<dyn TicketRepository>) -> Self {
        Self {
            box_office: BoxOffice::new(catalog, tickets),
        }
    }

    pub fn from_database(db: &Database) -> Self {
        Self::new(
            Arc::new(EventCatalog::festival()),
            Arc::new(SqliteTicketStore::new(db)),
        )
    }
}
