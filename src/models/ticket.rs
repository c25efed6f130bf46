use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::event::EventView;

/// A purchased ticket row. `id` is assigned by the store; `0` means the
/// ticket has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: i64,
    #[sqlx(rename = "eventID")]
    #[serde(rename = "eventID")]
    pub event_id: i32,
    /// Price snapshot taken at purchase time.
    pub price: f64,
}

impl Ticket {
    pub fn new(event_id: i32, price: f64) -> Self {
        Self {
            id: 0,
            event_id,
            price,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// A ticket joined back to its catalog event. `event` is `None` when the
/// ticket references an id the catalog does not know.
#[derive(Debug, Clone, Serialize)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub event: Option<EventView>,
}

impl TicketView {
    /// Amount returned to the holder on cancellation.
    pub fn refund(&self) -> f64 {
        self.ticket.price
    }
}
