//! The fixed festival line-up.
//!
//! The catalog is built once at startup and shared read-only. Tickets refer to
//! events by id, so every lookup has to cope with ids the catalog does not
//! contain.

use crate::models::{Event, EventView, Ticket, TicketView};
use crate::utils::error::CoreError;

#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// The line-up shipped with the app.
    pub fn festival() -> Self {
        Self::new(vec![
            event(
                0,
                "Limp Schisskit",
                "22.11.2025",
                "20:00",
                "Hard-Rock",
                "Abriss pur, von der ersten bis zur letzten Minute!",
                2,
                "b8",
                24.99,
            ),
            event(
                1,
                "RoggnRoller Jonny",
                "23.11.2025",
                "19:00",
                "Rock",
                "The new era of Rock'n Roll",
                1,
                "b7",
                29.99,
            ),
            event(
                2,
                "Harzer Nachtorchester",
                "24.11.2025",
                "21:30",
                "Klassik",
                "Sinfonien unter dem Sternenhimmel",
                3,
                "b9",
                44.99,
            ),
            event(
                3,
                "Open Stage Wernigerode",
                "25.11.2025",
                "16:00",
                "Singer-Songwriter",
                "Neue Stimmen aus der Region",
                1,
                "b6",
                4.99,
            ),
        ])
    }

    pub fn list_events(&self) -> &[Event] {
        &self.events
    }

    pub fn find_event_by_id(&self, id: i32) -> Result<&Event, CoreError> {
        self.events
            .iter()
            .find(|event| event.id == id)
            .ok_or(CoreError::EventNotFound(id))
    }

    /// Resolves each ticket to its event. Dangling references keep the ticket
    /// with `event: None`.
    pub fn join(&self, tickets: Vec<Ticket>) -> Vec<TicketView> {
        tickets
            .into_iter()
            .map(|ticket| {
                let event = self.find_event_by_id(ticket.event_id).ok().map(EventView::from);
                if event.is_none() {
                    tracing::warn!(
                        ticket_id = ticket.id,
                        event_id = ticket.event_id,
                        "Ticket references unknown event"
                    );
                }
                TicketView { ticket, event }
            })
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: i32,
    title: &str,
    date: &str,
    time: &str,
    genre: &str,
    description: &str,
    stage: u32,
    icon_path: &str,
    price: f64,
) -> Event {
    Event {
        id,
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        genre: genre.to_string(),
        description: description.to_string(),
        stage,
        price,
        icon_path: icon_path.to_string(),
    }
}
