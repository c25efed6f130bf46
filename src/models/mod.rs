pub mod event;
pub mod ticket;

pub use event::{Event, EventView};
pub use ticket::{Ticket, TicketView};
