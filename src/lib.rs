//! Festival event catalog and ticket store, with a small JSON API on top.

pub mod catalog;
pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

pub use catalog::EventCatalog;
pub use db::Database;
pub use services::BoxOffice;
pub use state::AppState;
pub use store::{SqliteTicketStore, TicketRepository};
pub use utils::error::{AppError, CoreError};
