use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{
    create_cors_layer, create_propagate_request_id_layer, create_security_headers_layer,
    create_set_request_id_layer,
};
use crate::handlers::events::{get_event, list_events, purchase_ticket};
use crate::handlers::tickets::{cancel_ticket, clear_tickets, list_tickets};
use crate::handlers::{about, health_check};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/about", get(about))
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
        .route("/events/:id/tickets", post(purchase_ticket))
        .route("/tickets", get(list_tickets).delete(clear_tickets))
        .route("/tickets/:id", delete(cancel_ticket))
        .with_state(state)
        .layer(create_propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(create_set_request_id_layer())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
}
