use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success};

pub async fn list_tickets(State(state): State<AppState>) -> Result<Response, AppError> {
    let tickets = state.box_office.my_tickets().await?;

    Ok(success(tickets, "Tickets retrieved").into_response())
}

/// Responds with the tickets that remain after the cancellation.
pub async fn cancel_ticket(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let remaining = state.box_office.cancel(id).await?;

    Ok(success(remaining, "Ticket cancelled").into_response())
}

pub async fn clear_tickets(State(state): State<AppState>) -> Result<Response, AppError> {
    state.box_office.reset().await?;

    Ok(empty_success("All tickets removed").into_response())
}
