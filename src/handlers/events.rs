use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::models::EventView;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

pub async fn list_events(State(state): State<AppState>) -> Response {
    let events: Vec<EventView> = state
        .box_office
        .catalog()
        .list_events()
        .iter()
        .map(EventView::from)
        .collect();

    success(events, "Events retrieved").into_response()
}

pub async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let event = state.box_office.catalog().find_event_by_id(id)?;

    Ok(success(EventView::from(event), "Event retrieved").into_response())
}

pub async fn purchase_ticket(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let ticket = state.box_office.purchase(id).await?;

    Ok(created(ticket, "Ticket purchased").into_response())
}
