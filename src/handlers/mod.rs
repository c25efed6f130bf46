use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::utils::response::success;

pub mod events;
pub mod tickets;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

#[derive(Serialize)]
struct AboutPayload {
    app: &'static str,
    organizer: &'static str,
    address: [&'static str; 2],
    contact: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "festival-tickets",
    };

    success(payload, "Health check successful").into_response()
}

pub async fn about() -> Response {
    let payload = AboutPayload {
        app: "MyFestivalApp",
        organizer: "Hochschule Harz",
        address: ["Friedrichstr. 57-59", "38855 Wernigerode"],
        contact: "festival@hs-harz.de",
    };

    success(payload, "About").into_response()
}
