//! Pathway webhook endpoint.
//!
//! `POST /pathway/webhook` — acknowledge callbacks from an external
//! document pipeline.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
    pub payload: serde_json::Value,
}

/// `POST /pathway/webhook` — accept a pipeline callback and echo it.
///
/// The payload is logged but not interpreted; the endpoint gives
/// external watchers a stable target to notify.
pub async fn webhook(Json(payload): Json<serde_json::Value>) -> Json<WebhookAck> {
    tracing::info!(payload = %payload, "Pathway webhook received");

    Json(WebhookAck {
        status: "received",
        payload,
    })
}
