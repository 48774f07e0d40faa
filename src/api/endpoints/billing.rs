//! Billing endpoints.
//!
//! `POST /billing/charge` — deduct credits without a balance check.
//! `GET /billing/:user_id` — read the current balance.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;

#[derive(Deserialize)]
pub struct ChargeRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default = "default_amount")]
    pub amount: i64,
}

fn default_amount() -> i64 {
    1
}

#[derive(Serialize)]
pub struct ChargeResponse {
    pub user_id: String,
    pub remaining_credits: i64,
}

#[derive(Serialize)]
pub struct BalanceResponse {
    pub user_id: String,
    pub credits: i64,
}

/// `POST /billing/charge` — deduct credits from a user.
///
/// This is the raw metering hook: no balance check, so the ledger may
/// go negative. Use `/analyze` for the gated path.
pub async fn charge(
    State(ctx): State<ApiContext>,
    Json(payload): Json<ChargeRequest>,
) -> Result<Json<ChargeResponse>, ApiError> {
    // Absent and null both mean the demo account.
    let user_id = payload
        .user_id
        .unwrap_or_else(|| config::DEMO_USER.to_string());
    let remaining = ctx.core.ledger.charge(&user_id, payload.amount)?;

    tracing::info!(
        user_id = %user_id,
        amount = payload.amount,
        remaining,
        "Credits charged"
    );

    Ok(Json(ChargeResponse {
        user_id,
        remaining_credits: remaining,
    }))
}

/// `GET /billing/:user_id` — current credit balance. Unseen users read
/// as zero.
pub async fn balance(
    State(ctx): State<ApiContext>,
    Path(user_id): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let credits = ctx.core.ledger.balance(&user_id)?;

    Ok(Json(BalanceResponse { user_id, credits }))
}
