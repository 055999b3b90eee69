// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Identity-verification provider webhook.
//!
//! The provider signs the raw request body with HMAC-SHA256 over the shared
//! secret and sends the base64 digest in `X-Signature`. Verification happens
//! against the raw bytes, before any JSON parsing. Deliveries for wallets
//! without a user record are rejected with 404 so the provider retries after
//! the record is created.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use base64ct::{Base64, Encoding};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{
    error::ApiError,
    models::{User, VerificationWebhookPayload},
    state::AppState,
};

type HmacSha256 = Hmac<Sha256>;

/// Signature header set by the provider.
pub const SIGNATURE_HEADER: &str = "X-Signature";

fn verify_signature(secret: &str, body: &[u8], signature_b64: &str) -> Result<(), ApiError> {
    let signature = Base64::decode_vec(signature_b64)
        .map_err(|_| ApiError::unauthorized("signature is not valid base64"))?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| ApiError::unauthorized("invalid webhook secret"))?;
    mac.update(body);
    mac.verify_slice(&signature)
        .map_err(|_| ApiError::unauthorized("signature mismatch"))
}

#[utoipa::path(
    post,
    path = "/webhooks/verification",
    request_body = VerificationWebhookPayload,
    tag = "Webhooks",
    responses(
        (status = 200, description = "Status recorded", body = User),
        (status = 400, description = "Undecodable payload"),
        (status = 401, description = "Missing or invalid signature"),
        (status = 404, description = "No user record for this wallet"),
        (status = 503, description = "Webhook secret is not configured"),
    )
)]
pub async fn verification_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let Some(secret) = state.webhook_secret.as_deref() else {
        return Err(ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "verification webhook is not configured",
        ));
    };

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("missing signature header"))?;
    verify_signature(secret, &body, signature)?;

    let payload: VerificationWebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("undecodable webhook payload: {e}")))?;
    let status = payload.status();

    tracing::info!(
        wallet = %payload.wallet,
        decision = %payload.decision,
        reference = payload.reference.as_deref(),
        "verification decision received"
    );

    let mut store = state.store.write().await;
    let user = store.set_status(&payload.wallet, status)?;
    Ok(Json(user))
}
