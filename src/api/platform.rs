// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Read-only query endpoints backed by contract simulation.
//!
//! These work in both client modes — simulation claims no sequence number
//! and never touches Horizon.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ApiError,
    models::{IsHumanResponse, ScoreResponse, StatusResponse, VerificationsResponse},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/platform/get-score/{wallet}",
    params(("wallet" = String, Path, description = "Wallet address (StrKey G...)")),
    tag = "Platform",
    responses(
        (status = 200, description = "Current score", body = ScoreResponse),
        (status = 400, description = "Malformed wallet address"),
        (status = 422, description = "Wallet is not registered"),
    )
)]
pub async fn get_score(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let score = state.passport.get_score(&wallet).await?;
    Ok(Json(ScoreResponse { wallet, score }))
}

#[utoipa::path(
    get,
    path = "/platform/get-verifications/{wallet}",
    params(("wallet" = String, Path, description = "Wallet address (StrKey G...)")),
    tag = "Platform",
    responses(
        (status = 200, description = "Verification records, possibly empty", body = VerificationsResponse),
        (status = 400, description = "Malformed wallet address"),
    )
)]
pub async fn get_verifications(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<VerificationsResponse>, ApiError> {
    let records = state.passport.get_verifications(&wallet).await?;
    Ok(Json(VerificationsResponse {
        wallet,
        verifications: records.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/platform/is-human/{wallet}",
    params(("wallet" = String, Path, description = "Wallet address (StrKey G...)")),
    tag = "Platform",
    responses(
        (status = 200, description = "Threshold decision and score", body = IsHumanResponse),
        (status = 400, description = "Malformed wallet address"),
        (status = 422, description = "Wallet is not registered"),
    )
)]
pub async fn is_human(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<IsHumanResponse>, ApiError> {
    let (is_human, score) = state.passport.is_human(&wallet).await?;
    Ok(Json(IsHumanResponse {
        wallet,
        is_human,
        score,
    }))
}

#[utoipa::path(
    get,
    path = "/platform/get-status/{wallet}",
    params(("wallet" = String, Path, description = "Wallet address (StrKey G...)")),
    tag = "Platform",
    responses(
        (status = 200, description = "Derived verification status", body = StatusResponse),
        (status = 400, description = "Malformed wallet address"),
    )
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let status = state.passport.verification_status(&wallet).await?;
    Ok(Json(StatusResponse { wallet, status }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientMode;
    use crate::state::testing::test_state;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn queries_reject_malformed_wallets() {
        let state = test_state(ClientMode::ReadOnly, None);
        let wallet = "definitely-not-strkey".to_string();

        let err = get_score(State(state.clone()), Path(wallet.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, Some("invalid_address_format"));

        let err = get_verifications(State(state.clone()), Path(wallet.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = is_human(State(state.clone()), Path(wallet.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = get_status(State(state), Path(wallet)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
