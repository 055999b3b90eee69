// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Transaction build/submit endpoints.
//!
//! These endpoints never sign anything: build returns an unsigned envelope
//! plus metadata, the caller signs out-of-band and posts the signed XDR to
//! submit. A `409 sequence_stale` from submit means the sequence was claimed
//! by another transaction — recover through `/admin/rebuild`, sign again,
//! resubmit. All of them refuse in read-only mode.

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{
        BuildRegisterRequest, BuildTransactionResponse, CreateVerificationRequest, RebuildRequest,
        SubmitRequest, SubmitResponse,
    },
    state::AppState,
};

fn require_live(state: &AppState) -> Result<(), ApiError> {
    if state.passport.is_live() {
        Ok(())
    } else {
        Err(ApiError::read_only_mode())
    }
}

#[utoipa::path(
    post,
    path = "/admin/register/build",
    request_body = BuildRegisterRequest,
    tag = "Admin",
    responses(
        (status = 200, description = "Unsigned transaction", body = BuildTransactionResponse),
        (status = 400, description = "Malformed wallet or source account"),
        (status = 422, description = "Wallet already registered or simulation rejected"),
        (status = 503, description = "Service is in read-only mode"),
    )
)]
pub async fn build_register(
    State(state): State<AppState>,
    Json(request): Json<BuildRegisterRequest>,
) -> Result<Json<BuildTransactionResponse>, ApiError> {
    require_live(&state)?;
    let built = state
        .passport
        .build_register(
            &request.wallet,
            &request.name,
            &request.surnames,
            &request.source_account,
        )
        .await?;
    Ok(Json(built.into()))
}

#[utoipa::path(
    post,
    path = "/admin/register/submit",
    request_body = SubmitRequest,
    tag = "Admin",
    responses(
        (status = 200, description = "Transaction accepted", body = SubmitResponse),
        (status = 400, description = "Empty or undecodable envelope"),
        (status = 409, description = "Stale sequence number; rebuild and resubmit"),
        (status = 502, description = "Network rejected the submission"),
        (status = 503, description = "Service is in read-only mode"),
    )
)]
pub async fn submit_register(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    require_live(&state)?;
    let hash = state.passport.submit(&request.xdr).await?;
    Ok(Json(SubmitResponse { hash }))
}

#[utoipa::path(
    post,
    path = "/admin/create-verification",
    request_body = CreateVerificationRequest,
    tag = "Admin",
    responses(
        (status = 200, description = "Unsigned transaction", body = BuildTransactionResponse),
        (status = 400, description = "Malformed wallet or source account"),
        (status = 422, description = "Contract rejected the verification"),
        (status = 503, description = "Service is in read-only mode"),
    )
)]
pub async fn create_verification(
    State(state): State<AppState>,
    Json(request): Json<CreateVerificationRequest>,
) -> Result<Json<BuildTransactionResponse>, ApiError> {
    require_live(&state)?;
    let built = state
        .passport
        .build_upsert_verification(
            &request.wallet,
            &request.verification_type,
            request.points,
            &request.source_account,
        )
        .await?;
    Ok(Json(built.into()))
}

#[utoipa::path(
    post,
    path = "/admin/rebuild",
    request_body = RebuildRequest,
    tag = "Admin",
    responses(
        (status = 200, description = "Rebuilt unsigned transaction", body = BuildTransactionResponse),
        (status = 400, description = "Malformed envelope or source account"),
        (status = 502, description = "Account could not be loaded"),
        (status = 503, description = "Service is in read-only mode"),
    )
)]
pub async fn rebuild(
    State(state): State<AppState>,
    Json(request): Json<RebuildRequest>,
) -> Result<Json<BuildTransactionResponse>, ApiError> {
    require_live(&state)?;
    let built = state
        .passport
        .reconciler()
        .rebuild_with_current_sequence(&request.xdr, &request.source_account)
        .await?;
    Ok(Json(built.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientMode;
    use crate::state::testing::test_state;
    use axum::http::StatusCode;

    fn register_request() -> BuildRegisterRequest {
        BuildRegisterRequest {
            wallet: "not-a-wallet".to_string(),
            name: "John".to_string(),
            surnames: "Doe".to_string(),
            source_account: "also-not-a-wallet".to_string(),
        }
    }

    #[tokio::test]
    async fn read_only_mode_refuses_builds_and_submits() {
        let state = test_state(ClientMode::ReadOnly, None);

        let err = build_register(State(state.clone()), Json(register_request()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);

        let err = submit_register(
            State(state.clone()),
            Json(SubmitRequest {
                xdr: "AAAA".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);

        let err = rebuild(
            State(state),
            Json(RebuildRequest {
                xdr: "AAAA".to_string(),
                source_account: "G".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn build_rejects_malformed_addresses_before_any_network_io() {
        let state = test_state(ClientMode::Live, None);
        let err = build_register(State(state), Json(register_request()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, Some("invalid_address_format"));
    }

    #[tokio::test]
    async fn submit_rejects_empty_payloads() {
        let state = test_state(ClientMode::Live, None);
        let err = submit_register(
            State(state),
            Json(SubmitRequest {
                xdr: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.kind, Some("serialization_error"));
    }
}
