// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        BuildRegisterRequest, BuildTransactionResponse, CreateUserRequest,
        CreateVerificationRequest, IsHumanResponse, RebuildRequest, ScoreResponse, StatusResponse,
        SubmitRequest, SubmitResponse, TimeboundsDto, UpdateUserRequest, User, VerificationDto,
        VerificationWebhookPayload, VerificationsResponse,
    },
    state::AppState,
    stellar::{VerificationStatus, VerificationType},
};

pub mod admin;
pub mod health;
pub mod platform;
pub mod users;
pub mod webhook;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/admin/register/build", post(admin::build_register))
        .route("/admin/register/submit", post(admin::submit_register))
        .route("/admin/create-verification", post(admin::create_verification))
        .route("/admin/rebuild", post(admin::rebuild))
        .route("/platform/get-score/{wallet}", get(platform::get_score))
        .route(
            "/platform/get-verifications/{wallet}",
            get(platform::get_verifications),
        )
        .route("/platform/is-human/{wallet}", get(platform::is_human))
        .route("/platform/get-status/{wallet}", get(platform::get_status))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{wallet}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/webhooks/verification", post(webhook::verification_webhook))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        admin::build_register,
        admin::submit_register,
        admin::create_verification,
        admin::rebuild,
        platform::get_score,
        platform::get_verifications,
        platform::is_human,
        platform::get_status,
        users::list_users,
        users::create_user,
        users::get_user,
        users::update_user,
        users::delete_user,
        webhook::verification_webhook
    ),
    components(
        schemas(
            BuildRegisterRequest,
            CreateVerificationRequest,
            SubmitRequest,
            RebuildRequest,
            BuildTransactionResponse,
            TimeboundsDto,
            SubmitResponse,
            ScoreResponse,
            VerificationDto,
            VerificationsResponse,
            IsHumanResponse,
            StatusResponse,
            VerificationType,
            VerificationStatus,
            User,
            CreateUserRequest,
            UpdateUserRequest,
            VerificationWebhookPayload
        )
    ),
    tags(
        (name = "Admin", description = "Transaction building and submission"),
        (name = "Platform", description = "Read-only passport queries"),
        (name = "Users", description = "User record management"),
        (name = "Webhooks", description = "Identity provider callbacks"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
