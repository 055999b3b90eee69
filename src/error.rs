// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::stellar::PassportError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    /// Stable machine-readable discriminant, present for passport failures.
    pub kind: Option<&'static str>,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            kind: None,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Refusal response for build/submit endpoints in read-only mode.
    pub fn read_only_mode() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "service is running in read-only mode",
        )
    }
}

impl From<PassportError> for ApiError {
    fn from(err: PassportError) -> Self {
        let status = match &err {
            PassportError::InvalidAddressFormat { .. } | PassportError::Serialization(_) => {
                StatusCode::BAD_REQUEST
            }
            PassportError::Contract(_) | PassportError::Simulation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            PassportError::SequenceStale(_) => StatusCode::CONFLICT,
            PassportError::AccountLoad(_) | PassportError::Submission(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            kind: Some(err.kind()),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error_kind: self.kind,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
