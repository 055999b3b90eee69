// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! In-memory user store keyed by wallet address.
//!
//! The contract remains the source of truth for scores and verifications;
//! this store only carries the off-chain profile (name, contact details)
//! and the latest webhook decision. One record per wallet.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::stellar::VerificationStatus;

#[derive(Default)]
pub struct UserStore {
    users: HashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.wallet.cmp(&b.wallet));
        users
    }

    pub fn user_by_wallet(&self, wallet: &str) -> Result<User, ApiError> {
        self.users
            .get(wallet)
            .cloned()
            .ok_or_else(|| ApiError::not_found("User not found"))
    }

    pub fn create_user(&mut self, request: CreateUserRequest) -> Result<User, ApiError> {
        if self.users.contains_key(&request.wallet) {
            return Err(ApiError::conflict(
                "A user already exists for this wallet",
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            wallet: request.wallet.clone(),
            name: request.name,
            surnames: request.surnames,
            email: request.email,
            status: VerificationStatus::Unknown,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(request.wallet, user.clone());
        Ok(user)
    }

    pub fn update_user(
        &mut self,
        wallet: &str,
        request: UpdateUserRequest,
    ) -> Result<User, ApiError> {
        let Some(user) = self.users.get_mut(wallet) else {
            return Err(ApiError::not_found("User not found"));
        };

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(surnames) = request.surnames {
            user.surnames = surnames;
        }
        if let Some(email) = request.email {
            user.email = Some(email);
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    pub fn delete_user(&mut self, wallet: &str) -> Result<(), ApiError> {
        if self.users.remove(wallet).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found("User not found"))
        }
    }

    /// Record a webhook decision for a wallet. The record must exist —
    /// webhook deliveries for unknown wallets are rejected, not upserted.
    pub fn set_status(
        &mut self,
        wallet: &str,
        status: VerificationStatus,
    ) -> Result<User, ApiError> {
        let Some(user) = self.users.get_mut(wallet) else {
            return Err(ApiError::not_found("User not found"));
        };
        user.status = status;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}
