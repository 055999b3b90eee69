// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::stellar::contract::PassportContract;
use crate::stellar::{PassportError, PassportService, StellarGateway};
use crate::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub passport: Arc<PassportService<StellarGateway>>,
    pub store: Arc<RwLock<UserStore>>,
    pub webhook_secret: Option<Arc<str>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, PassportError> {
        let gateway = StellarGateway::new(config);
        let contract = PassportContract::new(&config.contract_id)?;
        let passport = PassportService::new(
            gateway,
            contract,
            config.mode,
            Duration::from_secs(config.tx_timeout_secs),
        );

        Ok(Self {
            passport: Arc::new(passport),
            store: Arc::new(RwLock::new(UserStore::new())),
            webhook_secret: config.webhook_secret.as_deref().map(Arc::from),
        })
    }
}
