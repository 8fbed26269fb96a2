use axum::extract::FromRef;

use crate::registry::ContentRegistry;
use crate::search::SearchVault;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedRegistry = Arc<ContentRegistry>;
pub type GuardedSearchVault = Arc<dyn SearchVault>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub registry: GuardedRegistry,
    pub search_vault: GuardedSearchVault,
    pub version: String,
    pub hash: String,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        registry: GuardedRegistry,
        search_vault: GuardedSearchVault,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            registry,
            search_vault,
            version: env!("CARGO_PKG_VERSION").to_owned(),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedRegistry {
    fn from_ref(input: &ServerState) -> Self {
        input.registry.clone()
    }
}

impl FromRef<ServerState> for GuardedSearchVault {
    fn from_ref(input: &ServerState) -> Self {
        input.search_vault.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
