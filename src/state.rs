use std::sync::Arc;

use crate::{config::Config, mappings::MappingCatalog, sources::RemoteStore};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<MappingCatalog>,
    pub store: Arc<dyn RemoteStore>,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<MappingCatalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for Arc<dyn RemoteStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
