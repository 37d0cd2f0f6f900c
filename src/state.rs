use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, data::Data};

/// Shared by every handler; cheap to clone.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub data: Data,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, data: Data) -> Self {
        AppState {
            data,
            config: Arc::new(config),
        }
    }
}
