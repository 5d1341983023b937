use chrono::{DateTime, Utc};

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            started_at: Utc::now(),
        }
    }
}
