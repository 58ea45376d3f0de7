use crate::config::Config;
use sea_orm::DatabaseConnection;

/// Shared application state
///
/// Domain routers take their own service state; this is only what the
/// cross-cutting handlers (readiness, cleanup) need.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
