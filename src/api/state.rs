use crate::api::config::Config;
use crate::data::database::Database;
use crate::security::jwt::JwtService;

/// Shared handles for every request: the connection pool and the token
/// service built from the loaded settings.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt: JwtService,
}

impl AppState {
    pub fn new(db: Database, config: &Config) -> Self {
        AppState {
            db,
            jwt: JwtService::new(config),
        }
    }
}
