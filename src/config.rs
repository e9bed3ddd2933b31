use std::env;

#[derive(Clone)]
pub struct Config {
    pub application_name: String,
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            application_name: env::var("APPLICATION_NAME")
                .unwrap_or_else(|_| "chassis".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://app.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }
}
