use crate::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub supabase_url: String,
    pub supabase_service_role_key: String,
    pub supabase_jwt_secret: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            supabase_url: std::env::var("SUPABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("SUPABASE_URL".to_string()))?,
            supabase_service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("SUPABASE_SERVICE_ROLE_KEY".to_string()))?,
            supabase_jwt_secret: std::env::var("SUPABASE_JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("SUPABASE_JWT_SECRET".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}
