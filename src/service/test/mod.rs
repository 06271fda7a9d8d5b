use crate::config::Config;

mod game;
mod user;

/// Builds a config pointing at a dead endpoint. Outbound calls made through
/// it fail fast, which only matters for the best-effort paths under test.
fn test_config() -> Config {
    Config {
        database_url: String::new(),
        supabase_url: "http://localhost:1".to_string(),
        supabase_service_role_key: "test-service-role-key".to_string(),
        supabase_jwt_secret: "test-jwt-secret".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}
