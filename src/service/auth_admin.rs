//! Auth-provider admin client.
//!
//! Account deletion on the provider side is best effort: a local profile
//! removal must not fail because the provider is unreachable, so errors are
//! logged and swallowed.

use reqwest::Client;
use uuid::Uuid;

use crate::config::Config;

pub struct AuthAdminService<'a> {
    http: &'a Client,
    config: &'a Config,
}

impl<'a> AuthAdminService<'a> {
    pub fn new(http: &'a Client, config: &'a Config) -> Self {
        Self { http, config }
    }

    /// Deletes the auth-provider account for a user, best effort.
    pub async fn delete_user(&self, user_id: Uuid) {
        let url = format!(
            "{}/auth/v1/admin/users/{}",
            self.config.supabase_url, user_id
        );

        let result = self
            .http
            .delete(&url)
            .bearer_auth(&self.config.supabase_service_role_key)
            .header("apikey", &self.config.supabase_service_role_key)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    "Auth provider rejected account deletion for {}: status {}",
                    user_id,
                    response.status()
                );
            }
            Err(err) => {
                tracing::warn!("Failed to delete auth account for {}: {}", user_id, err);
            }
            Ok(_) => {}
        }
    }
}
