//! External auth provider admin client
//!
//! Employee credentials live in a hosted auth service; this client creates
//! users through its admin API. Callers treat the call as best-effort: an
//! employee row without an auth user is kept, not rolled back.

use serde_json::json;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone)]
pub struct AuthProviderClient {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl AuthProviderClient {
    pub fn new(client: reqwest::Client, base_url: String, service_key: String) -> Self {
        Self {
            client,
            base_url,
            service_key,
        }
    }

    /// Create an auth user for a new employee; returns the provider's user id.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        name: &str,
        employee_id: &str,
    ) -> Result<String, BoxError> {
        let url = format!("{}/admin/users", self.base_url.trim_end_matches('/'));
        let resp: serde_json::Value = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .json(&json!({
                "email": email,
                "password": password,
                "email_confirm": true,
                "user_metadata": {
                    "name": name,
                    "role": "employee",
                    "employee_id": employee_id,
                },
            }))
            .send()
            .await?
            .json()
            .await?;

        resp["id"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| format!("Auth user creation failed: {resp}").into())
    }
}
