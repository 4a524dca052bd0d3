//! Back-office server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration, loaded from the environment once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Base URL of the notification sender (email service)
    pub notify_base_url: String,
    /// Upper bound on a single outbound notification call, in seconds
    pub notify_timeout_secs: u64,
    /// Base URL of the external auth provider's admin API
    pub auth_admin_url: String,
    /// Service key authenticating admin API calls to the auth provider
    pub auth_service_key: String,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            notify_base_url: std::env::var("NOTIFY_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api/email".into()),
            notify_timeout_secs: std::env::var("NOTIFY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            auth_admin_url: std::env::var("AUTH_ADMIN_URL")
                .unwrap_or_else(|_| "http://localhost:9999/auth/v1".into()),
            auth_service_key: Self::require_secret("AUTH_SERVICE_KEY", &environment)?,
            environment,
        })
    }
}
