//! Application state for backoffice-server

use std::sync::Arc;

use sqlx::PgPool;

use crate::assignment::{AssignmentService, PgRecords};
use crate::auth_provider::AuthProviderClient;
use crate::config::Config;
use crate::notify::{HttpNotifier, Notifier};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Every external collaborator is constructed here once at startup and
/// injected where needed; nothing is created at module load time.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Lead-to-employee assignment workflow
    pub assignments: AssignmentService,
    /// Notification sender client (credentials emails)
    pub notifier: Arc<dyn Notifier>,
    /// External auth provider admin client
    pub auth: AuthProviderClient,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        // One shared HTTP client; the timeout bounds every outbound call so
        // a slow collaborator cannot hold a response open indefinitely.
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.notify_timeout_secs))
            .build()?;

        let notifier: Arc<dyn Notifier> = Arc::new(HttpNotifier::new(
            http.clone(),
            config.notify_base_url.clone(),
        ));
        let records = Arc::new(PgRecords::new(pool.clone()));
        let assignments = AssignmentService::new(records.clone(), records, notifier.clone());
        let auth = AuthProviderClient::new(
            http,
            config.auth_admin_url.clone(),
            config.auth_service_key.clone(),
        );

        Ok(Self {
            pool,
            assignments,
            notifier,
            auth,
        })
    }
}
