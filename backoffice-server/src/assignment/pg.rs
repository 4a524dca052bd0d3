//! Postgres implementations of the assignment store seams

use async_trait::async_trait;
use shared::models::{EmployeeContact, Lead};
use sqlx::PgPool;

use super::{AssignmentFields, EmployeeDirectory, LeadStore, StoreError};
use crate::db;

/// Store seams backed by the shared connection pool
#[derive(Clone)]
pub struct PgRecords {
    pool: PgPool,
}

impl PgRecords {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadStore for PgRecords {
    async fn find_lead(&self, id: &str) -> Result<Option<Lead>, StoreError> {
        Ok(db::leads::find_by_id(&self.pool, id).await?)
    }

    async fn record_assignment(
        &self,
        lead_id: &str,
        fields: &AssignmentFields,
    ) -> Result<Option<Lead>, StoreError> {
        Ok(db::leads::record_assignment(&self.pool, lead_id, fields).await?)
    }
}

#[async_trait]
impl EmployeeDirectory for PgRecords {
    async fn find_contact(&self, id: &str) -> Result<Option<EmployeeContact>, StoreError> {
        Ok(db::employees::find_contact(&self.pool, id).await?)
    }
}
