use async_trait::async_trait;
use sqlx::PgPool;

use crate::access_control::domain::{
    model::enums::access_control_domain_error::AccessControlDomainError,
    services::audit_service::{AuditEventRecord, AuditService},
};

pub struct SqlxAuditServiceImpl {
    pool: PgPool,
}

impl SqlxAuditServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditService for SqlxAuditServiceImpl {
    async fn record(&self, event: &AuditEventRecord) -> Result<(), AccessControlDomainError> {
        let statement = r#"
            INSERT INTO audit_log (id, event_name, entity_name, entity_id, actor, details, occurred_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(statement)
            .bind(event.id())
            .bind(event.event_name())
            .bind(event.entity_name())
            .bind(event.entity_id())
            .bind(event.actor().value())
            .bind(event.details())
            .bind(event.occurred_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }
}

fn map_infra_error(error: sqlx::Error) -> AccessControlDomainError {
    AccessControlDomainError::InfrastructureError(error.to_string())
}
