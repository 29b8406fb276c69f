use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    value_objects::current_user_id::CurrentUserId,
};

#[derive(Clone, Debug)]
pub struct AuditEventRecord {
    id: Uuid,
    event_name: String,
    entity_name: String,
    entity_id: String,
    actor: CurrentUserId,
    details: Option<String>,
    occurred_at: DateTime<Utc>,
}

impl AuditEventRecord {
    pub fn new(
        event_name: impl Into<String>,
        entity_name: impl Into<String>,
        entity_id: impl Into<String>,
        actor: CurrentUserId,
        details: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            event_name: event_name.into(),
            entity_name: entity_name.into(),
            entity_id: entity_id.into(),
            actor,
            details,
            occurred_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn actor(&self) -> &CurrentUserId {
        &self.actor
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[async_trait]
pub trait AuditService: Send + Sync {
    async fn record(&self, event: &AuditEventRecord) -> Result<(), AccessControlDomainError>;
}
