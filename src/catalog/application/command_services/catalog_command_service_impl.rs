use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::access_control::domain::{
    model::value_objects::current_user_id::CurrentUserId,
    services::audit_service::{AuditEventRecord, AuditService},
};
use crate::catalog::{
    domain::{
        model::{
            commands::{
                create_product_command::CreateProductCommand,
                update_product_command::UpdateProductCommand,
            },
            entities::product::Product,
            enums::catalog_domain_error::CatalogDomainError,
        },
        services::catalog_command_service::CatalogCommandService,
    },
    infrastructure::persistence::repositories::product_repository::ProductRepository,
};

pub struct CatalogCommandServiceImpl {
    product_repository: Arc<dyn ProductRepository>,
    audit_service: Arc<dyn AuditService>,
}

impl CatalogCommandServiceImpl {
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        audit_service: Arc<dyn AuditService>,
    ) -> Self {
        Self {
            product_repository,
            audit_service,
        }
    }

    async fn record_audit(&self, event_name: &str, product: &Product, actor: &CurrentUserId) {
        let event = AuditEventRecord::new(
            event_name,
            "product",
            product.id().value().to_string(),
            actor.clone(),
            None,
            Utc::now(),
        );

        if let Err(error) = self.audit_service.record(&event).await {
            tracing::warn!(
                "audit write {} for product {} failed: {}",
                event_name,
                product.id().value(),
                error
            );
        }
    }
}

#[async_trait]
impl CatalogCommandService for CatalogCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateProductCommand,
        actor: &CurrentUserId,
    ) -> Result<Product, CatalogDomainError> {
        let product = self
            .product_repository
            .insert(
                command.title(),
                command.short_description(),
                command.price(),
                command.quantity(),
                command.departament_id(),
            )
            .await?;

        tracing::info!(
            "product {} created by {}",
            product.id().value(),
            actor.value()
        );
        self.record_audit("product_created", &product, actor).await;

        Ok(product)
    }

    async fn handle_update(
        &self,
        command: UpdateProductCommand,
        actor: &CurrentUserId,
    ) -> Result<Product, CatalogDomainError> {
        let mut product = self
            .product_repository
            .find_by_id(command.product_id())
            .await?
            .ok_or(CatalogDomainError::ProductNotFound)?;

        product.apply_update(&command, Utc::now());
        self.product_repository.update(&product).await?;

        tracing::info!(
            "product {} updated by {}",
            product.id().value(),
            actor.value()
        );
        self.record_audit("product_updated", &product, actor).await;

        Ok(product)
    }
}
