use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::domain::services::{
        audit_service::AuditService, current_user_provider::CurrentUserProvider,
    },
    catalog::{
        application::{
            command_services::catalog_command_service_impl::CatalogCommandServiceImpl,
            query_services::catalog_query_service_impl::CatalogQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_product_repository_impl::SqlxProductRepositoryImpl,
        interfaces::rest::controllers::catalog_rest_controller::{
            CatalogRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_catalog_router(
    pool: PgPool,
    audit_service: Arc<dyn AuditService>,
    current_user_provider: Arc<dyn CurrentUserProvider>,
) -> Router {
    let product_repository = Arc::new(SqlxProductRepositoryImpl::new(pool));

    let command_service = Arc::new(CatalogCommandServiceImpl::new(
        product_repository.clone(),
        audit_service,
    ));
    let query_service = Arc::new(CatalogQueryServiceImpl::new(product_repository));

    router(CatalogRestControllerState {
        command_service,
        query_service,
        current_user_provider,
    })
}
