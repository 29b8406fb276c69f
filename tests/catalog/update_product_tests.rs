use contoso_shop_api::access_control::domain::model::value_objects::current_user_id::CurrentUserId;
use contoso_shop_api::catalog::domain::{
    model::enums::catalog_domain_error::CatalogDomainError,
    services::catalog_command_service::CatalogCommandService,
};

use crate::support::{create_command_harness, product_with_id, update_command};

#[tokio::test]
async fn handle_update_applies_fields_and_persists() {
    let harness = create_command_harness(vec![product_with_id(1)], false, false);

    let result = harness
        .service
        .handle_update(update_command(), &CurrentUserId::anonymous())
        .await;

    let updated = result.expect("update should succeed");
    assert_eq!(updated.id().value(), 1);
    assert_eq!(updated.title().value(), "Widget");
    assert_eq!(updated.short_description().value(), "A small widget");
    assert_eq!(updated.price().value().to_string(), "9.99");
    assert_eq!(updated.quantity(), 5);
    assert_eq!(updated.departament_id().value(), 2);
    assert_eq!(harness.product_repository.updated_ids(), vec![1]);
}

#[tokio::test]
async fn handle_update_keeps_created_at_and_advances_updated_at() {
    let existing = product_with_id(1);
    let created_at = existing.created_at();
    let updated_at_before = existing.updated_at();
    let harness = create_command_harness(vec![existing], false, false);

    let updated = harness
        .service
        .handle_update(update_command(), &CurrentUserId::anonymous())
        .await
        .expect("update should succeed");

    assert_eq!(updated.created_at(), created_at);
    assert!(updated.updated_at() >= updated_at_before);
}

#[tokio::test]
async fn handle_update_records_audit_with_actor() {
    let harness = create_command_harness(vec![product_with_id(1)], false, false);
    let actor = CurrentUserId::new("clerk-7".to_string()).expect("valid user id");

    harness
        .service
        .handle_update(update_command(), &actor)
        .await
        .expect("update should succeed");

    assert_eq!(
        harness.audit_service.recorded(),
        vec![(
            "product_updated".to_string(),
            "1".to_string(),
            "clerk-7".to_string()
        )]
    );
}

#[tokio::test]
async fn handle_update_returns_not_found_for_unknown_product() {
    let harness = create_command_harness(vec![], false, false);

    let result = harness
        .service
        .handle_update(update_command(), &CurrentUserId::anonymous())
        .await;

    assert!(matches!(result, Err(CatalogDomainError::ProductNotFound)));
    assert!(harness.product_repository.updated_ids().is_empty());
    assert!(harness.audit_service.recorded().is_empty());
}

#[tokio::test]
async fn handle_update_propagates_infrastructure_failure_without_audit() {
    let harness = create_command_harness(vec![product_with_id(1)], true, false);

    let result = harness
        .service
        .handle_update(update_command(), &CurrentUserId::anonymous())
        .await;

    assert!(matches!(
        result,
        Err(CatalogDomainError::InfrastructureError(message)) if message == "update failed"
    ));
    assert!(harness.audit_service.recorded().is_empty());
}

#[tokio::test]
async fn handle_update_succeeds_when_audit_is_unavailable() {
    let harness = create_command_harness(vec![product_with_id(1)], false, true);

    let result = harness
        .service
        .handle_update(update_command(), &CurrentUserId::anonymous())
        .await;

    let updated = result.expect("update should succeed despite audit failure");
    assert_eq!(updated.title().value(), "Widget");
    assert_eq!(harness.product_repository.updated_ids(), vec![1]);
}
