use contoso_shop_api::catalog::interfaces::rest::resources::{
    create_product_request_resource::CreateProductRequestResource,
    error_result_resource::ErrorResultResource,
    update_product_request_resource::UpdateProductRequestResource,
};
use rust_decimal::Decimal;
use validator::Validate;

use crate::support::valid_update_request;

fn violation_codes(request: &UpdateProductRequestResource, field: &str) -> Vec<String> {
    match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => ErrorResultResource::from_validation_errors(&errors)
            .errors
            .into_iter()
            .filter(|violation| violation.field == field)
            .map(|violation| violation.code)
            .collect(),
    }
}

#[test]
fn fully_valid_request_produces_zero_violations() {
    let request = valid_update_request();

    assert!(request.validate().is_ok());
}

#[test]
fn empty_title_fails_both_not_empty_and_length() {
    let mut request = valid_update_request();
    request.title = String::new();

    let codes = violation_codes(&request, "title");
    assert_eq!(codes.len(), 2);
    assert!(codes.contains(&"not_empty".to_string()));
    assert!(codes.contains(&"length".to_string()));
}

#[test]
fn whitespace_title_fails_not_empty_only() {
    let mut request = valid_update_request();
    request.title = "   ".to_string();

    assert_eq!(violation_codes(&request, "title"), vec!["not_empty"]);
}

#[test]
fn title_length_outside_bounds_fails_with_length_violation() {
    let mut request = valid_update_request();

    request.title = "ab".to_string();
    assert_eq!(violation_codes(&request, "title"), vec!["length"]);

    request.title = "a".repeat(51);
    assert_eq!(violation_codes(&request, "title"), vec!["length"]);

    request.title = "abc".to_string();
    assert!(violation_codes(&request, "title").is_empty());

    request.title = "a".repeat(50);
    assert!(violation_codes(&request, "title").is_empty());
}

#[test]
fn short_description_length_outside_bounds_fails_with_length_violation() {
    let mut request = valid_update_request();

    request.short_description = "ab".to_string();
    assert_eq!(
        violation_codes(&request, "short_description"),
        vec!["length"]
    );

    request.short_description = "a".repeat(101);
    assert_eq!(
        violation_codes(&request, "short_description"),
        vec!["length"]
    );

    request.short_description = "a".repeat(100);
    assert!(violation_codes(&request, "short_description").is_empty());
}

#[test]
fn zero_price_fails_greater_than_on_price_alone() {
    let mut request = valid_update_request();
    request.price = Decimal::ZERO;

    let errors = request.validate().expect_err("zero price must not validate");
    let report = ErrorResultResource::from_validation_errors(&errors);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field, "price");
    assert_eq!(report.errors[0].code, "greater_than");
}

#[test]
fn negative_price_fails_greater_than() {
    let mut request = valid_update_request();
    request.price = Decimal::new(-500, 2);

    assert_eq!(violation_codes(&request, "price"), vec!["greater_than"]);
}

#[test]
fn non_positive_departament_fails_greater_than() {
    let mut request = valid_update_request();

    request.departament_id = 0;
    assert_eq!(
        violation_codes(&request, "departament_id"),
        vec!["greater_than"]
    );

    request.departament_id = -3;
    assert_eq!(
        violation_codes(&request, "departament_id"),
        vec!["greater_than"]
    );

    request.departament_id = 1;
    assert!(violation_codes(&request, "departament_id").is_empty());
}

#[test]
fn violations_are_collected_across_fields() {
    let request = UpdateProductRequestResource {
        title: String::new(),
        short_description: "ab".to_string(),
        price: Decimal::ZERO,
        quantity: 5,
        departament_id: 0,
    };

    let errors = request.validate().expect_err("request must not validate");
    let report = ErrorResultResource::from_validation_errors(&errors);

    let fields: Vec<&str> = report
        .errors
        .iter()
        .map(|violation| violation.field.as_str())
        .collect();
    assert!(fields.contains(&"title"));
    assert!(fields.contains(&"short_description"));
    assert!(fields.contains(&"price"));
    assert!(fields.contains(&"departament_id"));
    assert!(!fields.contains(&"quantity"));
}

#[test]
fn violation_entries_carry_messages() {
    let mut request = valid_update_request();
    request.departament_id = 0;

    let errors = request.validate().expect_err("request must not validate");
    let report = ErrorResultResource::from_validation_errors(&errors);

    assert_eq!(
        report.errors[0].message,
        "departament id must be greater than 0"
    );
}

#[test]
fn create_request_shares_the_update_rules() {
    let request = CreateProductRequestResource {
        title: String::new(),
        short_description: "A small widget".to_string(),
        price: Decimal::new(999, 2),
        quantity: 5,
        departament_id: 2,
    };

    let errors = request.validate().expect_err("request must not validate");
    let report = ErrorResultResource::from_validation_errors(&errors);

    let codes: Vec<&str> = report
        .errors
        .iter()
        .map(|violation| violation.code.as_str())
        .collect();
    assert!(codes.contains(&"not_empty"));
    assert!(codes.contains(&"length"));
}
