use contoso_shop_api::access_control::{
    application::services::header_current_user_provider_impl::HeaderCurrentUserProviderImpl,
    domain::{
        model::{
            enums::access_control_domain_error::AccessControlDomainError,
            value_objects::current_user_id::{ANONYMOUS_USER, CurrentUserId},
        },
        services::current_user_provider::CurrentUserProvider,
    },
};

#[test]
fn current_user_id_trims_surrounding_whitespace() {
    let user_id = CurrentUserId::new("  clerk-7  ".to_string()).expect("valid user id");

    assert_eq!(user_id.value(), "clerk-7");
}

#[test]
fn current_user_id_rejects_blank_values() {
    assert!(matches!(
        CurrentUserId::new(String::new()),
        Err(AccessControlDomainError::InvalidUserId)
    ));
    assert!(matches!(
        CurrentUserId::new("   ".to_string()),
        Err(AccessControlDomainError::InvalidUserId)
    ));
}

#[test]
fn anonymous_user_id_uses_the_reserved_name() {
    assert_eq!(CurrentUserId::anonymous().value(), ANONYMOUS_USER);
}

#[test]
fn provider_resolves_the_header_value() {
    let provider = HeaderCurrentUserProviderImpl;

    let resolved = provider.resolve(Some("clerk-7"));

    assert_eq!(resolved.value(), "clerk-7");
}

#[test]
fn provider_falls_back_to_anonymous_for_missing_header() {
    let provider = HeaderCurrentUserProviderImpl;

    let resolved = provider.resolve(None);

    assert_eq!(resolved.value(), ANONYMOUS_USER);
}

#[test]
fn provider_falls_back_to_anonymous_for_blank_header() {
    let provider = HeaderCurrentUserProviderImpl;

    let resolved = provider.resolve(Some("   "));

    assert_eq!(resolved.value(), ANONYMOUS_USER);
}
