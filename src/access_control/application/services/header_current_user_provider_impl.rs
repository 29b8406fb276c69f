use crate::access_control::domain::{
    model::value_objects::current_user_id::CurrentUserId,
    services::current_user_provider::CurrentUserProvider,
};

pub const USER_ID_HEADER: &str = "x-user-id";

pub struct HeaderCurrentUserProviderImpl;

impl CurrentUserProvider for HeaderCurrentUserProviderImpl {
    fn resolve(&self, user_header: Option<&str>) -> CurrentUserId {
        user_header
            .and_then(|value| CurrentUserId::new(value.to_string()).ok())
            .unwrap_or_else(CurrentUserId::anonymous)
    }
}
