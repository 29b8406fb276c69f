use crate::access_control::domain::model::value_objects::current_user_id::CurrentUserId;

pub trait CurrentUserProvider: Send + Sync {
    fn resolve(&self, user_header: Option<&str>) -> CurrentUserId;
}
