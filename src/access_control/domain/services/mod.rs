pub mod audit_service;
pub mod current_user_provider;
