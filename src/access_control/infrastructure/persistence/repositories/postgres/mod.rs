pub mod sqlx_audit_service_impl;
