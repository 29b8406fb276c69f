pub mod catalog_command_service;
pub mod catalog_query_service;
