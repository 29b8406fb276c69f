pub mod catalog_command_service_impl;
