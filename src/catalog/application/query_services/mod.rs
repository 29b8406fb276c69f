pub mod catalog_query_service_impl;
