pub mod header_current_user_provider_impl;
