pub mod current_user_id;
