pub mod fetch_admin_profile;
pub mod login_admin;
pub mod update_admin_profile;
