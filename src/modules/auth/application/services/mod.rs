pub mod admin_profile;
