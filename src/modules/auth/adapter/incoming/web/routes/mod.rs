pub mod admin_profile;
pub mod login_admin;

pub use admin_profile::{
    fetch_admin_profile_handler, update_admin_profile_handler, UpdateAdminProfileRequest,
};
pub use login_admin::{login_admin_handler, LoginAdminRequestDto, LoginAdminResponse};
