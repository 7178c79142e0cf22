pub mod fetch_admin_profile;
pub mod update_admin_profile;

pub use fetch_admin_profile::FetchAdminProfileService;
pub use update_admin_profile::UpdateAdminProfileService;
