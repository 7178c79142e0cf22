mod get_home_page_service;
mod get_section_page_service;
mod section_loader;

pub use get_home_page_service::GetHomePageService;
pub use get_section_page_service::GetSectionPageService;
