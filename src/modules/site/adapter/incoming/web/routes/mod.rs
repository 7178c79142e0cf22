pub mod get_home_page;
pub mod get_section_page;

pub use get_home_page::get_home_page_handler;
pub use get_section_page::get_section_page_handler;
