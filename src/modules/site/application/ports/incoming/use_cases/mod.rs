mod get_home_page;
mod get_section_page;

pub use get_home_page::{GetHomePageUseCase, HomeView, PROFILE_UNAVAILABLE};
pub use get_section_page::{
    GetSectionPageError, GetSectionPageUseCase, SectionCards, SectionPage,
};
