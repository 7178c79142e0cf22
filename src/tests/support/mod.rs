pub mod app_state_builder;
pub mod fixtures;
pub mod gateway;
pub mod stubs;
