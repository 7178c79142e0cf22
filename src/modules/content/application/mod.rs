pub mod content_use_cases;
pub mod helpers;
pub mod ports;
pub mod services;
