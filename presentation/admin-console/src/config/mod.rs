pub mod app_config;
pub mod logging_config;
pub mod seed_config;
