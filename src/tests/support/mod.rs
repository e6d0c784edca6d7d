pub mod app_state_builder;
pub mod appointment_fixtures;
pub mod auth_fixtures;
pub mod auth_helper;
pub mod chat_fixtures;
pub mod stubs;
