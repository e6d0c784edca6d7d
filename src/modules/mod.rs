pub mod appointment;
pub mod auth;
pub mod chat;
pub mod email;
