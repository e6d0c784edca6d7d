pub mod code;
pub mod password;
pub mod user_profile;
