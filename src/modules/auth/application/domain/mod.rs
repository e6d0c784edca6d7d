pub mod entities;
pub mod one_time_code;
