pub mod entities;
pub mod fields;
pub mod schedule;
pub mod status;
