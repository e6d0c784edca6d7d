mod change_password;
mod check_user;
mod delete_account;
pub mod dto;
mod forgot_password;
mod login_user;
mod profile;
mod register_user;
mod resend_code;
mod reset_password;
mod update_profile;
mod verify_email;

pub use change_password::*;
pub use check_user::*;
pub use delete_account::*;
pub use forgot_password::*;
pub use login_user::*;
pub use profile::*;
pub use register_user::*;
pub use resend_code::*;
pub use reset_password::*;
pub use update_profile::*;
pub use verify_email::*;
