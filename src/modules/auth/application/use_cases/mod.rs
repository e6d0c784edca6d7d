pub mod change_password;
pub mod check_user;
pub mod create_user;
pub mod delete_user;
pub mod fetch_profile;
pub mod forgot_password;
pub mod login_user;
pub mod resend_code;
pub mod reset_password;
pub mod seed_admin;
pub mod update_profile;
pub mod verify_user_email;
