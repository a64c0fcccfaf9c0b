pub mod login_user;
pub mod request_password_reset;
pub mod reset_password;
pub mod user_bio;
pub mod user_settings;
