mod login_user;
mod request_password_reset;
mod reset_password;
mod user_bio;
mod user_settings;

pub use login_user::{
    __path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo,
};
pub use request_password_reset::{
    __path_request_password_reset_handler, request_password_reset_handler, RequestPasswordResetDto,
};
pub use reset_password::{
    __path_reset_password_handler, reset_password_handler, ResetPasswordDto,
};
pub use user_bio::{get_user_bio_handler, update_user_bio_handler};
pub use user_settings::{
    get_user_settings_handler, update_user_settings_handler, update_user_theme_handler,
};
