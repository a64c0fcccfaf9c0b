use std::sync::Arc;

use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase,
    request_password_reset::IRequestPasswordResetUseCase,
    reset_password::IResetPasswordUseCase,
    user_bio::{IFetchBioUseCase, IUpdateBioUseCase},
    user_settings::{IFetchSettingsUseCase, IUpdateSettingsUseCase, IUpdateThemeUseCase},
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub request_password_reset: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    pub reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub fetch_settings: Arc<dyn IFetchSettingsUseCase + Send + Sync>,
    pub update_settings: Arc<dyn IUpdateSettingsUseCase + Send + Sync>,
    pub update_theme: Arc<dyn IUpdateThemeUseCase + Send + Sync>,
    pub fetch_bio: Arc<dyn IFetchBioUseCase + Send + Sync>,
    pub update_bio: Arc<dyn IUpdateBioUseCase + Send + Sync>,
}
