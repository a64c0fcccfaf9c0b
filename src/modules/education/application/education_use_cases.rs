use std::sync::Arc;

use crate::education::application::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, GetEducationByIdUseCase, GetEducationUseCase,
    UpdateEducationUseCase,
};

#[derive(Clone)]
pub struct EducationUseCases {
    pub get_list: Arc<dyn GetEducationUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetEducationByIdUseCase + Send + Sync>,
    pub create: Arc<dyn CreateEducationUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEducationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEducationUseCase + Send + Sync>,
}
