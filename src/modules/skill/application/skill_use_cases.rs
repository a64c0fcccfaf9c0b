use std::sync::Arc;

use crate::skill::application::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillByIdUseCase, GetSkillsUseCase,
    UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSkillByIdUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}
