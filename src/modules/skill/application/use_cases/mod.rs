pub mod manage_skills;

pub use manage_skills::{
    CreateSkillCommand, CreateSkillUseCase, DeleteSkillUseCase, GetSkillByIdUseCase,
    GetSkillsUseCase, ManageSkillsService, SkillCommandError, SkillError, UpdateSkillCommand,
    UpdateSkillUseCase,
};
