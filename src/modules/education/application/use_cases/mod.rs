pub mod manage_education;

pub use manage_education::{
    CreateEducationCommand, CreateEducationUseCase, DeleteEducationUseCase, EducationCommandError,
    EducationError, GetEducationByIdUseCase, GetEducationUseCase, ManageEducationService,
    UpdateEducationCommand, UpdateEducationUseCase,
};
