use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::request_password_reset::IRequestPasswordResetUseCase;
use crate::auth::application::use_cases::reset_password::IResetPasswordUseCase;
use crate::auth::application::use_cases::user_bio::IFetchBioUseCase;
use crate::auth::application::use_cases::user_settings::IUpdateSettingsUseCase;
use crate::auth::application::AuthUseCases;
use crate::education::application::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, GetEducationUseCase, UpdateEducationUseCase,
};
use crate::education::application::EducationUseCases;
use crate::message::application::use_cases::{MarkMessageReadUseCase, SubmitMessageUseCase};
use crate::message::application::MessageUseCases;
use crate::project::application::use_cases::create_project::CreateProjectUseCase;
use crate::project::application::use_cases::delete_project::DeleteProjectUseCase;
use crate::project::application::use_cases::fetch_projects::GetProjectsUseCase;
use crate::project::application::use_cases::update_project::UpdateProjectUseCase;
use crate::project::application::ProjectUseCases;
use crate::skill::application::use_cases::CreateSkillUseCase;
use crate::skill::application::SkillUseCases;
use crate::stats::application::StatsUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where everything is a stub, then lets a test swap in
/// the one or two use cases it actually exercises.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    project: ProjectUseCases,
    education: EducationUseCases,
    skill: SkillUseCases,
    message: MessageUseCases,
    stats: StatsUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
                request_password_reset: Arc::new(StubRequestPasswordResetUseCase),
                reset_password: Arc::new(StubResetPasswordUseCase),
                fetch_settings: Arc::new(StubFetchSettingsUseCase),
                update_settings: Arc::new(StubUpdateSettingsUseCase),
                update_theme: Arc::new(StubUpdateThemeUseCase),
                fetch_bio: Arc::new(StubFetchBioUseCase),
                update_bio: Arc::new(StubUpdateBioUseCase),
            },
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetProjectByIdUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            education: EducationUseCases {
                get_list: Arc::new(StubGetEducationUseCase),
                get_single: Arc::new(StubGetEducationByIdUseCase),
                create: Arc::new(StubCreateEducationUseCase),
                update: Arc::new(StubUpdateEducationUseCase),
                delete: Arc::new(StubDeleteEducationUseCase),
            },
            skill: SkillUseCases {
                get_list: Arc::new(StubGetSkillsUseCase),
                get_single: Arc::new(StubGetSkillByIdUseCase),
                create: Arc::new(StubCreateSkillUseCase),
                update: Arc::new(StubUpdateSkillUseCase),
                delete: Arc::new(StubDeleteSkillUseCase),
            },
            message: MessageUseCases {
                submit: Arc::new(StubSubmitMessageUseCase),
                get_list: Arc::new(StubGetMessagesUseCase),
                get_single: Arc::new(StubGetMessageByIdUseCase),
                mark_read: Arc::new(StubMarkMessageReadUseCase),
                delete: Arc::new(StubDeleteMessageUseCase),
                unread_count: Arc::new(StubUnreadCountUseCase),
            },
            stats: StatsUseCases {
                fetch: Arc::new(StubFetchStatsUseCase),
                record: Arc::new(StubRecordMetricUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Auth
    pub fn with_login(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl IRequestPasswordResetUseCase + 'static,
    ) -> Self {
        self.auth.request_password_reset = Arc::new(uc);
        self
    }

    pub fn with_reset_password(mut self, uc: impl IResetPasswordUseCase + 'static) -> Self {
        self.auth.reset_password = Arc::new(uc);
        self
    }

    pub fn with_update_settings(mut self, uc: impl IUpdateSettingsUseCase + 'static) -> Self {
        self.auth.update_settings = Arc::new(uc);
        self
    }

    pub fn with_fetch_bio(mut self, uc: impl IFetchBioUseCase + 'static) -> Self {
        self.auth.fetch_bio = Arc::new(uc);
        self
    }

    // Projects
    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // Education
    pub fn with_get_education(mut self, uc: impl GetEducationUseCase + 'static) -> Self {
        self.education.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_education(mut self, uc: impl CreateEducationUseCase + 'static) -> Self {
        self.education.create = Arc::new(uc);
        self
    }

    pub fn with_update_education(mut self, uc: impl UpdateEducationUseCase + 'static) -> Self {
        self.education.update = Arc::new(uc);
        self
    }

    pub fn with_delete_education(mut self, uc: impl DeleteEducationUseCase + 'static) -> Self {
        self.education.delete = Arc::new(uc);
        self
    }

    // Skills
    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    // Messages
    pub fn with_submit_message(mut self, uc: impl SubmitMessageUseCase + 'static) -> Self {
        self.message.submit = Arc::new(uc);
        self
    }

    pub fn with_mark_message_read(mut self, uc: impl MarkMessageReadUseCase + 'static) -> Self {
        self.message.mark_read = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            project: self.project,
            education: self.education,
            skill: self.skill,
            message: self.message,
            stats: self.stats,
        })
    }
}
