//! Shared doubles for unit and route tests: trait-accurate stubs for every
//! use case (used as TestAppStateBuilder defaults) and small in-memory
//! repositories for exercising services without a data directory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::auth::application::domain::entities::{User, UserSettings};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::request_password_reset::{
    IRequestPasswordResetUseCase, RequestPasswordResetCommand, RequestPasswordResetError,
};
use crate::auth::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordCommand, ResetPasswordError,
};
use crate::auth::application::use_cases::user_bio::{
    BioError, BioView, IFetchBioUseCase, IUpdateBioUseCase, UpdateBioCommand,
};
use crate::auth::application::use_cases::user_settings::{
    IFetchSettingsUseCase, IUpdateSettingsUseCase, IUpdateThemeUseCase, SettingsError,
    UpdateSettingsCommand, UpdateThemeCommand,
};

use crate::education::application::use_cases::{
    CreateEducationCommand, CreateEducationUseCase, DeleteEducationUseCase, EducationError,
    GetEducationByIdUseCase, GetEducationUseCase, UpdateEducationCommand, UpdateEducationUseCase,
};
use crate::education::domain::entities::EducationEntry;

use crate::message::application::ports::outgoing::message_repository::{
    CreateMessageData, MessageRepository, MessageRepositoryError,
};
use crate::message::application::use_cases::{
    DeleteMessageUseCase, GetMessageByIdUseCase, GetMessagesUseCase, InboxError,
    MarkMessageReadUseCase, SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase,
    UnreadCountUseCase,
};
use crate::message::application::use_cases::manage_inbox::UnreadCount;
use crate::message::domain::entities::Message;

use crate::project::application::ports::outgoing::image_store::{ImageStore, ImageStoreError};
use crate::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
use crate::project::application::use_cases::create_project::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, ImageUpload,
};
use crate::project::application::use_cases::delete_project::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::project::application::use_cases::fetch_projects::{
    FetchProjectsError, GetProjectByIdUseCase, GetProjectError, GetProjectsUseCase,
};
use crate::project::application::use_cases::update_project::{
    UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::domain::entities::Project;

use crate::skill::application::use_cases::{
    CreateSkillCommand, CreateSkillUseCase, DeleteSkillUseCase, GetSkillByIdUseCase,
    GetSkillsUseCase, SkillError, UpdateSkillCommand, UpdateSkillUseCase,
};
use crate::skill::domain::entities::Skill;

use crate::stats::application::use_cases::{
    FetchStatsUseCase, RecordMetricUseCase, StatsError,
};
use crate::stats::domain::entities::{Metric, Stats};

// ============================================================
// Token provider stub
// ============================================================

enum TokenOutcome {
    Valid(i64),
    Expired,
}

pub struct StubTokenProvider {
    outcome: TokenOutcome,
}

impl StubTokenProvider {
    pub fn valid(user_id: i64) -> Self {
        Self {
            outcome: TokenOutcome::Valid(user_id),
        }
    }

    pub fn expired() -> Self {
        Self {
            outcome: TokenOutcome::Expired,
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _: i64) -> Result<String, TokenError> {
        Ok("stub-token".to_string())
    }

    fn verify_token(&self, _: &str) -> Result<TokenClaims, TokenError> {
        match self.outcome {
            TokenOutcome::Valid(user_id) => Ok(TokenClaims {
                sub: user_id,
                exp: 9_999_999_999,
                iat: 0,
                token_type: "access".to_string(),
            }),
            TokenOutcome::Expired => Err(TokenError::Expired),
        }
    }
}

// ============================================================
// In-memory repositories
// ============================================================

fn sample_admin() -> User {
    let now = Utc::now();
    User {
        id: 1_700_000_000_000,
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        password_hash: "$2b$04$somehash".to_string(),
        bio: None,
        info: None,
        avatar: None,
        settings: UserSettings::default(),
        reset_token_hash: None,
        reset_token_expires_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn empty() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_admin() -> Self {
        Self {
            users: Arc::new(Mutex::new(vec![sample_admin()])),
        }
    }

    /// First stored user, if any.
    pub fn user(&self) -> Option<User> {
        self.users.lock().unwrap().first().cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let email = email.to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.to_lowercase() == email)
            .cloned())
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn first_user(&self) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.lock().unwrap().first().cloned())
    }

    async fn insert_if_empty(&self, user: User) -> Result<bool, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.is_empty() {
            users.push(user);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn set_reset_token(
        &self,
        user_id: i64,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::NotFound)?;
        user.reset_token_hash = Some(token_hash);
        user.reset_token_expires_at = Some(expires_at);
        Ok(())
    }

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.reset_token_hash.as_deref() == Some(token_hash))
            .cloned())
    }

    async fn update_password(
        &self,
        user_id: i64,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::NotFound)?;
        user.password_hash = password_hash;
        user.reset_token_hash = None;
        user.reset_token_expires_at = None;
        Ok(())
    }

    async fn update_settings(
        &self,
        user_id: i64,
        settings: UserSettings,
    ) -> Result<UserSettings, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::NotFound)?;
        user.settings = settings;
        Ok(user.settings.clone())
    }

    async fn update_theme(
        &self,
        user_id: i64,
        theme: String,
    ) -> Result<UserSettings, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::NotFound)?;
        user.settings.theme = theme;
        Ok(user.settings.clone())
    }

    async fn update_bio(
        &self,
        user_id: i64,
        bio: Option<String>,
        info: Option<String>,
    ) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::NotFound)?;
        user.bio = bio;
        user.info = info;
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<Mutex<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    pub fn empty() -> Self {
        Self {
            projects: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_sample() -> Self {
        Self {
            projects: Arc::new(Mutex::new(vec![Project {
                id: 1_700_000_000_000,
                title: "Sample".to_string(),
                description: "A sample project".to_string(),
                technologies: vec!["rust".to_string()],
                image: None,
                github_link: None,
                live_link: None,
                created_at: Utc::now(),
                updated_at: None,
            }])),
        }
    }

    pub fn with_sample_image(image: &str) -> Self {
        let repo = Self::with_sample();
        repo.projects.lock().unwrap()[0].image = Some(image.to_string());
        repo
    }

    pub fn records(&self) -> Vec<Project> {
        self.projects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        Ok(self.records())
    }

    async fn get_by_id(&self, project_id: i64) -> Result<Option<Project>, ProjectRepositoryError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == project_id)
            .cloned())
    }

    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        let mut projects = self.projects.lock().unwrap();
        let project = Project {
            id: crate::shared::storage::next_id(projects.iter().map(|p| p.id)),
            title: data.title,
            description: data.description,
            technologies: data.technologies,
            image: data.image,
            github_link: data.github_link,
            live_link: data.live_link,
            created_at: Utc::now(),
            updated_at: None,
        };
        projects.push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        project_id: i64,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let Some(title) = data.title {
            project.title = title;
        }
        if let Some(description) = data.description {
            project.description = description;
        }
        if let Some(technologies) = data.technologies {
            project.technologies = technologies;
        }
        if let Some(image) = data.image {
            project.image = Some(image);
        }
        if let Some(github_link) = data.github_link {
            project.github_link = Some(github_link);
        }
        if let Some(live_link) = data.live_link {
            project.live_link = Some(live_link);
        }
        project.updated_at = Some(Utc::now());

        Ok(project.clone())
    }

    async fn delete(&self, project_id: i64) -> Result<Project, ProjectRepositoryError> {
        let mut projects = self.projects.lock().unwrap();
        let position = projects
            .iter()
            .position(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        Ok(projects.remove(position))
    }
}

pub struct RecordingImageStore {
    saved: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
    fail_delete: bool,
}

impl RecordingImageStore {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            fail_delete: false,
        }
    }

    pub fn failing_delete() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            fail_delete: true,
        }
    }

    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

impl Default for RecordingImageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn save(&self, _bytes: Vec<u8>, extension: &str) -> Result<String, ImageStoreError> {
        let url = format!("uploads/{}.{}", uuid::Uuid::new_v4(), extension);
        self.saved.lock().unwrap().push(url.clone());
        Ok(url)
    }

    async fn delete(&self, relative_url: &str) -> Result<(), ImageStoreError> {
        if self.fail_delete {
            return Err(ImageStoreError::Io("simulated failure".to_string()));
        }
        self.deleted.lock().unwrap().push(relative_url.to_string());
        Ok(())
    }
}

#[derive(Clone)]
pub struct InMemoryMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    pub fn empty() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_one(name: &str) -> Self {
        Self {
            messages: Arc::new(Mutex::new(vec![Message {
                id: 1_700_000_000_000,
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                company: None,
                project_type: None,
                message: "Hello".to_string(),
                read: false,
                created_at: Utc::now(),
                read_at: None,
            }])),
        }
    }

    pub fn records(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn list(&self) -> Result<Vec<Message>, MessageRepositoryError> {
        Ok(self.records())
    }

    async fn get_by_id(&self, message_id: i64) -> Result<Option<Message>, MessageRepositoryError> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == message_id)
            .cloned())
    }

    async fn create(&self, data: CreateMessageData) -> Result<Message, MessageRepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let message = Message {
            id: crate::shared::storage::next_id(messages.iter().map(|m| m.id)),
            name: data.name,
            email: data.email,
            company: data.company,
            project_type: data.project_type,
            message: data.message,
            read: false,
            created_at: Utc::now(),
            read_at: None,
        };
        messages.push(message.clone());
        Ok(message)
    }

    async fn mark_read(&self, message_id: i64) -> Result<Message, MessageRepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(MessageRepositoryError::NotFound)?;
        if !message.read {
            message.read = true;
            message.read_at = Some(Utc::now());
        }
        Ok(message.clone())
    }

    async fn delete(&self, message_id: i64) -> Result<(), MessageRepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != message_id);
        if messages.len() == before {
            Err(MessageRepositoryError::NotFound)
        } else {
            Ok(())
        }
    }

    async fn unread_count(&self) -> Result<usize, MessageRepositoryError> {
        Ok(self.messages.lock().unwrap().iter().filter(|m| !m.read).count())
    }
}

// ============================================================
// Default use-case stubs (TestAppStateBuilder wiring)
// ============================================================

pub struct StubLoginUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::RepositoryError("not wired in this test".to_string()))
    }
}

pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl IRequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(
        &self,
        _: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError> {
        Ok(())
    }
}

pub struct StubResetPasswordUseCase;

#[async_trait]
impl IResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        Ok(())
    }
}

pub struct StubFetchSettingsUseCase;

#[async_trait]
impl IFetchSettingsUseCase for StubFetchSettingsUseCase {
    async fn execute(&self, _: i64) -> Result<UserSettings, SettingsError> {
        Ok(UserSettings::default())
    }
}

pub struct StubUpdateSettingsUseCase;

#[async_trait]
impl IUpdateSettingsUseCase for StubUpdateSettingsUseCase {
    async fn execute(
        &self,
        _: i64,
        _: UpdateSettingsCommand,
    ) -> Result<UserSettings, SettingsError> {
        Ok(UserSettings::default())
    }
}

pub struct StubUpdateThemeUseCase;

#[async_trait]
impl IUpdateThemeUseCase for StubUpdateThemeUseCase {
    async fn execute(&self, _: i64, _: UpdateThemeCommand) -> Result<UserSettings, SettingsError> {
        Ok(UserSettings::default())
    }
}

pub struct StubFetchBioUseCase;

#[async_trait]
impl IFetchBioUseCase for StubFetchBioUseCase {
    async fn execute(&self) -> Result<BioView, BioError> {
        Ok(BioView::default())
    }
}

pub struct StubUpdateBioUseCase;

#[async_trait]
impl IUpdateBioUseCase for StubUpdateBioUseCase {
    async fn execute(&self, _: i64, _: UpdateBioCommand) -> Result<BioView, BioError> {
        Ok(BioView::default())
    }
}

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _: CreateProjectCommand,
        _: Option<ImageUpload>,
    ) -> Result<Project, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(
            "not wired in this test".to_string(),
        ))
    }
}

pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, FetchProjectsError> {
        Ok(vec![])
    }
}

pub struct StubGetProjectByIdUseCase;

#[async_trait]
impl GetProjectByIdUseCase for StubGetProjectByIdUseCase {
    async fn execute(&self, _: i64) -> Result<Project, GetProjectError> {
        Err(GetProjectError::NotFound)
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _: i64,
        _: UpdateProjectCommand,
        _: Option<ImageUpload>,
    ) -> Result<Project, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _: i64) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

pub struct StubGetEducationUseCase;

#[async_trait]
impl GetEducationUseCase for StubGetEducationUseCase {
    async fn execute(&self) -> Result<Vec<EducationEntry>, EducationError> {
        Ok(vec![])
    }
}

pub struct StubGetEducationByIdUseCase;

#[async_trait]
impl GetEducationByIdUseCase for StubGetEducationByIdUseCase {
    async fn execute(&self, _: i64) -> Result<EducationEntry, EducationError> {
        Err(EducationError::NotFound)
    }
}

pub struct StubCreateEducationUseCase;

#[async_trait]
impl CreateEducationUseCase for StubCreateEducationUseCase {
    async fn execute(&self, _: CreateEducationCommand) -> Result<EducationEntry, EducationError> {
        Err(EducationError::RepositoryError(
            "not wired in this test".to_string(),
        ))
    }
}

pub struct StubUpdateEducationUseCase;

#[async_trait]
impl UpdateEducationUseCase for StubUpdateEducationUseCase {
    async fn execute(
        &self,
        _: i64,
        _: UpdateEducationCommand,
    ) -> Result<EducationEntry, EducationError> {
        Err(EducationError::NotFound)
    }
}

pub struct StubDeleteEducationUseCase;

#[async_trait]
impl DeleteEducationUseCase for StubDeleteEducationUseCase {
    async fn execute(&self, _: i64) -> Result<(), EducationError> {
        Err(EducationError::NotFound)
    }
}

pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<Vec<Skill>, SkillError> {
        Ok(vec![])
    }
}

pub struct StubGetSkillByIdUseCase;

#[async_trait]
impl GetSkillByIdUseCase for StubGetSkillByIdUseCase {
    async fn execute(&self, _: i64) -> Result<Skill, SkillError> {
        Err(SkillError::NotFound)
    }
}

pub struct StubCreateSkillUseCase;

#[async_trait]
impl CreateSkillUseCase for StubCreateSkillUseCase {
    async fn execute(&self, _: CreateSkillCommand) -> Result<Skill, SkillError> {
        Err(SkillError::RepositoryError("not wired in this test".to_string()))
    }
}

pub struct StubUpdateSkillUseCase;

#[async_trait]
impl UpdateSkillUseCase for StubUpdateSkillUseCase {
    async fn execute(&self, _: i64, _: UpdateSkillCommand) -> Result<Skill, SkillError> {
        Err(SkillError::NotFound)
    }
}

pub struct StubDeleteSkillUseCase;

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkillUseCase {
    async fn execute(&self, _: i64) -> Result<(), SkillError> {
        Err(SkillError::NotFound)
    }
}

pub struct StubSubmitMessageUseCase;

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(&self, _: SubmitMessageCommand) -> Result<Message, SubmitMessageError> {
        Err(SubmitMessageError::RepositoryError(
            "not wired in this test".to_string(),
        ))
    }
}

pub struct StubGetMessagesUseCase;

#[async_trait]
impl GetMessagesUseCase for StubGetMessagesUseCase {
    async fn execute(&self) -> Result<Vec<Message>, InboxError> {
        Ok(vec![])
    }
}

pub struct StubGetMessageByIdUseCase;

#[async_trait]
impl GetMessageByIdUseCase for StubGetMessageByIdUseCase {
    async fn execute(&self, _: i64) -> Result<Message, InboxError> {
        Err(InboxError::NotFound)
    }
}

pub struct StubMarkMessageReadUseCase;

#[async_trait]
impl MarkMessageReadUseCase for StubMarkMessageReadUseCase {
    async fn execute(&self, _: i64) -> Result<Message, InboxError> {
        Err(InboxError::NotFound)
    }
}

pub struct StubDeleteMessageUseCase;

#[async_trait]
impl DeleteMessageUseCase for StubDeleteMessageUseCase {
    async fn execute(&self, _: i64) -> Result<(), InboxError> {
        Err(InboxError::NotFound)
    }
}

pub struct StubUnreadCountUseCase;

#[async_trait]
impl UnreadCountUseCase for StubUnreadCountUseCase {
    async fn execute(&self) -> Result<UnreadCount, InboxError> {
        Ok(UnreadCount { count: 0 })
    }
}

pub struct StubFetchStatsUseCase;

#[async_trait]
impl FetchStatsUseCase for StubFetchStatsUseCase {
    async fn execute(&self) -> Result<Stats, StatsError> {
        Ok(Stats::default())
    }
}

pub struct StubRecordMetricUseCase;

#[async_trait]
impl RecordMetricUseCase for StubRecordMetricUseCase {
    async fn execute(&self, _: Metric) -> Result<Stats, StatsError> {
        Ok(Stats::default())
    }
}
