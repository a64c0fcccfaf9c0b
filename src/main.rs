pub mod modules;
pub use modules::auth;
pub use modules::education;
pub use modules::email;
pub use modules::message;
pub use modules::project;
pub use modules::skill;
pub use modules::stats;
pub mod api;
pub mod health;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::UserRepositoryJson;
use crate::auth::application::domain::entities::{User, UserSettings};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    login_user::LoginUserUseCase, request_password_reset::RequestPasswordResetUseCase,
    reset_password::ResetPasswordUseCase, user_bio::UserBioService,
    user_settings::UserSettingsService,
};
use crate::auth::application::AuthUseCases;

use crate::education::adapter::outgoing::EducationRepositoryJson;
use crate::education::application::use_cases::ManageEducationService;
use crate::education::application::EducationUseCases;

use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::{EmailNotifier, EmailSender};
use crate::email::application::services::PortfolioEmailService;

use crate::message::adapter::outgoing::MessageRepositoryJson;
use crate::message::application::services::FixedWindowRateLimiter;
use crate::message::application::use_cases::{InboxService, SubmitMessageService};
use crate::message::application::MessageUseCases;

use crate::project::adapter::outgoing::{FsImageStore, ProjectRepositoryJson};
use crate::project::application::ports::outgoing::ImageStore;
use crate::project::application::use_cases::{
    create_project::CreateProjectService, delete_project::DeleteProjectService,
    fetch_projects::FetchProjectsService, update_project::UpdateProjectService,
};
use crate::project::application::ProjectUseCases;

use crate::skill::adapter::outgoing::SkillRepositoryJson;
use crate::skill::application::use_cases::ManageSkillsService;
use crate::skill::application::SkillUseCases;

use crate::stats::adapter::outgoing::StatsRepositoryJson;
use crate::stats::application::ports::outgoing::StatsRepository;
use crate::stats::application::use_cases::StatsService;
use crate::stats::application::StatsUseCases;

use crate::shared::api::json_config::custom_json_config;
use crate::shared::storage::{next_id, JsonStore};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use chrono::Utc;
use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub project: ProjectUseCases,
    pub education: EducationUseCases,
    pub skill: SkillUseCases,
    pub message: MessageUseCases,
    pub stats: StatsUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio backend...");

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            panic!("🚨 FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            env
        );
    }

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".to_string());
    let server_url = format!("{host}:{port}");
    let public_url =
        env::var("PUBLIC_URL").unwrap_or_else(|_| format!("http://{}", server_url));

    // The owner's inbox: contact copies and reset links go here.
    let admin_email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL is not set");

    // SMTP SETUPS
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    // Storage
    let store = Arc::new(JsonStore::new(&data_dir));
    store.ensure_root().await.expect("Failed to create data directory");

    let fs_image_store = FsImageStore::new(&upload_dir);
    fs_image_store
        .ensure_dir()
        .await
        .expect("Failed to create upload directory");
    let image_store: Arc<dyn ImageStore + Send + Sync> = Arc::new(fs_image_store);

    // Auth plumbing
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(BcryptHasher::new());

    let user_repo = UserRepositoryJson::new(Arc::clone(&store));
    seed_admin_user(&user_repo, password_hasher.as_ref(), &admin_email)
        .await
        .expect("Failed to seed admin user");

    // Email
    let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let email_service = PortfolioEmailService::new(sender, admin_email.clone());
    let notifier: Arc<dyn EmailNotifier + Send + Sync> = Arc::new(email_service);

    // Auth use cases
    let settings_service = UserSettingsService::new(user_repo.clone());
    let bio_service = UserBioService::new(user_repo.clone());
    let auth_use_cases = AuthUseCases {
        login: Arc::new(LoginUserUseCase::new(
            user_repo.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        request_password_reset: Arc::new(RequestPasswordResetUseCase::new(
            user_repo.clone(),
            Arc::clone(&notifier),
            format!("{}/reset-password", public_url),
        )),
        reset_password: Arc::new(ResetPasswordUseCase::new(
            user_repo.clone(),
            Arc::clone(&password_hasher),
            Arc::new(BasicPasswordPolicy),
        )),
        fetch_settings: Arc::new(settings_service.clone()),
        update_settings: Arc::new(settings_service.clone()),
        update_theme: Arc::new(settings_service),
        fetch_bio: Arc::new(bio_service.clone()),
        update_bio: Arc::new(bio_service),
    };

    // Project use cases
    let project_repo = ProjectRepositoryJson::new(Arc::clone(&store));
    let fetch_projects = FetchProjectsService::new(project_repo.clone());
    let project_use_cases = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(
            project_repo.clone(),
            Arc::clone(&image_store),
        )),
        get_list: Arc::new(fetch_projects.clone()),
        get_single: Arc::new(fetch_projects),
        update: Arc::new(UpdateProjectService::new(
            project_repo.clone(),
            Arc::clone(&image_store),
        )),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    // Education use cases
    let education_service =
        ManageEducationService::new(EducationRepositoryJson::new(Arc::clone(&store)));
    let education_use_cases = EducationUseCases {
        get_list: Arc::new(education_service.clone()),
        get_single: Arc::new(education_service.clone()),
        create: Arc::new(education_service.clone()),
        update: Arc::new(education_service.clone()),
        delete: Arc::new(education_service),
    };

    // Skill use cases
    let skill_service = ManageSkillsService::new(SkillRepositoryJson::new(Arc::clone(&store)));
    let skill_use_cases = SkillUseCases {
        get_list: Arc::new(skill_service.clone()),
        get_single: Arc::new(skill_service.clone()),
        create: Arc::new(skill_service.clone()),
        update: Arc::new(skill_service.clone()),
        delete: Arc::new(skill_service),
    };

    // Stats use cases
    let stats_repo = StatsRepositoryJson::new(Arc::clone(&store));
    let stats_repo_arc: Arc<dyn StatsRepository + Send + Sync> = Arc::new(stats_repo.clone());
    let stats_service = StatsService::new(stats_repo);
    let stats_use_cases = StatsUseCases {
        fetch: Arc::new(stats_service.clone()),
        record: Arc::new(stats_service),
    };

    // Message use cases
    let message_repo = MessageRepositoryJson::new(Arc::clone(&store));
    let inbox_service = InboxService::new(message_repo.clone());
    let message_use_cases = MessageUseCases {
        submit: Arc::new(SubmitMessageService::new(
            message_repo,
            stats_repo_arc,
            Arc::clone(&notifier),
        )),
        get_list: Arc::new(inbox_service.clone()),
        get_single: Arc::new(inbox_service.clone()),
        mark_read: Arc::new(inbox_service.clone()),
        delete: Arc::new(inbox_service.clone()),
        unread_count: Arc::new(inbox_service),
    };

    let contact_limiter = Arc::new(FixedWindowRateLimiter::contact_default());

    let state = AppState {
        auth: auth_use_cases,
        project: project_use_cases,
        education: education_use_cases,
        skill: skill_use_cases,
        message: message_use_cases,
        stats: stats_use_cases,
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let app = App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&store)))
            .app_data(web::Data::new(Arc::clone(&contact_limiter)))
            .configure(init_routes)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allow_any_method(),
            );

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        let app = app.configure(test_helpers::configure_routes);

        app
    })
    .bind(server_url)?
    .run()
    .await
}

/// First boot on an empty `users.json`: create the admin account from the
/// environment. Without ADMIN_PASSWORD the store stays empty and every
/// protected route is unreachable, which is the safe default.
async fn seed_admin_user(
    repo: &UserRepositoryJson,
    hasher: &(dyn PasswordHasher + Send + Sync),
    admin_email: &str,
) -> anyhow::Result<()> {
    let Ok(password) = env::var("ADMIN_PASSWORD") else {
        warn!("ADMIN_PASSWORD not set; skipping admin seeding");
        return Ok(());
    };

    let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());

    let password_hash = hasher
        .hash_password(&password)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("hashing the admin password")?;

    let now = Utc::now();
    let user = User {
        id: next_id([]),
        username,
        email: admin_email.to_string(),
        password_hash,
        bio: None,
        info: None,
        avatar: None,
        settings: UserSettings::default(),
        reset_token_hash: None,
        reset_token_expires_at: None,
        created_at: now,
        updated_at: now,
    };

    if repo
        .insert_if_empty(user)
        .await
        .context("writing the admin user")?
    {
        info!("Seeded admin account");
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::request_password_reset_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    // User profile
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_settings_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_settings_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_theme_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_user_bio_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_bio_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_by_id_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Education
    cfg.service(crate::education::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::get_education_by_id_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::update_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::delete_education_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skill_by_id_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Messages: the literal unread-count path must beat the {id} matcher
    cfg.service(crate::message::adapter::incoming::web::routes::contact_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::unread_count_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::get_message_by_id_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(crate::message::adapter::incoming::web::routes::delete_message_handler);
    // Stats
    cfg.service(crate::stats::adapter::incoming::web::routes::get_stats_handler);
    cfg.service(crate::stats::adapter::incoming::web::routes::record_metric_handler);
    // OpenAPI document
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json));
}

#[cfg(not(tarpaulin_include))]
async fn openapi_json() -> actix_web::HttpResponse {
    use utoipa::OpenApi;

    actix_web::HttpResponse::Ok().json(crate::api::openapi::ApiDoc::openapi())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
