use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// The public about-section of the portfolio page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BioView {
    pub bio: Option<String>,
    pub info: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateBioCommand {
    bio: Option<String>,
    info: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateBioCommandError {
    #[error("Bio too long")]
    BioTooLong,
}

impl UpdateBioCommand {
    const MAX_LEN: usize = 10_000;

    pub fn new(
        bio: Option<String>,
        info: Option<String>,
    ) -> Result<Self, UpdateBioCommandError> {
        let bio = normalize(bio);
        let info = normalize(info);

        for field in [&bio, &info].into_iter().flatten() {
            if field.len() > Self::MAX_LEN {
                return Err(UpdateBioCommandError::BioTooLong);
            }
        }

        Ok(Self { bio, info })
    }

    pub fn bio(&self) -> Option<&String> {
        self.bio.as_ref()
    }

    pub fn info(&self) -> Option<&String> {
        self.info.as_ref()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Use Cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BioError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for BioError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::NotFound => BioError::UserNotFound,
            other => BioError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait IFetchBioUseCase: Send + Sync {
    /// Public: returns the site owner's bio, empty if no user is seeded yet.
    async fn execute(&self) -> Result<BioView, BioError>;
}

#[async_trait]
pub trait IUpdateBioUseCase: Send + Sync {
    async fn execute(&self, user_id: i64, command: UpdateBioCommand) -> Result<BioView, BioError>;
}

#[derive(Clone)]
pub struct UserBioService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UserBioService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchBioUseCase for UserBioService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self) -> Result<BioView, BioError> {
        let user = self.repository.first_user().await?;

        Ok(user
            .map(|user| BioView {
                bio: user.bio,
                info: user.info,
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl<R> IUpdateBioUseCase for UserBioService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: i64, command: UpdateBioCommand) -> Result<BioView, BioError> {
        self.repository
            .update_bio(user_id, command.bio().cloned(), command.info().cloned())
            .await?;

        Ok(BioView {
            bio: command.bio().cloned(),
            info: command.info().cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::InMemoryUserRepository;

    #[tokio::test]
    async fn empty_store_yields_empty_bio() {
        let service = UserBioService::new(InMemoryUserRepository::empty());

        let view = IFetchBioUseCase::execute(&service).await.unwrap();

        assert!(view.bio.is_none());
        assert!(view.info.is_none());
    }

    #[tokio::test]
    async fn update_then_fetch_roundtrips() {
        let repo = InMemoryUserRepository::with_admin();
        let user_id = repo.user().unwrap().id;
        let service = UserBioService::new(repo);

        let command = UpdateBioCommand::new(
            Some("I build things.".to_string()),
            Some("Based in Lisbon".to_string()),
        )
        .unwrap();
        IUpdateBioUseCase::execute(&service, user_id, command)
            .await
            .unwrap();

        let view = IFetchBioUseCase::execute(&service).await.unwrap();
        assert_eq!(view.bio.as_deref(), Some("I build things."));
        assert_eq!(view.info.as_deref(), Some("Based in Lisbon"));
    }

    #[tokio::test]
    async fn blank_fields_are_stored_as_none() {
        let repo = InMemoryUserRepository::with_admin();
        let user_id = repo.user().unwrap().id;
        let service = UserBioService::new(repo);

        let command = UpdateBioCommand::new(Some("   ".to_string()), None).unwrap();
        let view = IUpdateBioUseCase::execute(&service, user_id, command)
            .await
            .unwrap();

        assert!(view.bio.is_none());
    }

    #[test]
    fn overlong_bio_is_rejected() {
        let long = "a".repeat(10_001);
        assert!(matches!(
            UpdateBioCommand::new(Some(long), None),
            Err(UpdateBioCommandError::BioTooLong)
        ));
    }
}
