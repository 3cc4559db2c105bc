use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{CreateProfileDTO, GetProfileDTO, ProfileDTO, UpdateProfileDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct CreateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl CreateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: CreateProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;

        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let profile = Profile::new(user.id, dto.first_name, dto.last_name, dto.phone_number);

        let stored = self.profile_writer.save(profile).await?;
        self.db_session.commit().await?;

        info!(user_id = %user.id, profile_id = ?stored.id, "Profile created");
        stored.try_into()
    }
}

#[derive(Clone)]
pub struct GetProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: GetProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;

        self.profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?
            .try_into()
    }
}

#[derive(Clone)]
pub struct UpdateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpdateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;

        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        profile.replace_contact(dto.first_name, dto.last_name, dto.phone_number);

        let stored = self.profile_writer.save(profile).await?;
        self.db_session.commit().await?;

        info!(user_id = %user_id, profile_id = ?stored.id, "Profile updated");
        stored.try_into()
    }
}
