use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    /// Inserts a profile without an id, updates the row of a profile with one.
    /// Returns the stored record, identity included.
    async fn save(&self, profile: Profile) -> AppResult<Profile>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_id(&self, profile_id: &Id<Profile>) -> AppResult<Option<Profile>>;
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
}
