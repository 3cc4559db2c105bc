use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        user::User
    }
};
use async_trait::async_trait;

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>>;
}
