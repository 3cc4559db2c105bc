use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn to_profile(row: PgRow) -> AppResult<Profile> {
        Ok(Profile {
            id: Some(Id::new(row.try_get("id")?)),
            user_id: Id::new(row.try_get("user_id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            phone_number: row.try_get("phone_number")?,
        })
    }

    fn find_profile(result: Option<PgRow>) -> AppResult<Option<Profile>> {
        result.map(Self::to_profile).transpose()
    }

    // user_id is UNIQUE and references users(id).
    fn map_write_error(err: sqlx::Error) -> AppError {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return AppError::ProfileAlreadyExists;
            }
            if db_err.is_foreign_key_violation() {
                return AppError::UserNotFound;
            }
        }
        AppError::DatabaseError(err)
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn save(&self, profile: Profile) -> AppResult<Profile> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    let row = match profile.id {
                        None => sqlx::query(
                            r#"
                                INSERT INTO user_profiles
                                    (first_name, last_name, phone_number, user_id)
                                VALUES
                                    ($1, $2, $3, $4)
                                RETURNING
                                    id, first_name, last_name, phone_number, user_id
                            "#,
                        )
                        .bind(&profile.first_name)
                        .bind(&profile.last_name)
                        .bind(&profile.phone_number)
                        .bind(profile.user_id.value)
                        .fetch_one(tx.as_mut())
                        .await
                        .map_err(Self::map_write_error)?,
                        Some(id) => sqlx::query(
                            r#"
                                UPDATE
                                    user_profiles
                                SET
                                    first_name = $2, last_name = $3, phone_number = $4, user_id = $5
                                WHERE
                                    id = $1
                                RETURNING
                                    id, first_name, last_name, phone_number, user_id
                            "#,
                        )
                        .bind(id.value)
                        .bind(&profile.first_name)
                        .bind(&profile.last_name)
                        .bind(&profile.phone_number)
                        .bind(profile.user_id.value)
                        .fetch_optional(tx.as_mut())
                        .await
                        .map_err(Self::map_write_error)?
                        .ok_or(AppError::ProfileNotFound)?,
                    };

                    Self::to_profile(row)
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_id(&self, profile_id: &Id<Profile>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let profile_id = profile_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, first_name, last_name, phone_number, user_id
                            FROM
                                user_profiles
                            WHERE id = $1
                        "#,
                    )
                    .bind(profile_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_profile(result)
                }
                .boxed()
            })
            .await
    }

    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, first_name, last_name, phone_number, user_id
                            FROM
                                user_profiles
                            WHERE user_id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::find_profile(result)
                }
                .boxed()
            })
            .await
    }
}
