use crate::application::app_error::AppError;
use crate::domain::entities::profile::Profile;

#[derive(Debug, Clone)]
pub struct CreateProfileDTO {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetProfileDTO {
    pub user_id: String,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileDTO {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDTO {
    pub id: i32,
    pub user_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl TryFrom<Profile> for ProfileDTO {
    type Error = AppError;

    // A profile without an id was never stored.
    fn try_from(profile: Profile) -> Result<Self, Self::Error> {
        let id = profile.id.ok_or(AppError::ProfileNotFound)?;
        Ok(Self {
            id: id.value,
            user_id: profile.user_id.value,
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone_number: profile.phone_number,
        })
    }
}
