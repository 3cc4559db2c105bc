use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::dto::profile::ProfileDTO;

const PHONE_SYMBOLS: &str = "+-(). ";

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "has_valid_phone_number"))]
#[schema(example = json!({
    "first_name": "Ana",
    "last_name": "Lee",
    "phone_number": "555-1111"
}))]
pub struct ProfileRequest {
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    #[schema(example = "Ana")]
    pub first_name: Option<String>,
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    #[schema(example = "Lee")]
    pub last_name: Option<String>,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    #[schema(example = "555-1111")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 7)]
    pub user_id: i32,
    #[schema(example = "Ana")]
    pub first_name: Option<String>,
    #[schema(example = "Lee")]
    pub last_name: Option<String>,
    #[schema(example = "555-1111")]
    pub phone_number: Option<String>,
}

impl From<ProfileDTO> for ProfileResponse {
    fn from(dto: ProfileDTO) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
        }
    }
}

fn has_valid_phone_number(request: &ProfileRequest) -> Result<(), ValidationError> {
    let Some(phone) = request.phone_number.as_deref() else {
        return Ok(());
    };

    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || PHONE_SYMBOLS.contains(c));

    if allowed && phone.chars().any(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    Err(ValidationError::new("phone_number_invalid")
        .with_message("Phone number may only contain digits, spaces and + - ( ) .".into()))
}
