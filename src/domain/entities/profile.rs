use crate::domain::entities::{
    id::Id,
    user::User
};

/// Contact details attached to exactly one user.
///
/// `id` stays `None` until the profile is first persisted; saving a profile
/// that carries an id updates the existing row instead of inserting.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Option<Id<Profile>>,
    pub user_id: Id<User>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl Profile {
    pub fn new(
        user_id: Id<User>,
        first_name: Option<String>,
        last_name: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            first_name,
            last_name,
            phone_number,
        }
    }

    /// Overwrites the contact fields. Identity and owner are left as they are.
    pub fn replace_contact(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
        phone_number: Option<String>,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.phone_number = phone_number;
    }
}
