use crate::domain::entities::id::Id;

/// Owner of a profile. Users are managed elsewhere; this service only reads them.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Id<User>,
}
