use crate::application::app_error::AppError;
use std::fmt;
use std::marker::PhantomData;

/// Database-assigned integer identity, tagged with the entity it belongs to.
pub struct Id<T> {
    pub value: i32,
    _marker: PhantomData<T>
}

impl<T> Id<T> {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData
        }
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let id = value
            .trim()
            .parse::<i32>()
            .map_err(|e| AppError::InvalidId(format!("Invalid id `{}`: {}", value, e)))?;
        Ok(Id::new(id))
    }
}
