pub mod id;
pub mod profile;
pub mod user;
