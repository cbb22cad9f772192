pub mod credential;
pub mod registration;
pub mod user;
