pub mod argon2_password_hasher;
pub mod database;
#[cfg(test)]
pub mod in_memory_user_repository;
pub mod session_store;
pub mod user_repository;
