pub mod admin;
pub mod database;
pub mod transfer;
