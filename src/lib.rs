pub mod config;
pub mod db;
pub mod dto;
pub mod errors;
pub mod models;
pub mod service;

/// The single store handle every accessor borrows.
pub type Store = sqlx::SqliteConnection;
