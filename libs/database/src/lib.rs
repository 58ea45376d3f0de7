//! Database library providing the PostgreSQL connector and shared
//! repository plumbing used by the domain crates.
//!
//! # Examples
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config(PostgresConfig::from_env()?).await?;
//! postgres::run_migrations::<Migrator>(&db, "feedback_api").await?;
//! ```

pub mod common;
pub mod postgres;
pub mod repository;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
pub use repository::BaseRepository;
