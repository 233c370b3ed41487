//! `SQLite` database backend implementations.
//!
//! This module provides `SQLite`-backed implementations for the row-store
//! repository traits. Enable the `sqlx_sqlite` feature to use them.

mod membership;
pub mod migrations;
mod project;

pub use membership::SqliteProjectMemberRepository;
pub use project::SqliteProjectRepository;
use sqlx::SqlitePool;

/// Creates all `SQLite` repository instances from a connection pool.
pub fn create_repositories(
    pool: SqlitePool,
) -> (SqliteProjectRepository, SqliteProjectMemberRepository) {
    (
        SqliteProjectRepository::new(pool.clone()),
        SqliteProjectMemberRepository::new(pool),
    )
}
