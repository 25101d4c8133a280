//! Record store implementations.
//!
//! # Repositories
//!
//! - [`PgShortlinkRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryShortlinkRepository`] - process-local storage for development and tests

pub mod memory_shortlink_repository;
pub mod pg_shortlink_repository;

pub use memory_shortlink_repository::InMemoryShortlinkRepository;
pub use pg_shortlink_repository::PgShortlinkRepository;
