//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! See integration tests in `tests/repository_shortlink.rs` for usage examples.

pub mod shortlink_repository;

pub use shortlink_repository::ShortlinkRepository;

#[cfg(test)]
pub use shortlink_repository::MockShortlinkRepository;
