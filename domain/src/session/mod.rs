//! Question session domain.
//!
//! - [`entities::Session`] — one question batch awaiting one answer batch
//! - [`repository::SessionRepository`] — trait for session storage
//! - [`summary::format_summary`] — human-readable answer summary

pub mod entities;
pub mod repository;
pub mod summary;
