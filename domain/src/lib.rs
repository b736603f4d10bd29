//! Domain layer for askform
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question batch
//!
//! An agent hands askform an ordered batch of [`Question`]s. Each question
//! carries a kind (free text, single choice, multiple choice, boolean) and
//! client-side hints such as choice labels and a required flag.
//!
//! ## Session
//!
//! A [`Session`] pairs one question batch with at most one answer batch. It
//! is created unanswered, answered exactly once through the submit endpoint,
//! and deleted by whichever side of the wait loop (completion or timeout)
//! observes the terminal state first. Sessions are never resurrected.

pub mod core;
pub mod question;
pub mod session;

// Re-export commonly used types
pub use core::error::DomainError;
pub use question::{Question, QuestionKind};
pub use session::{
    entities::{AnswerMap, Session},
    repository::SessionRepository,
    summary::{format_summary, render_answer},
};
