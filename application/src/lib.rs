//! Application layer for askform
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::WaitParams;
pub use ports::{
    announcer::{NoAnnouncer, SessionAnnouncer},
    browser_launcher::{BrowserLaunchError, BrowserLauncher, NoBrowserLauncher},
};
pub use use_cases::ask_questions::{
    AskOutcome, AskQuestionsError, AskQuestionsInput, AskQuestionsOutput, AskQuestionsUseCase,
};
