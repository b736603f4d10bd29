//! Session storage adapters.
//!
//! - [`in_memory::InMemorySessionStore`] — the process-local store behind
//!   [`SessionRepository`](askform_domain::SessionRepository)

pub mod in_memory;

pub use in_memory::InMemorySessionStore;
