//! Localhost web server for the question form.
//!
//! - [`server::WebServer`] — listener binding (with port scan) and lifecycle
//! - [`routes::router`] — the HTTP API plus the embedded form assets

pub mod routes;
pub mod server;
