//! Greeter: a single-route HTTP greeting service.
//!
//! Serves a constant plain-text greeting on the root path and lets the
//! framework answer everything else with its default not-found response.
//! Configuration is loaded from a TOML file when one exists; otherwise the
//! built-in defaults bind the server to 0.0.0.0:5000.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
