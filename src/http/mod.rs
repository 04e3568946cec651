//! HTTP server startup and shutdown.
//!
//! Binds the listening socket, serves requests until a shutdown signal
//! (SIGTERM/SIGINT) arrives, then drains connections and exits cleanly.
//! A bind failure is fatal and propagates to the caller.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
