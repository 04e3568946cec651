//! Handler for the root path.

use crate::config::GREETING;

/// Root path handler.
///
/// Returns the fixed greeting as plain text. The body is a compile-time
/// constant; nothing about the request is inspected.
pub async fn index() -> &'static str {
    GREETING
}
