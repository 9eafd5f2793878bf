//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added by the binary)
//! 2. `TraceLayer` (request span with a `request_id` field)
//! 3. Request ID (fill in the span field, echo the header)
//! 4. Security headers (CSP, frame and referrer policy)
//! 5. Session layer (tower-sessions with in-memory store)
//!
//! [`PageShell`] is an extractor rather than a layer: only full-page handlers
//! need the cart badge and flash message.

pub mod page_shell;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use page_shell::PageShell;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
