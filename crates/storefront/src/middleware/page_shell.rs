//! Page chrome extractor.
//!
//! Every full page shows the cart badge in the header and, once, any pending
//! flash message. [`PageShell`] gathers both from the session.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::session::{load_cart, take_flash};

/// Data rendered by the base layout on every page.
#[derive(Debug, Clone, Default)]
pub struct PageShell {
    /// Total units in the cart, for the header badge.
    pub cart_count: u32,
    /// Notice queued by the previous request.
    pub flash: Option<String>,
}

impl PageShell {
    /// Read the shell data, consuming the flash message.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(session: &Session) -> Result<Self, AppError> {
        let cart_count = load_cart(session).await?.item_count();
        let flash = take_flash(session).await?;
        Ok(Self { cart_count, flash })
    }
}

impl<S> FromRequestParts<S> for PageShell
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        Self::load(&session).await
    }
}
