//! Cart and flash-message storage in the visitor session.
//!
//! The cart lives entirely in the session: it is created on first add and
//! disappears when the session expires. Nothing is persisted.

use shopzone_core::Cart;
use tower_sessions::Session;

/// Session keys.
pub mod keys {
    /// The visitor's [`Cart`](shopzone_core::Cart).
    pub const CART: &str = "cart";
    /// One-shot notice shown on the next rendered page.
    pub const FLASH: &str = "flash";
}

/// Load the cart from the session, or an empty cart if none exists yet.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_cart(session: &Session) -> Result<Cart, tower_sessions::session::Error> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Save the cart to the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Queue a notice for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn set_flash(
    session: &Session,
    message: impl Into<String>,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::FLASH, message.into()).await
}

/// Take the pending notice, if any, removing it from the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn take_flash(session: &Session) -> Result<Option<String>, tower_sessions::session::Error> {
    session.remove::<String>(keys::FLASH).await
}
