//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured products)
//! GET  /about                  - About page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog loaded)
//!
//! # Products
//! GET  /products               - Product listing (?search=term&page=n)
//! GET  /products/{id}          - Product detail
//!
//! # Cart (form posts redirect with 303)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add one unit (redirects to the product)
//! POST /cart/update            - Set quantity (redirects to /cart)
//! POST /cart/remove            - Remove line (redirects to /cart)
//! GET  /cart/count             - Cart count (plain text)
//! GET  /addtocart              - Legacy footer link, redirects to /cart
//! ```

pub mod about;
pub mod cart;
pub mod health;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(about::about))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .route("/addtocart", get(cart::legacy_redirect))
}
