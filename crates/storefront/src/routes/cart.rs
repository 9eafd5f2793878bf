//! Cart route handlers.
//!
//! The cart is stored in the session (see [`crate::session`]). Mutations are
//! plain form posts answered with a 303 redirect, so the cart works without
//! any client-side scripting.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use shopzone_core::{Cart, CartLine, CartTotals, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageShell;
use crate::session::{load_cart, save_cart, set_flash};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub title: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    /// Quantity submitted by the "-" button; never below 1.
    pub decrement_to: u32,
    /// Quantity submitted by the "+" button.
    pub increment_to: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let quantity = line.quantity();
        Self {
            product_id: line.product_id,
            title: line.title.clone(),
            image: line.image.clone(),
            price: line.price.to_string(),
            quantity,
            decrement_to: quantity.saturating_sub(1).max(1),
            increment_to: quantity.saturating_add(1),
            line_total: line.line_total().to_string(),
        }
    }
}

/// Order summary display data.
#[derive(Clone)]
pub struct SummaryView {
    pub subtotal: String,
    /// "Free" or a dollar amount.
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl From<CartTotals> for SummaryView {
    fn from(totals: CartTotals) -> Self {
        Self {
            subtotal: totals.subtotal.to_string(),
            shipping: if totals.ships_free() {
                "Free".to_string()
            } else {
                totals.shipping.to_string()
            },
            tax: totals.tax.to_string(),
            total: totals.total.to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub summary: SummaryView,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            summary: SummaryView::from(cart.totals()),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update quantity form data.
///
/// Signed so that a zero or negative request reaches the cart and is ignored
/// there instead of failing form parsing.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub shell: PageShell,
    pub cart: CartView,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    let shell = PageShell::load(&session).await?;
    let cart = load_cart(&session).await?;

    Ok(CartShowTemplate {
        shell,
        cart: CartView::from(&cart),
    })
}

/// Add one unit of a catalog product to the cart.
///
/// Queues a confirmation flash and redirects back to the product page.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .find(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut cart = load_cart(&session).await?;
    cart.add(product);
    save_cart(&session, &cart).await?;
    set_flash(&session, format!("{} added to cart!", product.title)).await?;

    let id = product_id.to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some([("product_id", id.as_str())].as_slice()),
    );
    tracing::info!(%product_id, item_count = cart.item_count(), "Added to cart");

    Ok(Redirect::to(&format!("/products/{product_id}")))
}

/// Set the quantity of a cart line.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let mut cart = load_cart(&session).await?;

    if cart.set_quantity(product_id, form.quantity) {
        save_cart(&session, &cart).await?;
    } else {
        tracing::debug!(%product_id, quantity = form.quantity, "Quantity update ignored");
    }

    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let mut cart = load_cart(&session).await?;

    if cart.remove(product_id) {
        save_cart(&session, &cart).await?;
        let id = product_id.to_string();
        add_breadcrumb(
            "cart",
            "Removed from cart",
            Some([("product_id", id.as_str())].as_slice()),
        );
    }

    Ok(Redirect::to("/cart"))
}

/// Cart item count as plain text, for badges.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<String> {
    Ok(load_cart(&session).await?.item_count().to_string())
}

/// Old footer link to the cart.
pub async fn legacy_redirect() -> Redirect {
    Redirect::permanent("/cart")
}
