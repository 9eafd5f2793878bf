//! Product route handlers.
//!
//! The listing filters and paginates the in-memory catalog; the detail page
//! looks the product up by ID in the same catalog. Neither calls the remote
//! API.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use shopzone_core::catalog::{MAX_STARS, PAGE_SIZE};
use shopzone_core::{Product, ProductId, paginate};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageShell;
use crate::state::AppState;

/// Product card display data for listing and home templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub image: String,
    pub rate: f64,
    pub review_count: u32,
    pub popular: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            rate: product.rating.rate,
            review_count: product.rating.count,
            popular: product.rating.is_popular(),
        }
    }
}

/// Product detail display data.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub rate: f64,
    pub review_count: u32,
    /// CSS class per star, filled ones first.
    pub star_classes: Vec<&'static str>,
    pub best_seller: bool,
    pub free_shipping: bool,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        let filled = product.rating.filled_stars();
        let star_classes = (0..MAX_STARS)
            .map(|i| if i < filled { "star star-filled" } else { "star" })
            .collect();

        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            rate: product.rating.rate,
            review_count: product.rating.count,
            star_classes,
            best_seller: product.rating.is_popular(),
            free_shipping: product.ships_free(),
        }
    }
}

/// A numbered page control.
#[derive(Clone)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub is_current: bool,
}

/// Pagination controls for the listing.
#[derive(Clone)]
pub struct PaginationView {
    pub links: Vec<PageLink>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    /// Controls are hidden when everything fits on one page.
    pub visible: bool,
}

impl PaginationView {
    fn new(search: &str, current: usize, total_pages: usize) -> Self {
        let href = |number: usize| listing_href(search, number);

        Self {
            links: (1..=total_pages)
                .map(|number| PageLink {
                    number,
                    href: href(number),
                    is_current: number == current,
                })
                .collect(),
            prev_href: (current > 1).then(|| href(current - 1)),
            next_href: (current < total_pages).then(|| href(current + 1)),
            visible: total_pages > 1,
        }
    }
}

/// Build a listing URL preserving the search term.
fn listing_href(search: &str, page: usize) -> String {
    if search.is_empty() {
        format!("/products?page={page}")
    } else {
        let encoded: String = url::form_urlencoded::byte_serialize(search.as_bytes()).collect();
        format!("/products?search={encoded}&page={page}")
    }
}

/// Listing query parameters.
///
/// `page` is kept as raw text so that a malformed value still renders the
/// listing instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub page: Option<String>,
}

impl ListingQuery {
    /// Requested page number, at least 1.
    ///
    /// Missing, blank, negative, and non-integer values ask for the first
    /// page. Integers too large for `usize` saturate, which `paginate` then
    /// clamps to the last page.
    fn requested_page(&self) -> usize {
        let Some(raw) = self.page.as_deref().map(str::trim) else {
            return 1;
        };
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return 1;
        }
        digits.parse::<usize>().unwrap_or(usize::MAX).max(1)
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub shell: PageShell,
    /// Search term as typed (trimmed); empty when not searching.
    pub search: String,
    pub products: Vec<ProductCardView>,
    pub pagination: PaginationView,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub shell: PageShell,
    pub product: ProductDetailView,
}

/// Placeholder shown while a product is unavailable.
///
/// The catalog is loaded once at startup, so an unknown ID stays unknown;
/// the page keeps showing the loading indicator.
#[derive(Template, WebTemplate)]
#[template(path = "products/loading.html")]
pub struct ProductLoadingTemplate {
    pub shell: PageShell,
}

/// Display product listing page.
#[instrument(skip(state, shell))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
    shell: PageShell,
) -> impl IntoResponse {
    let search = query.search.trim().to_string();
    let matches = state.catalog().search(&search);
    let page = paginate(&matches, query.requested_page(), PAGE_SIZE);

    tracing::debug!(
        matches = page.total_items,
        page = page.number,
        total_pages = page.total_pages,
        "Product listing"
    );

    ProductsIndexTemplate {
        shell,
        products: page
            .items
            .iter()
            .map(|product| ProductCardView::from(*product))
            .collect(),
        pagination: PaginationView::new(&search, page.number, page.total_pages),
        search,
    }
}

/// Display product detail page.
#[instrument(skip(state, shell))]
pub async fn show(
    State(state): State<AppState>,
    shell: PageShell,
    Path(id): Path<String>,
) -> Response {
    let product = id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().find(id));

    match product {
        Some(product) => ProductShowTemplate {
            shell,
            product: ProductDetailView::from(product),
        }
        .into_response(),
        None => {
            tracing::debug!(id = %id, "Product not in catalog");
            (StatusCode::NOT_FOUND, ProductLoadingTemplate { shell }).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use shopzone_core::{Price, Rating};

    use super::*;

    fn product(rate: f64, cents: i64) -> Product {
        Product {
            id: ProductId::new(9),
            title: "WD 2TB Elements Portable External Hard Drive".to_string(),
            price: Price::from_cents(cents),
            description: "USB 3.0 and USB 2.0 compatibility".to_string(),
            category: "electronics".to_string(),
            image: "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg".to_string(),
            rating: Rating { rate, count: 203 },
        }
    }

    #[test]
    fn test_detail_view_badges_and_stars() {
        let view = ProductDetailView::from(&product(4.8, 6400));
        assert!(view.best_seller);
        assert!(view.free_shipping);
        assert_eq!(
            view.star_classes,
            vec![
                "star star-filled",
                "star star-filled",
                "star star-filled",
                "star star-filled",
                "star"
            ]
        );

        let plain = ProductDetailView::from(&product(3.3, 5000));
        assert!(!plain.best_seller);
        assert!(!plain.free_shipping);
        assert_eq!(plain.price, "$50.00");
    }

    #[test]
    fn test_pagination_view_links() {
        let view = PaginationView::new("", 2, 3);
        assert!(view.visible);
        assert_eq!(view.links.len(), 3);
        assert!(view.links.iter().any(|l| l.number == 2 && l.is_current));
        assert_eq!(view.prev_href.as_deref(), Some("/products?page=1"));
        assert_eq!(view.next_href.as_deref(), Some("/products?page=3"));
    }

    #[test]
    fn test_pagination_view_single_page_hidden() {
        let view = PaginationView::new("", 1, 1);
        assert!(!view.visible);
        assert!(view.prev_href.is_none());
        assert!(view.next_href.is_none());
    }

    #[test]
    fn test_listing_href_encodes_search() {
        assert_eq!(
            listing_href("men's clothing", 2),
            "/products?search=men%27s+clothing&page=2"
        );
    }

    #[test]
    fn test_requested_page() {
        let query = |page: &str| ListingQuery {
            search: String::new(),
            page: Some(page.to_string()),
        };
        assert_eq!(ListingQuery::default().requested_page(), 1);
        assert_eq!(query("").requested_page(), 1);
        assert_eq!(query(" 3 ").requested_page(), 3);
        assert_eq!(query("+2").requested_page(), 2);
        assert_eq!(query("0").requested_page(), 1);
        assert_eq!(query("-4").requested_page(), 1);
        assert_eq!(query("2.5").requested_page(), 1);
        assert_eq!(query("abc").requested_page(), 1);
        assert_eq!(
            query("99999999999999999999").requested_page(),
            usize::MAX
        );
    }
}
