//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageShell;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Number of products in the "Featured Products" grid.
const FEATURED_COUNT: usize = 4;

/// A customer quote for the testimonials strip.
#[derive(Clone)]
pub struct Testimonial {
    pub name: &'static str,
    /// Star string, e.g. "★★★★☆".
    pub stars: &'static str,
    pub quote: &'static str,
}

/// Static testimonials shown under the sale banner.
const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        stars: "★★★★★",
        quote: "Great products and fast delivery! I'm very satisfied with my purchase. \
                The quality exceeded my expectations.",
    },
    Testimonial {
        name: "Michael Chen",
        stars: "★★★★☆",
        quote: "Excellent customer service. Had an issue with my order and they resolved \
                it quickly. Will shop here again!",
    },
    Testimonial {
        name: "Emily Rodriguez",
        stars: "★★★★★",
        quote: "The quality of products exceeded my expectations. The packaging was also \
                very eco-friendly which I appreciate.",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: PageShell,
    pub featured: Vec<ProductCardView>,
    pub testimonials: &'static [Testimonial],
}

/// Display home page.
#[instrument(skip(state, shell))]
pub async fn home(State(state): State<AppState>, shell: PageShell) -> impl IntoResponse {
    let featured = state
        .catalog()
        .featured(FEATURED_COUNT)
        .iter()
        .map(ProductCardView::from)
        .collect();

    HomeTemplate {
        shell,
        featured,
        testimonials: TESTIMONIALS,
    }
}
