//! About page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::middleware::PageShell;

/// About page template (static content).
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub shell: PageShell,
}

/// Display the About page.
#[instrument(skip(shell))]
pub async fn about(shell: PageShell) -> impl IntoResponse {
    AboutTemplate { shell }
}
