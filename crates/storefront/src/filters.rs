//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Words kept by [`short_title`].
const SHORT_TITLE_WORDS: usize = 5;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Shortens a product title to its first five words for compact cards.
///
/// Usage in templates: `{{ product.title|short_title }}`
#[askama::filter_fn]
pub fn short_title(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(first_words(&value.to_string(), SHORT_TITLE_WORDS))
}

/// The first `count` whitespace-separated words of `text`, joined by spaces.
fn first_words(text: &str, count: usize) -> String {
    text.split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}
