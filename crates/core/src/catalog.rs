//! The product catalog: product records, search, and pagination.
//!
//! The catalog is fetched once from the remote API and never mutated
//! afterwards. A refetch replaces the whole [`Catalog`]; products are never
//! merged incrementally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Products shown per listing page.
pub const PAGE_SIZE: usize = 10;

/// Ratings strictly above this score get a "Popular" / "Best Seller" badge.
pub const POPULAR_RATING: f64 = 4.5;

/// Number of stars in a rating widget.
pub const MAX_STARS: usize = 5;

/// Customer rating summary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0.0 to 5.0.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

impl Rating {
    /// Number of fully filled stars (the average rounded down).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn filled_stars(&self) -> usize {
        if self.rate.is_nan() || self.rate <= 0.0 {
            return 0;
        }
        (self.rate.floor() as usize).min(MAX_STARS)
    }

    /// Whether the rating earns a popularity badge.
    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.rate > POPULAR_RATING
    }
}

/// A product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    /// Absolute URL of the product image.
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Case-insensitive substring match over title, description, and category.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Whether the detail page advertises free shipping (price over $50).
    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.price.amount() > Decimal::from(50)
    }
}

/// The full, read-only product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap a freshly fetched product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// An empty catalog, used when the fetch failed.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// All products in API order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The first `count` products, for the home page.
    #[must_use]
    pub fn featured(&self, count: usize) -> &[Product] {
        self.products
            .get(..count.min(self.products.len()))
            .unwrap_or_default()
    }

    /// Products whose title, description, or category contain `term`,
    /// ignoring case.
    ///
    /// A blank term matches everything. An empty result is not an error.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|product| product.matches(&needle))
            .collect()
    }
}

/// One page of a larger list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page.
    pub items: &'a [T],
    /// 1-based page number actually served (after clamping).
    pub number: usize,
    /// Total number of pages; zero when there are no items.
    pub total_pages: usize,
    /// Total number of items across all pages.
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice out page `requested` (1-based) of `items`.
///
/// Page numbers below 1 serve the first page; numbers past the end serve the
/// last page. An empty list yields page 1 with no items.
#[must_use]
pub fn paginate<T>(items: &[T], requested: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let number = requested.clamp(1, total_pages.max(1));
    let start = (number - 1) * per_page;
    let end = (start + per_page).min(total_items);

    Page {
        items: items.get(start..end).unwrap_or_default(),
        number,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn product(id: i32, title: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Price::from_cents(cents),
            description: format!("Description of {title}"),
            category: "misc".to_string(),
            image: format!("https://fakestoreapi.com/img/{id}.jpg"),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
        }
    }

    fn catalog_of(count: i32) -> Catalog {
        Catalog::new((1..=count).map(|i| product(i, &format!("Item {i}"), 1000)).collect())
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut jacket = product(1, "Mens Cotton Jacket", 5599);
        jacket.category = "men's clothing".to_string();
        let mut ring = product(2, "Solid Gold Petite Micropave", 16800);
        ring.category = "jewelery".to_string();
        ring.description = "Satisfaction Guaranteed. Designed in GOLD.".to_string();
        let catalog = Catalog::new(vec![jacket, ring]);

        let by_title: Vec<_> = catalog.search("JACKET").iter().map(|p| p.id).collect();
        assert_eq!(by_title, vec![ProductId::new(1)]);

        let by_category: Vec<_> = catalog.search("Jewel").iter().map(|p| p.id).collect();
        assert_eq!(by_category, vec![ProductId::new(2)]);

        let by_description: Vec<_> = catalog.search("guaranteed").iter().map(|p| p.id).collect();
        assert_eq!(by_description, vec![ProductId::new(2)]);
    }

    #[test]
    fn test_search_with_no_matches_is_empty() {
        let catalog = catalog_of(3);
        assert!(catalog.search("laptop").is_empty());
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let catalog = catalog_of(3);
        assert_eq!(catalog.search("").len(), 3);
        assert_eq!(catalog.search("   ").len(), 3);
    }

    #[test]
    fn test_paginate_twenty_five_items() {
        let items: Vec<u32> = (1..=25).collect();

        let first = paginate(&items, 1, PAGE_SIZE);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 3, PAGE_SIZE);
        assert_eq!(last.items, &[21, 22, 23, 24, 25]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_clamps_out_of_range_pages() {
        let items: Vec<u32> = (1..=25).collect();

        let beyond = paginate(&items, 9, PAGE_SIZE);
        assert_eq!(beyond.number, 3);
        assert_eq!(beyond.items.len(), 5);

        let zero = paginate(&items, 0, PAGE_SIZE);
        assert_eq!(zero.number, 1);
        assert_eq!(zero.items.first(), Some(&1));
    }

    #[test]
    fn test_paginate_empty_list() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 4, PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn test_featured_takes_at_most_count() {
        assert_eq!(catalog_of(10).featured(4).len(), 4);
        assert_eq!(catalog_of(2).featured(4).len(), 2);
        assert!(Catalog::empty().featured(4).is_empty());
    }

    #[test]
    fn test_find() {
        let catalog = catalog_of(5);
        assert_eq!(catalog.find(ProductId::new(4)).unwrap().title, "Item 4");
        assert!(catalog.find(ProductId::new(40)).is_none());
    }

    #[test]
    fn test_rating_badges_and_stars() {
        let rating = Rating {
            rate: 4.6,
            count: 400,
        };
        assert!(rating.is_popular());
        assert_eq!(rating.filled_stars(), 4);

        let edge = Rating {
            rate: 4.5,
            count: 1,
        };
        assert!(!edge.is_popular());
        assert_eq!(Rating::default().filled_stars(), 0);
    }

    #[test]
    fn test_ships_free_above_fifty() {
        assert!(product(1, "Bag", 10_995).ships_free());
        assert!(!product(2, "Shirt", 5000).ships_free());
    }

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Price::from_cents(10_995));
        assert_eq!(product.rating.count, 120);
    }
}
