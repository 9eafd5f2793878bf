//! ShopZone Core - catalog and cart domain types.
//!
//! This crate holds everything the storefront knows about products and carts:
//! - [`types`] - Newtype wrappers for product IDs and prices
//! - [`catalog`] - The read-only product list, search, and pagination
//! - [`cart`] - Cart lines, quantity bookkeeping, and order totals
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no session handling. The storefront binary owns all of that.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, Page, Product, Rating, paginate};
pub use types::*;
