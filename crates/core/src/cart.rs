//! Shopping cart bookkeeping.
//!
//! A [`Cart`] holds at most one [`CartLine`] per product, in the order the
//! products were first added. Every line has a quantity of at least one;
//! removing a product deletes its line outright.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// Subtotals strictly above this amount ship for free.
const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Flat shipping fee in whole dollars below the free-shipping threshold.
const SHIPPING_FEE_DOLLARS: i64 = 15;

/// Sales tax, in percent of the subtotal.
const TAX_PERCENT: i64 = 10;

/// One product in the cart.
///
/// Product fields are copied when the line is created, so the line keeps
/// rendering even if the catalog is later replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }

    /// Units of this product in the cart, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Add one unit of `product`.
    ///
    /// Bumps the quantity of an existing line, or appends a new line with a
    /// quantity of one.
    pub fn add(&mut self, product: &Product) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::from_product(product)),
        }
    }

    /// Delete the line for `product_id`.
    ///
    /// Returns `false` when the product was not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        self.lines.len() != before
    }

    /// Replace the quantity of the line for `product_id`.
    ///
    /// Quantities below one are ignored rather than clamped, and so are
    /// products that are not in the cart. Returns whether a line changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }
        let Ok(quantity) = u32::try_from(quantity) else {
            return false;
        };
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Order summary figures for the cart page.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::for_subtotal(self.subtotal())
    }
}

/// Derived order summary. Never stored; recomputed from the cart on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl CartTotals {
    /// Compute shipping, tax, and total for a subtotal.
    #[must_use]
    pub fn for_subtotal(subtotal: Price) -> Self {
        let shipping = if subtotal.amount() > FREE_SHIPPING_THRESHOLD {
            Price::ZERO
        } else {
            Price::new(Decimal::from(SHIPPING_FEE_DOLLARS))
        };
        let tax = subtotal.scaled(Decimal::new(TAX_PERCENT, 2));

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Whether the order qualifies for free shipping.
    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.shipping == Price::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;

    #[test]
    fn test_adding_same_product_twice_merges_lines() {
        let backpack = product(1, "Backpack", 10_995);
        let mut cart = Cart::new();
        cart.add(&backpack);
        cart.add(&backpack);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(backpack.id).unwrap().quantity(), 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, "Third", 100));
        cart.add(&product(1, "First", 100));
        cart.add(&product(3, "Third", 100));

        let ids: Vec<i32> = cart.lines().iter().map(|l| l.product_id.as_i32()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_line_copies_product_fields() {
        let shirt = product(2, "Slim Fit T-Shirt", 2230);
        let mut cart = Cart::new();
        cart.add(&shirt);

        let line = cart.line(shirt.id).unwrap();
        assert_eq!(line.title, "Slim Fit T-Shirt");
        assert_eq!(line.price, Price::from_cents(2230));
        assert_eq!(line.image, shirt.image);
        assert_eq!(line.category, shirt.category);
    }

    #[test]
    fn test_removing_missing_product_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Backpack", 10_995));
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let backpack = product(1, "Backpack", 10_995);
        let mut cart = Cart::new();
        cart.add(&backpack);
        cart.add(&backpack);

        assert!(cart.remove(backpack.id));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_set_quantity_ignores_values_below_one() {
        let backpack = product(1, "Backpack", 10_995);
        let mut cart = Cart::new();
        cart.add(&backpack);
        cart.add(&backpack);

        assert!(!cart.set_quantity(backpack.id, 0));
        assert!(!cart.set_quantity(backpack.id, -3));
        assert_eq!(cart.line(backpack.id).unwrap().quantity(), 2);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let backpack = product(1, "Backpack", 10_995);
        let mut cart = Cart::new();
        cart.add(&backpack);

        assert!(cart.set_quantity(backpack.id, 7));
        assert_eq!(cart.line(backpack.id).unwrap().quantity(), 7);
        assert!(!cart.set_quantity(ProductId::new(42), 7));
        assert!(!cart.set_quantity(backpack.id, i64::MAX));
        assert_eq!(cart.line(backpack.id).unwrap().quantity(), 7);
    }

    #[test]
    fn test_item_count_tracks_every_mutation() {
        let a = product(1, "A", 100);
        let b = product(2, "B", 100);
        let c = product(3, "C", 100);
        let mut cart = Cart::new();

        cart.add(&a);
        cart.add(&b);
        cart.add(&b);
        assert_eq!(cart.item_count(), 3);

        cart.set_quantity(a.id, 5);
        assert_eq!(cart.item_count(), 7);

        cart.add(&c);
        cart.remove(b.id);
        cart.set_quantity(c.id, 0);
        assert_eq!(cart.item_count(), 6);

        let expected: u32 = cart.lines().iter().map(CartLine::quantity).sum();
        assert_eq!(cart.item_count(), expected);
    }

    #[test]
    fn test_totals_charge_shipping_up_to_threshold() {
        let totals = CartTotals::for_subtotal(Price::from_cents(10_000));
        assert_eq!(totals.shipping, Price::from_cents(1500));
        assert_eq!(totals.tax, Price::from_cents(1000));
        assert_eq!(totals.total, Price::from_cents(12_500));
        assert!(!totals.ships_free());
    }

    #[test]
    fn test_totals_free_shipping_above_threshold() {
        let totals = CartTotals::for_subtotal(Price::from_cents(10_001));
        assert!(totals.ships_free());
        assert_eq!(totals.total.to_string(), "$110.01");
    }

    #[test]
    fn test_cart_totals_from_lines() {
        let mut cart = Cart::new();
        let shirt = product(2, "Shirt", 2230);
        cart.add(&shirt);
        cart.add(&shirt);
        cart.add(&product(5, "Bracelet", 695));

        let totals = cart.totals();
        assert_eq!(totals.subtotal, Price::from_cents(5155));
        assert_eq!(totals.tax.to_string(), "$5.16");
        assert_eq!(totals.total.to_string(), "$71.71");
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = Cart::new().totals();
        assert_eq!(totals.subtotal, Price::ZERO);
        assert_eq!(totals.shipping, Price::from_cents(1500));
    }

    #[test]
    fn test_cart_round_trips_through_json() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Backpack", 10_995));
        cart.set_quantity(ProductId::new(1), 3);

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
