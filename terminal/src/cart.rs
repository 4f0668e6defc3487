//! # Sale Cart
//!
//! In-memory cart for the register screen. The cart is a pure state
//! machine: it never touches the network, and checkout merely produces
//! the request body. The server remains the source of truth for pricing
//! and stock; the cart's stock checks only catch the obvious mistakes
//! before a round trip.
//!
//! ## Invariants
//!
//! - At most one line per product; adding an already-present product
//!   bumps its quantity instead.
//! - Line quantities are always at least 1; setting a quantity to zero
//!   removes the line.
//! - Quantities never exceed the stock the client last saw.

use rust_decimal::Decimal;
use shared::{Product, SaleItemRequest, SaleRequest};
use thiserror::Error;

/// Cart-level failures, shown to the operator verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Product is out of stock")]
    OutOfStock,
    #[error("Not enough stock for the requested quantity")]
    ExceedsStock,
    #[error("Cart is empty")]
    EmptyCart,
}

/// One line of the cart.
///
/// `stock_seen` is the product's stock at the moment it entered the
/// cart; it caps the quantity when no fresher catalog data is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub stock_seen: i64,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The register cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    submitting: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// True while a checkout request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is bumped,
    /// keeping one line per product. The stock check uses the catalog
    /// row the caller clicked, which is the freshest data the client
    /// has.
    pub fn add_product(&mut self, product: &Product) -> Result<(), CartError> {
        if product.stock <= 0 {
            return Err(CartError::OutOfStock);
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            if i64::from(line.quantity) + 1 > product.stock {
                return Err(CartError::ExceedsStock);
            }
            line.quantity += 1;
            line.stock_seen = product.stock;
            return Ok(());
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            stock_seen: product.stock,
        });
        Ok(())
    }

    /// Set the quantity of a line directly.
    ///
    /// Zero or negative removes the line. `current_stock` is the stock
    /// from the caller's current catalog snapshot; when the product is
    /// no longer in the snapshot the stock seen at add time applies.
    /// A rejected change leaves the line untouched.
    pub fn set_quantity(
        &mut self,
        product_id: i64,
        quantity: i64,
        current_stock: Option<i64>,
    ) -> Result<(), CartError> {
        if quantity <= 0 {
            self.remove_product(product_id);
            return Ok(());
        }

        let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        else {
            return Ok(());
        };

        let ceiling = current_stock.unwrap_or(line.stock_seen);
        if quantity > ceiling {
            return Err(CartError::ExceedsStock);
        }

        line.quantity = quantity as u32;
        if let Some(stock) = current_stock {
            line.stock_seen = stock;
        }
        Ok(())
    }

    /// Remove a line entirely. Unknown products are a no-op.
    pub fn remove_product(&mut self, product_id: i64) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Empty the cart and reset the in-flight flag.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.submitting = false;
    }

    /// Recompute the cart total from its lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.subtotal()).sum()
    }

    /// Produce the sale request body for the current lines.
    ///
    /// Pure: no network, no state change. An empty cart is rejected so
    /// callers never issue an empty sale request.
    pub fn begin_checkout(&self) -> Result<SaleRequest, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        Ok(SaleRequest {
            items: self
                .lines
                .iter()
                .map(|line| SaleItemRequest {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: &str, stock: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: None,
            price: price.parse().unwrap(),
            stock,
            category_id: None,
        }
    }

    #[test]
    fn test_one_line_per_product() {
        let mut cart = Cart::new();
        let coffee = product(1, "5.00", 10);

        cart.add_product(&coffee).unwrap();
        cart.add_product(&coffee).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_out_of_stock_product_rejected() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_product(&product(1, "5.00", 0)), Err(CartError::OutOfStock));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_beyond_stock_rejected() {
        let mut cart = Cart::new();
        let scarce = product(1, "5.00", 2);

        cart.add_product(&scarce).unwrap();
        cart.add_product(&scarce).unwrap();
        assert_eq!(cart.add_product(&scarce), Err(CartError::ExceedsStock));
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_respects_fresh_stock() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "5.00", 10)).unwrap();

        // Catalog has been refreshed and stock dropped to 3.
        let before = cart.clone();
        assert_eq!(
            cart.set_quantity(1, 5, Some(3)),
            Err(CartError::ExceedsStock)
        );
        // A rejected change leaves the whole cart untouched.
        assert_eq!(cart, before);
        assert_eq!(cart.total(), before.total());

        cart.set_quantity(1, 3, Some(3)).unwrap();
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_set_quantity_falls_back_to_stock_seen() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "5.00", 4)).unwrap();

        // Product no longer in the current catalog snapshot.
        assert_eq!(cart.set_quantity(1, 9, None), Err(CartError::ExceedsStock));
        cart.set_quantity(1, 4, None).unwrap();
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "5.00", 10)).unwrap();
        cart.set_quantity(1, 0, Some(10)).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_recomputed_from_lines() {
        let mut cart = Cart::new();
        let coffee = product(1, "5.00", 10);
        let cake = product(2, "12.50", 10);

        cart.add_product(&coffee).unwrap();
        cart.add_product(&coffee).unwrap();
        cart.add_product(&cake).unwrap();
        assert_eq!(cart.total().to_string(), "22.50");

        cart.set_quantity(1, 5, Some(10)).unwrap();
        assert_eq!(cart.total().to_string(), "37.50");

        cart.remove_product(2);
        assert_eq!(cart.total().to_string(), "25.00");
    }

    #[test]
    fn test_checkout_of_empty_cart_rejected() {
        let cart = Cart::new();
        assert_eq!(cart.begin_checkout(), Err(CartError::EmptyCart));
    }

    #[test]
    fn test_checkout_produces_request_without_prices() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "5.00", 10)).unwrap();
        cart.add_product(&product(2, "12.50", 10)).unwrap();
        cart.set_quantity(1, 3, Some(10)).unwrap();

        let request = cart.begin_checkout().unwrap();
        assert_eq!(
            request.items,
            vec![
                SaleItemRequest { product_id: 1, quantity: 3 },
                SaleItemRequest { product_id: 2, quantity: 1 },
            ]
        );

        // Checkout is pure, the cart is untouched.
        assert_eq!(cart.line_count(), 2);
        assert!(!cart.is_submitting());
    }

    #[test]
    fn test_clear_resets_submission_flag() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "5.00", 10)).unwrap();
        cart.set_submitting(true);

        cart.clear();
        assert!(cart.is_empty());
        assert!(!cart.is_submitting());
    }
}
