//! Checkout line items.

use crate::domain::errors::ValidationError;

/// One purchasable entry in a checkout session: a provider price reference
/// and a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    price: String,
    quantity: u32,
}

impl LineItem {
    /// Create a line item.
    ///
    /// # Errors
    ///
    /// `EmptyValue` if the price reference is empty, `ZeroQuantity` if the
    /// quantity is zero.
    pub fn new(price: impl Into<String>, quantity: u32) -> Result<Self, ValidationError> {
        let price = price.into();
        if price.is_empty() {
            return Err(ValidationError::EmptyValue("price reference"));
        }
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        Ok(Self { price, quantity })
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_line_item() {
        let item = LineItem::new("price_123", 2).unwrap();
        assert_eq!(item.price(), "price_123");
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn empty_price_rejected() {
        assert_eq!(
            LineItem::new("", 1),
            Err(ValidationError::EmptyValue("price reference"))
        );
    }

    #[test]
    fn zero_quantity_rejected() {
        assert_eq!(LineItem::new("price_123", 0), Err(ValidationError::ZeroQuantity));
    }
}
