use std::fmt;

use crate::domain::ProductId;
use crate::error::InventoryError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(pub i32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A placed order. Orders are reported and then dropped; nothing keeps them.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub total: i64,
}

impl Order {
    pub fn new(id: OrderId, product_id: ProductId, quantity: u32, total: i64) -> Self {
        Self {
            id,
            product_id,
            quantity,
            total,
        }
    }
}

/// Monetary total of an order, truncated toward zero rather than rounded.
pub fn order_total(unit_price: f64, quantity: u32) -> i64 {
    (unit_price * f64::from(quantity)).trunc() as i64
}

/// Converts an operator-supplied order quantity into a unit count.
pub fn order_quantity(raw: i64) -> Result<u32, InventoryError> {
    if raw < 0 {
        return Err(InventoryError::invalid(format!("Order quantity cannot be negative: {raw}")));
    }
    u32::try_from(raw).map_err(|_| InventoryError::invalid(format!("Order quantity out of range: {raw}")))
}
