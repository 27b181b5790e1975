/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond plain insert and update.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Withdraws stock for an order and prices it in the same step.
    ///
    /// # Errors
    /// Fails without touching the product if `quantity` exceeds available stock.
    Fulfil { quantity: u32 },
}

/// Result of a successful `Fulfil`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fulfilment {
    pub unit_price: f64,
    pub total: i64,
    pub remaining: u32,
}
