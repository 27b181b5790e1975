use crate::actor_framework::Entity;
use crate::domain::{order_total, Product, ProductId};
use crate::error::InventoryError;
use super::actions::{Fulfilment, ProductAction};
use super::dtos::ProductPatch;

impl Entity for Product {
    type Id = ProductId;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = Fulfilment;
    type Error = InventoryError;

    fn id(&self) -> &ProductId { &self.id }

    fn not_found(id: ProductId) -> InventoryError {
        InventoryError::NotFound(id)
    }

    /// Updates the product's price and/or quantity.
    ///
    /// # Fields Updated
    /// - `price`: Product price, must be finite and non-negative
    /// - `quantity`: Available stock quantity, must be non-negative
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), InventoryError> {
        if let Some(price) = patch.price {
            self.set_price(price)?;
        }
        if let Some(quantity) = patch.quantity {
            self.set_quantity(quantity)?;
        }
        Ok(())
    }

    /// Handles product-specific actions.
    ///
    /// # Errors
    /// Returns `InsufficientStock` if asked to fulfil more than is available.
    fn handle_action(&mut self, action: ProductAction) -> Result<Fulfilment, InventoryError> {
        match action {
            ProductAction::Fulfil { quantity } => {
                let remaining = self.withdraw(quantity)?;
                Ok(Fulfilment {
                    unit_price: self.price(),
                    total: order_total(self.price(), quantity),
                    remaining,
                })
            }
        }
    }
}
