use tracing::{info, instrument, warn};
use crate::clients::ProductClient;
use crate::domain::{Order, OrderId, ProductId};
use crate::error::InventoryError;

/// Places orders against the product store.
///
/// Orders are not stored: placing one resolves the product, withdraws stock
/// and prices it through the store, then hands the finished `Order` back.
#[derive(Clone)]
pub struct OrderClient {
    product_client: ProductClient,
}

impl OrderClient {
    pub fn new(product_client: ProductClient) -> Self {
        Self { product_client }
    }

    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        order_id: OrderId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Order, InventoryError> {
        info!("Processing place_order request");

        // Step 1: Resolve product
        match self.product_client.get_product(product_id).await {
            Ok(product) => info!(product_name = %product.name, "Product resolved"),
            Err(e) => {
                warn!(error = %e, "Product lookup failed");
                return Err(e);
            }
        }

        // Step 2: Withdraw and price in one store action
        let fulfilment = match self.product_client.fulfil(product_id, quantity).await {
            Ok(fulfilment) => fulfilment,
            Err(e) => {
                warn!(error = %e, "Stock fulfilment failed");
                return Err(e);
            }
        };

        let order = Order::new(order_id, product_id, quantity, fulfilment.total);
        info!(
            order_id = %order.id,
            product_id = %order.product_id,
            unit_price = fulfilment.unit_price,
            quantity = order.quantity,
            remaining_stock = fulfilment.remaining,
            total = order.total,
            "Order placed"
        );
        Ok(order)
    }
}
