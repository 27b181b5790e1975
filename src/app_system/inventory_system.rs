use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, ProductClient};
use crate::domain::Product;
use crate::error::InventoryError;

/// Capacity of the product store's request channel.
const MAILBOX_CAPACITY: usize = 100;

/// Owns the product store task and hands out the clients that talk to it.
pub struct InventorySystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl InventorySystem {
    /// Start the product store and wire the order client to it.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(name = "inventory_system")]
    pub fn new() -> Self {
        info!("Starting inventory system");

        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(MAILBOX_CAPACITY);
        let product_client = ProductClient::new(product_resource_client);
        let handles = vec![tokio::spawn(product_actor.run())];

        let order_client = OrderClient::new(product_client.clone());

        info!("Inventory system started");

        Self {
            product_client,
            order_client,
            handles,
        }
    }

    /// Stop the store and wait for its task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), InventoryError> {
        info!("Shutting down inventory system");

        self.product_client.shutdown().await?;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Store task ended abnormally");
            }
        }

        info!("Inventory system shutdown complete");
        Ok(())
    }
}
