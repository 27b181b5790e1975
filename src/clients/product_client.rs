use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductId};
use crate::error::InventoryError;
use crate::product_actor::{Fulfilment, ProductAction};

/// Client for interacting with the product store actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, InventoryError, product);

impl ProductClient {
    /// Adds a product, replacing any product already stored under its id.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_product(&self, product: Product) -> Result<Option<Product>, InventoryError> {
        debug!("Sending request");
        let replaced = self.inner.put(product).await?;
        if let Some(old) = &replaced {
            info!(old_name = %old.name, "Product replaced");
        }
        Ok(replaced)
    }

    #[instrument(skip(self))]
    pub async fn list_inventory(&self) -> Result<Vec<Product>, InventoryError> {
        debug!("Sending request");
        self.inner.list(None).await
    }

    /// Products below the low stock threshold.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<Product>, InventoryError> {
        debug!("Sending request");
        self.inner.list(Some(Product::is_low_stock)).await
    }

    #[instrument(skip(self))]
    pub async fn fulfil(&self, id: ProductId, quantity: u32) -> Result<Fulfilment, InventoryError> {
        debug!("Sending request");
        self.inner.perform_action(id, ProductAction::Fulfil { quantity }).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending shutdown request");
        self.inner.shutdown().await
    }

    #[cfg(test)]
    pub async fn product_count(&self) -> Result<usize, InventoryError> {
        self.inner.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::product_actor::ProductPatch;

    fn start() -> ProductClient {
        let (actor, inner) = ResourceActor::new(10);
        tokio::spawn(actor.run());
        ProductClient::new(inner)
    }

    fn product(id: i32, quantity: i64) -> Product {
        Product::new(ProductId(id), format!("item-{id}"), 1.5, quantity).unwrap()
    }

    #[tokio::test]
    async fn test_add_overwrites_same_id() -> Result<(), InventoryError> {
        let client = start();

        assert_eq!(client.add_product(product(1, 3)).await?, None);
        let replacement = Product::new(ProductId(1), "Pencil", 0.5, 40)?;
        assert_eq!(client.add_product(replacement.clone()).await?, Some(product(1, 3)));

        assert_eq!(client.product_count().await?, 1);
        assert_eq!(client.get_product(ProductId(1)).await?, replacement);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let client = start();
        assert_eq!(
            client.get_product(ProductId(99)).await,
            Err(InventoryError::NotFound(ProductId(99)))
        );
    }

    #[tokio::test]
    async fn test_low_stock_threshold() -> Result<(), InventoryError> {
        let client = start();
        for (id, quantity) in [(1, 5), (2, 4), (3, 0), (4, 12)] {
            client.add_product(product(id, quantity)).await?;
        }

        let low: Vec<ProductId> = client.low_stock().await?.into_iter().map(|p| p.id).collect();
        assert_eq!(low, vec![ProductId(2), ProductId(3)]);
        assert_eq!(client.list_inventory().await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_update_keeps_product() -> Result<(), InventoryError> {
        let client = start();
        client.add_product(product(1, 3)).await?;

        let patch = ProductPatch { price: Some(9.0), quantity: Some(-1) };
        let err = client.update_product(ProductId(1), patch).await.unwrap_err();
        assert!(matches!(err, InventoryError::InvalidArgument(_)));
        assert_eq!(client.get_product(ProductId(1)).await?, product(1, 3));

        let patch = ProductPatch { price: Some(9.0), quantity: None };
        assert_eq!(client.update_product(ProductId(1), patch).await?.price(), 9.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_fulfil_keeps_stock() -> Result<(), InventoryError> {
        let client = start();
        client.add_product(product(1, 3)).await?;

        assert_eq!(
            client.fulfil(ProductId(1), 4).await,
            Err(InventoryError::InsufficientStock { requested: 4, available: 3 })
        );
        assert_eq!(client.get_product(ProductId(1)).await?.quantity(), 3);
        Ok(())
    }
}
