//! The product access seam.

use std::sync::Arc;

use fincatalog_core::{Product, ProductUpdate};

use crate::error::ClientError;

/// The five backend operations the workflows need.
#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch every product.
    async fn list(&self) -> Result<Vec<Product>, ClientError>;

    /// True if `id` is already taken.
    async fn verify_id_exists(&self, id: &str) -> Result<bool, ClientError>;

    /// Persist a new product and return the stored record.
    async fn create(&self, product: &Product) -> Result<Product, ClientError>;

    /// Replace the editable fields of product `id`.
    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<Product, ClientError>;

    /// Remove product `id`, returning the backend's confirmation message.
    async fn delete(&self, id: &str) -> Result<String, ClientError>;
}

#[async_trait::async_trait]
impl<T> ProductApi for Arc<T>
where
    T: ProductApi + ?Sized,
{
    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        (**self).list().await
    }

    async fn verify_id_exists(&self, id: &str) -> Result<bool, ClientError> {
        (**self).verify_id_exists(id).await
    }

    async fn create(&self, product: &Product) -> Result<Product, ClientError> {
        (**self).create(product).await
    }

    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<Product, ClientError> {
        (**self).update(id, update).await
    }

    async fn delete(&self, id: &str) -> Result<String, ClientError> {
        (**self).delete(id).await
    }
}
