//! Product storage abstraction and its in-memory implementation.

use std::sync::{Arc, RwLock};

use fincatalog_core::{DomainError, DomainResult, Product, ProductUpdate};

/// Keyed product storage. Listing preserves insertion order.
pub trait ProductStore: Send + Sync {
    fn list(&self) -> Vec<Product>;
    fn exists(&self, id: &str) -> bool;
    /// Fails with `Conflict` if the id is taken.
    fn insert(&self, product: Product) -> DomainResult<Product>;
    /// Fails with `NotFound` if the id is unknown.
    fn update(&self, id: &str, update: ProductUpdate) -> DomainResult<Product>;
    /// Fails with `NotFound` if the id is unknown.
    fn remove(&self, id: &str) -> DomainResult<Product>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn exists(&self, id: &str) -> bool {
        (**self).exists(id)
    }

    fn insert(&self, product: Product) -> DomainResult<Product> {
        (**self).insert(product)
    }

    fn update(&self, id: &str, update: ProductUpdate) -> DomainResult<Product> {
        (**self).update(id, update)
    }

    fn remove(&self, id: &str) -> DomainResult<Product> {
        (**self).remove(id)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a fixed set of products (duplicates after the first are dropped).
    pub fn seeded(products: impl IntoIterator<Item = Product>) -> Self {
        let store = Self::new();
        for product in products {
            if let Err(e) = store.insert(product) {
                tracing::warn!("skipping seed product: {e}");
            }
        }
        store
    }
}

impl ProductStore for InMemoryProductStore {
    fn list(&self) -> Vec<Product> {
        let products = self.inner.read().unwrap_or_else(|e| e.into_inner());
        products.clone()
    }

    fn exists(&self, id: &str) -> bool {
        let products = self.inner.read().unwrap_or_else(|e| e.into_inner());
        products.iter().any(|p| p.id == id)
    }

    fn insert(&self, product: Product) -> DomainResult<Product> {
        let mut products = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if products.iter().any(|p| p.id == product.id) {
            return Err(DomainError::conflict(format!(
                "product {} already exists",
                product.id
            )));
        }
        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, id: &str, update: ProductUpdate) -> DomainResult<Product> {
        let mut products = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(DomainError::not_found)?;
        *slot = update.with_id(id);
        Ok(slot.clone())
    }

    fn remove(&self, id: &str) -> DomainResult<Product> {
        let mut products = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(DomainError::not_found)?;
        Ok(products.remove(index))
    }
}
