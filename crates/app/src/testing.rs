//! Test doubles for the service and router seams.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use fincatalog_client::{ClientError, ProductApi};
use fincatalog_core::{Product, ProductUpdate};

use crate::routes::{Navigator, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Verify(String),
    Create(Product),
    Update(String, ProductUpdate),
    Delete(String),
}

/// Scripted backend that records every call.
#[derive(Debug, Default)]
pub struct MockProductApi {
    pub products: Vec<Product>,
    pub id_exists: bool,
    pub fail_list: bool,
    pub fail_verify: bool,
    /// Like `fail_verify`, but switchable after the mock is shared.
    pub verify_outage: AtomicBool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
    pub call_log: Mutex<Vec<Call>>,
}

impl MockProductApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.call_log.lock().unwrap().clone()
    }

    pub fn set_verify_outage(&self, down: bool) {
        self.verify_outage.store(down, Ordering::SeqCst);
    }

    fn record(&self, call: Call) {
        self.call_log.lock().unwrap().push(call);
    }

    fn failure() -> ClientError {
        ClientError::Api(500, "boom".to_string())
    }
}

#[async_trait::async_trait]
impl ProductApi for MockProductApi {
    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        self.record(Call::List);
        if self.fail_list {
            return Err(Self::failure());
        }
        Ok(self.products.clone())
    }

    async fn verify_id_exists(&self, id: &str) -> Result<bool, ClientError> {
        self.record(Call::Verify(id.to_string()));
        if self.fail_verify || self.verify_outage.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        Ok(self.id_exists)
    }

    async fn create(&self, product: &Product) -> Result<Product, ClientError> {
        self.record(Call::Create(product.clone()));
        if self.fail_create {
            return Err(Self::failure());
        }
        Ok(product.clone())
    }

    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<Product, ClientError> {
        self.record(Call::Update(id.to_string(), update.clone()));
        if self.fail_update {
            return Err(Self::failure());
        }
        Ok(update.clone().with_id(id))
    }

    async fn delete(&self, id: &str) -> Result<String, ClientError> {
        self.record(Call::Delete(id.to_string()));
        if self.fail_delete {
            return Err(Self::failure());
        }
        Ok("Product removed successfully".to_string())
    }
}

/// Router double that remembers where it was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn product(id: &str, name: &str, description: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        logo: format!("{id}.png"),
        date_release: date(2023, 1, 1),
        date_revision: date(2024, 1, 1),
    }
}
