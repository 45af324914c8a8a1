//! Product record and the REST envelopes around it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dates::serde_date;

/// A financial product in the catalog (matches the backend's JSON shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(with = "serde_date")]
    pub date_release: NaiveDate,
    #[serde(with = "serde_date")]
    pub date_revision: NaiveDate,
}

impl Product {
    /// Separate the identifier from the editable fields.
    pub fn split(self) -> (String, ProductUpdate) {
        let update = ProductUpdate {
            name: self.name,
            description: self.description,
            logo: self.logo,
            date_release: self.date_release,
            date_revision: self.date_revision,
        };
        (self.id, update)
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Body of an update request: a product without its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(with = "serde_date")]
    pub date_release: NaiveDate,
    #[serde(with = "serde_date")]
    pub date_revision: NaiveDate,
}

impl ProductUpdate {
    pub fn with_id(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            description: self.description,
            logo: self.logo,
            date_release: self.date_release,
            date_revision: self.date_revision,
        }
    }
}

/// `GET /bp/products` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// `POST`/`PUT` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMutationResponse {
    pub message: String,
    pub data: Product,
}

/// `DELETE` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned by the backend on 4xx.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            name: "BadRequestError".to_string(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            name: "NotFoundError".to_string(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: Value) -> Self {
        self.errors = Some(errors);
        self
    }
}
