//! `reqwest` implementation of [`ProductApi`].

use fincatalog_core::{
    MessageResponse, Product, ProductListResponse, ProductMutationResponse, ProductUpdate,
};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::service::ProductApi;

/// HTTP client for the products resource.
///
/// Holds a pooled `reqwest::Client`; no session state is kept between calls.
#[derive(Debug, Clone)]
pub struct HttpProductClient {
    http: reqwest::Client,
    products_url: Url,
}

impl HttpProductClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let raw = config.products_url();
        let products_url = Url::parse(&raw).map_err(|_| ClientError::InvalidUrl(raw))?;

        Ok(Self { http, products_url })
    }

    pub fn products_url(&self) -> &str {
        self.products_url.as_str()
    }

    /// Products URL extended by `segments`, each percent-encoded as one path segment.
    fn resource_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.products_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.products_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and map non-2xx responses to `ClientError::Api`.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let resp = req.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(%status, %body, "backend rejected request");
            return Err(ClientError::Api(status.as_u16(), body));
        }

        Ok(resp)
    }

    async fn send_json<T>(&self, req: reqwest::RequestBuilder) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let resp = self.send(req).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ProductApi for HttpProductClient {
    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        let body: ProductListResponse = self.send_json(self.http.get(self.products_url.clone())).await?;
        tracing::debug!(count = body.data.len(), "fetched products");
        Ok(body.data)
    }

    async fn verify_id_exists(&self, id: &str) -> Result<bool, ClientError> {
        let url = self.resource_url(&["verification", id])?;
        self.send_json(self.http.get(url)).await
    }

    async fn create(&self, product: &Product) -> Result<Product, ClientError> {
        let body: ProductMutationResponse = self
            .send_json(self.http.post(self.products_url.clone()).json(product))
            .await?;
        tracing::info!(id = %body.data.id, message = %body.message, "product created");
        Ok(body.data)
    }

    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<Product, ClientError> {
        let body: ProductMutationResponse = self
            .send_json(self.http.put(self.resource_url(&[id])?).json(update))
            .await?;
        tracing::info!(id, message = %body.message, "product updated");
        Ok(body.data)
    }

    async fn delete(&self, id: &str) -> Result<String, ClientError> {
        let resp = self.send(self.http.delete(self.resource_url(&[id])?)).await?;
        let text = resp.text().await?;

        // Some backends answer a delete with an empty or `null` body.
        let message = serde_json::from_str::<Option<MessageResponse>>(&text)
            .ok()
            .flatten()
            .map(|m| m.message)
            .unwrap_or_default();

        tracing::info!(id, %message, "product deleted");
        Ok(message)
    }
}
