//! Product list screen: load, search, page size, row menu and delete confirmation.
//!
//! Filtering and truncation happen entirely client-side over the last fetched
//! collection. The backend is never asked for a page.

use chrono::NaiveDate;
use fincatalog_client::ProductApi;
use fincatalog_core::{dates, Product};

use crate::routes::{Navigator, Route};

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

pub const LOAD_ERROR: &str = "Error loading products";
pub const DELETE_ERROR: &str = "Error deleting product";

/// Target of an open delete confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
}

/// First `page_size` products matching `search_term`, in original order.
///
/// A blank term matches everything. Otherwise the (untrimmed) term is matched
/// case-insensitively against name and description.
pub fn filter_products(
    products: &[Product],
    search_term: &str,
    page_size: usize,
) -> Vec<Product> {
    if search_term.trim().is_empty() {
        return products.iter().take(page_size).cloned().collect();
    }

    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| p.matches_search(&needle))
        .take(page_size)
        .cloned()
        .collect()
}

/// Table rendering of a release/revision date (`dd/mm/yyyy`).
pub fn format_date(date: NaiveDate) -> String {
    dates::format_display(date)
}

/// State of the product list screen.
#[derive(Debug)]
pub struct ProductListWorkflow<S, N> {
    service: S,
    navigator: N,
    products: Vec<Product>,
    filtered_products: Vec<Product>,
    search_term: String,
    page_size: usize,
    loading: bool,
    error_message: Option<String>,
    open_menu_id: Option<String>,
    pending_delete: Option<PendingDelete>,
}

impl<S, N> ProductListWorkflow<S, N>
where
    S: ProductApi,
    N: Navigator,
{
    /// A list that has not been loaded yet (`loading` starts out true).
    pub fn new(service: S, navigator: N) -> Self {
        Self {
            service,
            navigator,
            products: Vec::new(),
            filtered_products: Vec::new(),
            search_term: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            loading: true,
            error_message: None,
            open_menu_id: None,
            pending_delete: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The rows currently shown.
    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &'static [usize] {
        &PAGE_SIZE_OPTIONS
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn open_menu_id(&self) -> Option<&str> {
        self.open_menu_id.as_deref()
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn show_delete_modal(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Fetch the full collection and recompute the visible rows.
    pub async fn load(&mut self) {
        self.loading = true;

        match self.service.list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "products loaded");
                self.products = products;
                self.apply_filter();
            }
            Err(e) => {
                tracing::error!("Error loading products: {e}");
                self.error_message = Some(LOAD_ERROR.to_string());
            }
        }

        self.loading = false;
    }

    pub fn apply_filter(&mut self) {
        self.filtered_products =
            filter_products(&self.products, &self.search_term, self.page_size);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.apply_filter();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.apply_filter();
    }

    /// Open `id`'s action menu, or close it if it is already open.
    pub fn toggle_menu(&mut self, id: &str) {
        if self.open_menu_id.as_deref() == Some(id) {
            self.open_menu_id = None;
        } else {
            self.open_menu_id = Some(id.to_string());
        }
    }

    pub fn add_product(&self) {
        self.navigator.navigate(Route::ProductAdd);
    }

    pub fn edit_product(&mut self, id: &str) {
        self.navigator.navigate(Route::ProductEdit(id.to_string()));
        self.open_menu_id = None;
    }

    /// Open the confirmation prompt. Nothing is deleted yet.
    pub fn request_delete(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.pending_delete = Some(PendingDelete {
            id: id.into(),
            name: name.into(),
        });
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending product. The prompt closes whatever the outcome.
    ///
    /// On success the row leaves the visible list only; `products` keeps it
    /// until the next [`load`](Self::load).
    pub async fn confirm_delete(&mut self) {
        let Some(pending) = self.pending_delete.clone() else {
            return;
        };

        match self.service.delete(&pending.id).await {
            Ok(_) => {
                tracing::info!(id = %pending.id, "product deleted");
                self.filtered_products.retain(|p| p.id != pending.id);
            }
            Err(e) => {
                tracing::error!(id = %pending.id, "Error deleting product: {e}");
                self.error_message = Some(DELETE_ERROR.to_string());
            }
        }

        self.pending_delete = None;
    }
}
