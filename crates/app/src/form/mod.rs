//! Create/edit form for a product.
//!
//! The mode is fixed at construction: a route id selects edit mode, no id
//! selects create mode. Every value change re-runs the synchronous rules of
//! [`fincatalog_core::validation`]; the identifier uniqueness check is a
//! separate awaited request so it can never race the submit-time check.

use std::sync::Arc;

use fincatalog_client::{ClientError, ProductApi};
use fincatalog_core::validation::validate_field;
use fincatalog_core::{dates, Clock, DomainResult, FieldError, Product, ProductField, SystemClock};

use crate::routes::{Navigator, Route};

mod field;

pub use field::FieldState;

pub const LOAD_ERROR: &str = "Error loading product";
pub const NOT_FOUND_ERROR: &str = "Product not found";
pub const VERIFY_ERROR: &str = "Error verifying ID";
pub const CREATE_ERROR: &str = "Error creating product";
pub const UPDATE_ERROR: &str = "Error updating product";

/// Fallback when a field fails a rule with no dedicated message.
pub const INVALID_FIELD: &str = "Invalid field";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { product_id: String },
}

/// What a call to [`ProductFormWorkflow::submit`] ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The backend reported the id as taken; nothing was created.
    IdTaken,
    Created,
    Updated,
    /// A backend call failed; see `error_message`.
    Failed,
}

/// Every field value, disabled ones included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

impl FormValues {
    pub fn to_product(&self) -> DomainResult<Product> {
        Ok(Product {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            logo: self.logo.clone(),
            date_release: dates::parse_date(&self.date_release)?,
            date_revision: dates::parse_date(&self.date_revision)?,
        })
    }
}

/// State of the product form screen.
pub struct ProductFormWorkflow<S, N> {
    service: S,
    navigator: N,
    clock: Arc<dyn Clock>,
    mode: FormMode,
    fields: [FieldState; 6],
    /// Id value the backend last reported as taken.
    taken_id: Option<String>,
    loading: bool,
    submitted: bool,
    error_message: Option<String>,
}

impl<S, N> ProductFormWorkflow<S, N>
where
    S: ProductApi,
    N: Navigator,
{
    /// `route_id` is the `:id` route parameter, if any.
    pub fn new(service: S, navigator: N, route_id: Option<String>) -> Self {
        let mode = match route_id {
            Some(product_id) if !product_id.is_empty() => FormMode::Edit { product_id },
            _ => FormMode::Create,
        };

        let mut fields: [FieldState; 6] = Default::default();
        fields[ProductField::DateRevision as usize] = FieldState::disabled();

        let mut form = Self {
            service,
            navigator,
            clock: Arc::new(SystemClock),
            mode,
            fields,
            taken_id: None,
            loading: false,
            submitted: false,
            error_message: None,
        };
        form.revalidate();
        form
    }

    /// Replace the source of "today" used by the release-date rule.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self.revalidate();
        self
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn field(&self, field: ProductField) -> &FieldState {
        &self.fields[field as usize]
    }

    fn field_mut(&mut self, field: ProductField) -> &mut FieldState {
        &mut self.fields[field as usize]
    }

    pub fn value(&self, field: ProductField) -> &str {
        self.field(field).value()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True when no enabled field has errors.
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|field| field.is_disabled() || field.is_valid())
    }

    /// Load the record in edit mode. No-op in create mode.
    pub async fn initialize(&mut self) {
        let FormMode::Edit { product_id } = self.mode.clone() else {
            return;
        };

        self.loading = true;
        match self.service.list().await {
            Ok(products) => match products.into_iter().find(|p| p.id == product_id) {
                Some(product) => {
                    self.populate(&product);
                    self.field_mut(ProductField::Id).set_disabled(true);
                    tracing::debug!(id = %product_id, "product loaded into form");
                }
                None => {
                    tracing::warn!(id = %product_id, "product to edit not found");
                    self.error_message = Some(NOT_FOUND_ERROR.to_string());
                }
            },
            Err(e) => {
                tracing::error!("Error loading product: {e}");
                self.error_message = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    fn populate(&mut self, product: &Product) {
        self.field_mut(ProductField::Id).set_value(&product.id);
        self.field_mut(ProductField::Name).set_value(&product.name);
        self.field_mut(ProductField::Description)
            .set_value(&product.description);
        self.field_mut(ProductField::Logo).set_value(&product.logo);
        self.field_mut(ProductField::DateRelease)
            .set_value(dates::format_input(product.date_release));
        self.derive_revision();
        // The stored revision wins over the derived one so an inconsistent
        // record shows up as a revision error.
        self.field_mut(ProductField::DateRevision)
            .set_value(dates::format_input(product.date_revision));
        self.revalidate();
    }

    /// User input into `field`. Rejected (returns false) for disabled fields.
    pub fn set_value(&mut self, field: ProductField, value: impl Into<String>) -> bool {
        if self.field(field).is_disabled() {
            tracing::debug!(%field, "ignoring input into disabled field");
            return false;
        }

        self.field_mut(field).set_value(value);
        if field == ProductField::DateRelease {
            self.derive_revision();
        }
        self.revalidate();
        true
    }

    /// Mark `field` as visited (blur), so its errors become visible.
    pub fn touch(&mut self, field: ProductField) {
        self.field_mut(field).set_touched(true);
    }

    /// `date_revision` = `date_release` + 1 year, or empty without a usable release date.
    fn derive_revision(&mut self) {
        let revision = match dates::parse_date(self.value(ProductField::DateRelease)) {
            Ok(release) => dates::format_input(dates::add_one_year(release)),
            Err(_) => String::new(),
        };
        self.field_mut(ProductField::DateRevision)
            .set_value(revision);
    }

    fn revalidate(&mut self) {
        let today = self.clock.today();
        let release = self.value(ProductField::DateRelease).to_string();

        for field in ProductField::ALL {
            let value = self.value(field).to_string();
            let mut errors = validate_field(field, &value, &release, today);

            if field == ProductField::Id
                && errors.is_empty()
                && self.taken_id.as_deref() == Some(value.as_str())
            {
                errors.push(FieldError::IdExists);
            }
            self.field_mut(field).set_errors(errors);
        }
    }

    /// Ask the backend whether the current id is taken (create mode only).
    ///
    /// Skipped while the id fails its format rules. A transport failure
    /// leaves the field's errors unchanged.
    pub async fn check_id_availability(&mut self) {
        let id_field = self.field(ProductField::Id);
        let format_ok = id_field.errors().iter().all(|e| *e == FieldError::IdExists);
        if self.is_edit_mode() || id_field.is_disabled() || !format_ok {
            return;
        }

        let candidate = id_field.value().to_string();
        match self.service.verify_id_exists(&candidate).await {
            Ok(true) => self.taken_id = Some(candidate),
            Ok(false) => {
                if self.taken_id.as_deref() == Some(candidate.as_str()) {
                    self.taken_id = None;
                }
            }
            Err(e) => {
                tracing::warn!(id = %candidate, "id availability check failed: {e}");
                return;
            }
        }
        self.revalidate();
    }

    /// All values including disabled fields.
    pub fn raw_values(&self) -> FormValues {
        FormValues {
            id: self.value(ProductField::Id).to_string(),
            name: self.value(ProductField::Name).to_string(),
            description: self.value(ProductField::Description).to_string(),
            logo: self.value(ProductField::Logo).to_string(),
            date_release: self.value(ProductField::DateRelease).to_string(),
            date_revision: self.value(ProductField::DateRevision).to_string(),
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submitted = true;

        if !self.is_valid() {
            for field in self.fields.iter_mut().filter(|f| !f.is_disabled()) {
                field.set_touched(true);
            }
            return SubmitOutcome::Invalid;
        }

        let product = match self.raw_values().to_product() {
            Ok(product) => product,
            Err(e) => {
                tracing::debug!("form values do not form a product: {e}");
                return SubmitOutcome::Invalid;
            }
        };

        match self.mode.clone() {
            FormMode::Create => self.create(product).await,
            FormMode::Edit { product_id } => self.update(&product_id, product).await,
        }
    }

    async fn create(&mut self, product: Product) -> SubmitOutcome {
        self.loading = true;

        match self.service.verify_id_exists(&product.id).await {
            Ok(false) => {}
            Ok(true) => {
                self.taken_id = Some(product.id.clone());
                self.revalidate();
                self.touch(ProductField::Id);
                self.loading = false;
                return SubmitOutcome::IdTaken;
            }
            Err(e) => {
                return self.fail(VERIFY_ERROR, e);
            }
        }

        match self.service.create(&product).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "product created");
                self.loading = false;
                self.navigator.navigate(Route::ProductList);
                SubmitOutcome::Created
            }
            Err(e) => self.fail(CREATE_ERROR, e),
        }
    }

    async fn update(&mut self, product_id: &str, product: Product) -> SubmitOutcome {
        self.loading = true;
        let (_, update) = product.split();

        match self.service.update(product_id, &update).await {
            Ok(updated) => {
                tracing::info!(id = %updated.id, "product updated");
                self.loading = false;
                self.navigator.navigate(Route::ProductList);
                SubmitOutcome::Updated
            }
            Err(e) => self.fail(UPDATE_ERROR, e),
        }
    }

    fn fail(&mut self, message: &str, cause: ClientError) -> SubmitOutcome {
        tracing::error!("{message}: {cause}");
        self.error_message = Some(message.to_string());
        self.loading = false;
        SubmitOutcome::Failed
    }

    /// Clear values, touched flags and the submitted flag. Mode and disabled
    /// flags are kept.
    pub fn reset(&mut self) {
        self.submitted = false;
        self.taken_id = None;
        for field in self.fields.iter_mut() {
            field.set_value(String::new());
            field.set_touched(false);
        }
        self.revalidate();
    }

    /// True iff revision == release + 1 year exactly (false if either is empty).
    pub fn validate_revision_date(&self) -> bool {
        dates::revision_matches(
            self.value(ProductField::DateRelease),
            self.value(ProductField::DateRevision),
        )
    }

    /// Message to show under `field`; empty while untouched or valid.
    pub fn error_message_for(&self, field: ProductField) -> String {
        let state = self.field(field);
        if state.errors().is_empty() || !state.is_touched() {
            return String::new();
        }

        let precedence = |error: FieldError| match error {
            FieldError::Required => Some(0),
            FieldError::MinLength { .. } => Some(1),
            FieldError::MaxLength { .. } => Some(2),
            FieldError::DateInvalid => Some(3),
            FieldError::IdExists => Some(4),
            FieldError::RevisionMismatch => None,
        };

        if let Some(error) = state
            .errors()
            .iter()
            .copied()
            .filter(|e| precedence(*e).is_some())
            .min_by_key(|e| precedence(*e))
        {
            return error.to_string();
        }

        if field == ProductField::DateRevision && !self.validate_revision_date() {
            return FieldError::RevisionMismatch.to_string();
        }

        INVALID_FIELD.to_string()
    }
}
