//! Per-field product rules.
//!
//! Validators work on raw strings so the form can run them on every keystroke;
//! [`validate_product`] and [`validate_update`] apply the same rules to typed
//! records on the backend side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates;
use crate::product::{Product, ProductUpdate};

pub const ID_MIN_LEN: usize = 3;
pub const ID_MAX_LEN: usize = 10;
pub const NAME_MIN_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Product fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Id,
    Name,
    Description,
    Logo,
    DateRelease,
    DateRevision,
}

impl ProductField {
    pub const ALL: [ProductField; 6] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::Description,
        ProductField::Logo,
        ProductField::DateRelease,
        ProductField::DateRevision,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Logo => "logo",
            ProductField::DateRelease => "date_release",
            ProductField::DateRevision => "date_revision",
        }
    }
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule failure on one field. `Display` is the user-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Minimum {required} characters")]
    MinLength { required: usize, actual: usize },

    #[error("Maximum {required} characters")]
    MaxLength { required: usize, actual: usize },

    #[error("The date must be today or later")]
    DateInvalid,

    #[error("This ID already exists")]
    IdExists,

    #[error("The revision date must be exactly one year after the release date.")]
    RevisionMismatch,
}

impl FieldError {
    /// Stable machine-readable key.
    pub fn key(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::MinLength { .. } => "minlength",
            FieldError::MaxLength { .. } => "maxlength",
            FieldError::DateInvalid => "date_invalid",
            FieldError::IdExists => "id_exists",
            FieldError::RevisionMismatch => "revision_mismatch",
        }
    }
}

/// A rule failure attributed to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: ProductField,
    pub error: FieldError,
}

/// Required + character-length bounds. Length rules only fire on non-empty input.
pub fn validate_text(value: &str, min: usize, max: usize) -> Vec<FieldError> {
    if value.is_empty() {
        return vec![FieldError::Required];
    }

    let actual = value.chars().count();
    let mut errors = Vec::new();
    if actual < min {
        errors.push(FieldError::MinLength { required: min, actual });
    }
    if actual > max {
        errors.push(FieldError::MaxLength { required: max, actual });
    }
    errors
}

pub fn validate_required(value: &str) -> Vec<FieldError> {
    if value.is_empty() {
        vec![FieldError::Required]
    } else {
        Vec::new()
    }
}

/// Release date: required, parseable, not before `today`.
pub fn validate_release_date(value: &str, today: NaiveDate) -> Vec<FieldError> {
    if value.is_empty() {
        return vec![FieldError::Required];
    }
    match dates::parse_date(value) {
        Ok(date) if date >= today => Vec::new(),
        _ => vec![FieldError::DateInvalid],
    }
}

/// Revision date: required, and one year after `release` when both are present.
pub fn validate_revision_date(release: &str, revision: &str) -> Vec<FieldError> {
    if revision.is_empty() {
        return vec![FieldError::Required];
    }
    if !release.is_empty() && !dates::revision_matches(release, revision) {
        return vec![FieldError::RevisionMismatch];
    }
    Vec::new()
}

/// Run the synchronous rules for one field.
///
/// `release` is the current release-date value, needed by the revision rule.
pub fn validate_field(
    field: ProductField,
    value: &str,
    release: &str,
    today: NaiveDate,
) -> Vec<FieldError> {
    match field {
        ProductField::Id => validate_text(value, ID_MIN_LEN, ID_MAX_LEN),
        ProductField::Name => validate_text(value, NAME_MIN_LEN, NAME_MAX_LEN),
        ProductField::Description => {
            validate_text(value, DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN)
        }
        ProductField::Logo => validate_required(value),
        ProductField::DateRelease => validate_release_date(value, today),
        ProductField::DateRevision => validate_revision_date(release, value),
    }
}

fn collect(out: &mut Vec<FieldViolation>, field: ProductField, errors: Vec<FieldError>) {
    out.extend(errors.into_iter().map(|error| FieldViolation { field, error }));
}

fn validate_editable(
    out: &mut Vec<FieldViolation>,
    update: &ProductUpdate,
    today: Option<NaiveDate>,
) {
    collect(
        out,
        ProductField::Name,
        validate_text(&update.name, NAME_MIN_LEN, NAME_MAX_LEN),
    );
    collect(
        out,
        ProductField::Description,
        validate_text(&update.description, DESCRIPTION_MIN_LEN, DESCRIPTION_MAX_LEN),
    );
    collect(out, ProductField::Logo, validate_required(&update.logo));

    if let Some(today) = today {
        if update.date_release < today {
            collect(out, ProductField::DateRelease, vec![FieldError::DateInvalid]);
        }
    }
    if !dates::is_one_year_after(update.date_release, update.date_revision) {
        collect(
            out,
            ProductField::DateRevision,
            vec![FieldError::RevisionMismatch],
        );
    }
}

/// Validate a complete record for creation (release date must not be before `today`).
pub fn validate_product(product: &Product, today: NaiveDate) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    collect(
        &mut out,
        ProductField::Id,
        validate_text(&product.id, ID_MIN_LEN, ID_MAX_LEN),
    );
    let update = product.clone().split().1;
    validate_editable(&mut out, &update, Some(today));
    out
}

/// Validate an update body. Existing records may predate today, so the
/// release date is not compared against the clock.
pub fn validate_update(update: &ProductUpdate) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    validate_editable(&mut out, update, None);
    out
}
