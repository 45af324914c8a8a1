//! `fincatalog-core` — financial product catalog primitives.
//!
//! This crate contains the **pure** parts of the catalog (no IO, no HTTP):
//! the wire model, calendar-date rules and per-field validation shared by the
//! client workflows and the development backend.

pub mod clock;
pub mod dates;
pub mod error;
pub mod product;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use product::{
    ApiError, MessageResponse, Product, ProductListResponse, ProductMutationResponse,
    ProductUpdate,
};
pub use validation::{FieldError, FieldViolation, ProductField};
