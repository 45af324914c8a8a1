//! `fincatalog-app`
//!
//! **Responsibility:** UI-agnostic workflows of the catalog client.
//!
//! - [`list::ProductListWorkflow`]: load, search, page-size and delete confirmation
//! - [`form::ProductFormWorkflow`]: create/edit form with validation and submission
//! - [`routes`]: route table and the [`routes::Navigator`] seam to the router
//!
//! A rendering layer binds to these state machines; none is included here.

pub mod form;
pub mod list;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use form::{FieldState, FormMode, ProductFormWorkflow, SubmitOutcome};
pub use list::{PendingDelete, ProductListWorkflow};
pub use routes::{Navigator, Route};
