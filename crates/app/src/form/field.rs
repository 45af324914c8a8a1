use fincatalog_core::FieldError;

/// One form control: its raw value, current rule failures and UI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    errors: Vec<FieldError>,
    touched: bool,
    disabled: bool,
}

impl FieldState {
    pub(crate) fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_error(&self, error: FieldError) -> bool {
        self.errors.contains(&error)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub(crate) fn set_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors;
    }

    pub(crate) fn set_touched(&mut self, touched: bool) {
        self.touched = touched;
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
