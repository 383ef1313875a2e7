use crate::error::NormalizeError;

/// Result of a normalization: always carries a usable value.
///
/// On success `value` is the normalized form. On failure `value` is the
/// original input, untouched, and `error` says why it could not be
/// normalized. Callers decide whether to proceed with the best-effort value
/// or reject it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Normalized {
    value: String,
    error: Option<NormalizeError>,
}

impl Normalized {
    pub fn ok(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }

    /// Pairs the original input with the error that prevented normalization.
    pub fn fallback(original: impl Into<String>, error: NormalizeError) -> Self {
        Self {
            value: original.into(),
            error: Some(error),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&NormalizeError> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_value(self) -> String {
        self.value
    }

    pub fn into_parts(self) -> (String, Option<NormalizeError>) {
        (self.value, self.error)
    }

    pub fn into_result(self) -> Result<String, NormalizeError> {
        match self.error {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }
}
