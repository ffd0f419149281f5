//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request is missing fields or is otherwise malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Currency code is not in the rate table.
    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(String),

    /// Amount is not numeric, not finite, or violates the money invariant.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::UnsupportedCurrency(_) | Self::InvalidAmount(_) => 400,
            Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::UnsupportedCurrency(_) => "unsupported_currency",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::Configuration(_) => "configuration_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Returns true if the caller caused the error.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Validation(String::new()), 400, "validation_error")]
    #[case(AppError::UnsupportedCurrency(String::new()), 400, "unsupported_currency")]
    #[case(AppError::InvalidAmount(String::new()), 400, "invalid_amount")]
    #[case(AppError::Configuration(String::new()), 500, "configuration_error")]
    #[case(AppError::Internal(String::new()), 500, "internal_error")]
    fn test_error_status_and_code(
        #[case] err: AppError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_code(), code);
        assert_eq!(err.is_client_error(), status < 500);
    }

    #[test]
    fn test_config_error_maps_to_configuration() {
        let err: AppError = config::ConfigError::Message("bad port".into()).into();
        assert!(matches!(err, AppError::Configuration(ref m) if m == "bad port"));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::UnsupportedCurrency("ZZZ".into()).to_string(),
            "Unsupported currency code: ZZZ"
        );
        assert_eq!(
            AppError::InvalidAmount("from_units".into()).to_string(),
            "Invalid amount: from_units"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }
}
