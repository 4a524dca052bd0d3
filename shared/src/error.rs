//! Unified error system for the back-office
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Lead errors
//! - 2xxx: Employee errors
//! - 3xxx: Booking errors
//! - 4xxx: Package errors
//! - 9xxx: System errors
//!
//! Every error renders on the wire as `{"error": "<message>"}` with the
//! HTTP status derived from its code. That body shape is part of the API
//! contract consumed by the admin UI and must not grow an envelope.

use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Lead ====================
    /// Lead not found
    LeadNotFound = 1001,

    // ==================== 2xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 2001,
    /// Employee with the same email or phone already exists
    EmployeeExists = 2002,

    // ==================== 3xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 3001,

    // ==================== 4xxx: Package ====================
    /// Travel package not found
    PackageNotFound = 4001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Notification sender failure (never surfaced to callers)
    NotificationFailed = 9003,
    /// External auth provider failure (never surfaced to callers)
    AuthProviderError = 9004,
}

/// Error classification by domain, used for logging decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    General,
    Lead,
    Employee,
    Booking,
    Package,
    System,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed | Self::InvalidRequest | Self::RequiredField => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound
            | Self::LeadNotFound
            | Self::EmployeeNotFound
            | Self::BookingNotFound
            | Self::PackageNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists | Self::EmployeeExists => StatusCode::CONFLICT,
            Self::InternalError
            | Self::DatabaseError
            | Self::NotificationFailed
            | Self::AuthProviderError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the default message for this error
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::LeadNotFound => "Lead not found",
            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeExists => "Employee already exists",
            Self::BookingNotFound => "Booking not found",
            Self::PackageNotFound => "Package not found",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::NotificationFailed => "Notification failed",
            Self::AuthProviderError => "Auth provider error",
        }
    }

    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            0..=999 => ErrorCategory::General,
            1000..=1999 => ErrorCategory::Lead,
            2000..=2999 => ErrorCategory::Employee,
            3000..=3999 => ErrorCategory::Booking,
            4000..=4999 => ErrorCategory::Package,
            _ => ErrorCategory::System,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Application error with structured error code and details
///
/// The primary error type for the back-office, providing standardized
/// codes via [`ErrorCode`], human-readable messages, and optional
/// structured details for diagnostics.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{r} not found")).with_detail("resource", r)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{r} already exists"))
            .with_detail("resource", r)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Log system errors
        if matches!(self.code.category(), ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        let body = serde_json::json!({ "error": self.message });
        (status, Json(body)).into_response()
    }
}
