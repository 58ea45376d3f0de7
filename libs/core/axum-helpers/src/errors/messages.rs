//! Standard error messages and codes for consistent error responses.

// Message constants
pub const VALIDATION_FAILED: &str = "Request validation failed";
pub const INVALID_UUID: &str = "Invalid UUID format";
pub const NOT_FOUND_RESOURCE: &str = "Resource not found";
pub const INTERNAL_ERROR: &str = "An internal server error occurred";
pub const DB_ERROR: &str = "A database error occurred";

// Stable error codes for client parsing
pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_UUID: &str = "INVALID_UUID";
pub const CODE_JSON: &str = "INVALID_JSON";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_CONFLICT: &str = "CONFLICT";
pub const CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const CODE_INTERNAL: &str = "INTERNAL_ERROR";
