//! Standard error messages for consistent error responses.

pub const VALIDATION_FAILED: &str = "Validation failed for the provided input";
pub const INVALID_ID: &str = "Invalid identifier format";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred";

// Operation failure messages returned by the catalog endpoints. Every
// non-validation failure collapses into the matching message with a 400.
pub const FETCH_FAILED: &str = "Could not fetch the data";
pub const SAVE_FAILED: &str = "Could not save the data";
pub const EDIT_FAILED: &str = "Could not edit the data";
pub const DELETE_FAILED: &str = "Could not delete the data";
