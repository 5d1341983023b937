// Resume endpoints: request validation plus the generate/optimize pipelines.
// Each pipeline is a single synchronous pass; parsing and rendering live in
// `parsing` and `render`.

pub mod generator;
pub mod handlers;
pub mod optimizer;

use crate::errors::AppError;

/// The one validation message the resume forms understand.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

pub(crate) fn missing_fields_error(missing: &[&str]) -> AppError {
    tracing::debug!("Rejecting request, missing fields: {}", missing.join(", "));
    AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
}
