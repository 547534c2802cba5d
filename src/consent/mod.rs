//! Consent validation.
//!
//! Enrollment requires accepting the club terms and the informed consent on
//! risks. Image use is optional.

use crate::errors::AppError;
use crate::models::CreateConsentRequest;

/// Version of the terms a new consent record refers to.
pub const CURRENT_TERMS_VERSION: &str = "2024-01";

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

/// Check that a consent request can be recorded.
pub fn validate(request: &CreateConsentRequest) -> Result<(), AppError> {
    if request.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".to_string()));
    }
    if !request.accepts_terms {
        return Err(AppError::Validation(
            "Terms and conditions must be accepted".to_string(),
        ));
    }
    if !request.accepts_risks {
        return Err(AppError::Validation(
            "Informed consent on risks must be accepted".to_string(),
        ));
    }
    if request.is_guardian && is_blank(&request.minor_name) {
        return Err(AppError::Validation(
            "Minor name is required when signing as guardian".to_string(),
        ));
    }
    if let Some(email) = request.email.as_deref().map(str::trim) {
        if !email.is_empty() && !email.contains('@') {
            return Err(AppError::Validation("Email is invalid".to_string()));
        }
    }
    Ok(())
}
