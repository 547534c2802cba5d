//! Welcome and quick-query endpoints.

use serde::Serialize;

use super::{success, ApiResult, AppPath};
use crate::errors::AppError;
use crate::faq;
use crate::models::{QuickQuery, Welcome};

/// A step of the guided enrollment flow.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStep {
    pub step: u32,
    pub text: &'static str,
}

/// GET /api/welcome
pub async fn get_welcome() -> ApiResult<Welcome> {
    success(faq::welcome())
}

/// GET /api/quick-queries
pub async fn list_quick_queries() -> ApiResult<Vec<QuickQuery>> {
    success(faq::quick_queries())
}

/// GET /api/enrollment/steps/:step
pub async fn get_enrollment_step(
    AppPath(step): AppPath<u32>,
) -> ApiResult<EnrollmentStep> {
    let text = faq::enrollment_step(step)
        .ok_or_else(|| AppError::NotFound(format!("Enrollment step {} not found", step)))?;
    success(EnrollmentStep { step, text })
}
