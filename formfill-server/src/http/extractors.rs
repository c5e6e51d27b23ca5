//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;

use super::error::ApiError;
use crate::models::{FormSubmission, ValidSubmission};

/// Extract a JSON form body and validate all four fields.
///
/// Body-level problems (bad JSON, wrong content type, non-string fields)
/// become `ApiError::InvalidBody`; field problems become
/// `ApiError::Validation`.
pub struct ValidForm(pub ValidSubmission);

impl<S> FromRequest<S> for ValidForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(form): Json<FormSubmission> = Json::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody {
                message: rejection.body_text(),
            })?;

        let submission = ValidSubmission::try_from(form)?;
        Ok(Self(submission))
    }
}
