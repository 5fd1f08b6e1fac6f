//! Custom Axum extractors

use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::Deserialize;

use super::error::ApiError;

/// Raw submission fields; either may be absent
#[derive(Debug, Default, Deserialize)]
pub struct SubmitFields {
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    #[serde(rename = "postContent")]
    pub post_content: Option<String>,
}

/// Extract submission fields from a urlencoded form or a JSON body.
///
/// Bodies of any other type carry no fields, which the handler then rejects
/// as a missing-field submission. A form or JSON body that does not decode
/// (duplicate keys, non-string values, oversized) is a malformed body.
pub struct SubmitPayload(pub SubmitFields);

impl<S> FromRequest<S> for SubmitPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let Json(fields) = Json::<SubmitFields>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::MalformedBody {
                    reason: rejection.body_text(),
                })?;
            return Ok(Self(fields));
        }

        match Form::<SubmitFields>::from_request(req, state).await {
            Ok(Form(fields)) => Ok(Self(fields)),
            Err(FormRejection::InvalidFormContentType(_)) => {
                tracing::debug!("Submission without a form content type");
                Ok(Self(SubmitFields::default()))
            }
            Err(rejection) => Err(ApiError::MalformedBody {
                reason: rejection.body_text(),
            }),
        }
    }
}
