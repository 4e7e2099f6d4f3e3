//! Response middleware

use crate::error::ErrorDetail;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Diagnostics mode: replace the generic body of an internal failure with
/// the underlying error message.
pub async fn expose_error_detail(mut response: Response) -> Response {
    match response.extensions_mut().remove::<ErrorDetail>() {
        Some(ErrorDetail(detail)) => {
            let status = response.status();
            let body = Json(json!({
                "error": detail,
                "code": "internal",
            }));
            (status, body).into_response()
        }
        None => response,
    }
}
