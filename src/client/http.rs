//! Response handling shared by the Spoonacular and profile backend clients

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Check the response status and decode the JSON body.
///
/// Non-success statuses become typed `ApiError`s; a body that does not match
/// `T` becomes `ApiError::InvalidResponse`.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let data = response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    Ok(data)
}

/// Map a non-success status to an error, passing successful responses through.
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::PAYMENT_REQUIRED => ApiError::QuotaExceeded,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Resource not found".to_string());
            ApiError::NotFound(error_msg)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            ApiError::RateLimit(Duration::from_secs(retry_after))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Bad request".to_string());
            ApiError::BadRequest(error_msg)
        }
        status if status.is_server_error() => {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| format!("Server error: {}", status));
            ApiError::ServerError(error_msg)
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    };
    Err(err.into())
}
