use axum::{extract::FromRequest, response::IntoResponse};
use serde::Serialize;

use crate::error::ApiError;

/// `Json` that reports malformed or non-JSON bodies as `ApiError::InvalidJson`
/// instead of axum's default 415/422 plain text rejections.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{header, Request, StatusCode}, routing::post, Router};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn echo(ApiJson(body): ApiJson<Value>) -> ApiJson<Value> {
        ApiJson(body)
    }

    fn router() -> Router {
        Router::new().route("/echo", post(echo))
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let response = router()
            .oneshot(
                Request::post("/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INVALID_JSON");
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let response = router()
            .oneshot(Request::post("/echo").body(Body::from("{}")).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
