use crate::security::{bearer_token, verify_admin};
use crate::web::error::ApiError;
use crate::web::extract::request_language;
use crate::web::state::AppState;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

/// Reject admin requests without `Authorization: Bearer <ADMIN_PASSWORD>`
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);

    if !verify_admin(state.admin_password(), presented) {
        warn!("Rejected admin request to {}", request.uri().path());
        let lang = request_language(request.uri(), request.headers());
        return Err(ApiError::Unauthorized(lang));
    }

    Ok(next.run(request).await)
}
