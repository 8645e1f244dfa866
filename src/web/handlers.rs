use crate::export;
use crate::i18n::{Language, LanguageRegistry, LanguageStrings};
use crate::validation::validate_email;
use crate::waitlist::{EntryId, JoinOutcome, WaitlistEntry};
use crate::web::error::ApiError;
use crate::web::extract::RequestLanguage;
use crate::web::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// ==================== Readiness ====================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service_ready: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service_ready: state.is_ready(),
    })
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service_ready: bool,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service_ready: state.is_ready(),
    })
}

// ==================== Strings ====================

#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub native_name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StringsResponse {
    pub language: &'static str,
    pub native_name: &'static str,
    pub languages: Vec<LanguageOption>,
    pub strings: &'static LanguageStrings,
}

pub async fn strings(RequestLanguage(lang): RequestLanguage) -> Json<StringsResponse> {
    let languages = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config| LanguageOption {
            code: config.code,
            native_name: config.native_name,
        })
        .collect();

    Json(StringsResponse {
        language: lang.code(),
        native_name: lang.native_name(),
        languages,
        strings: lang.strings(),
    })
}

// ==================== Public Waitlist ====================

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
    pub message: String,
    pub service_ready: bool,
}

/// Signup counter. Reports zero in degraded mode instead of failing.
pub async fn count(
    State(state): State<AppState>,
    RequestLanguage(lang): RequestLanguage,
) -> Result<Json<CountResponse>, ApiError> {
    let count = match state.store(lang) {
        Ok(store) => store.count().await.map_err(|e| ApiError::Store(lang, e))?,
        Err(_) => 0,
    };

    Ok(Json(CountResponse {
        count,
        message: lang.strings().counter(count),
        service_ready: state.is_ready(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub email: String,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JoinResponse {
    #[serde(flatten)]
    pub outcome: JoinOutcome,
    pub message: &'static str,
}

/// Validate the address, then join. A duplicate answers 409 with
/// `reason: "already_exists"`. A body that is not a `JoinRequest` answers 400
/// in the request language.
pub async fn join(
    State(state): State<AppState>,
    RequestLanguage(lang): RequestLanguage,
    payload: Result<Json<JoinRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JoinResponse>), ApiError> {
    let Json(body) =
        payload.map_err(|rejection| ApiError::BadRequest(lang, rejection.body_text()))?;

    let lang = body
        .lang
        .as_deref()
        .and_then(|tag| Language::from_tag(tag).ok())
        .unwrap_or(lang);

    let email = validate_email(&body.email).map_err(|e| ApiError::InvalidEmail(lang, e))?;
    let store = state.store(lang)?;

    let outcome = store
        .join(&email)
        .await
        .map_err(|e| ApiError::Store(lang, e))?;

    let (status, message) = match outcome {
        JoinOutcome::Joined => (StatusCode::CREATED, lang.strings().subscribe_success),
        JoinOutcome::AlreadyExists => {
            debug!("Duplicate waitlist join rejected");
            (StatusCode::CONFLICT, lang.strings().subscribe_already_exists)
        }
    };

    Ok((status, Json(JoinResponse { outcome, message })))
}

// ==================== Admin ====================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    /// Size of the whole waitlist, before filtering
    pub total: usize,
    pub entries: Vec<WaitlistEntry>,
}

/// All entries, most recent first, optionally filtered by a
/// case-insensitive email substring
pub async fn list_entries(
    State(state): State<AppState>,
    RequestLanguage(lang): RequestLanguage,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    let entries = state
        .store(lang)?
        .list_all()
        .await
        .map_err(|e| ApiError::Store(lang, e))?;
    let total = entries.len();

    let entries = match query.search.as_deref().map(str::trim) {
        Some(needle) if !needle.is_empty() => {
            let needle = needle.to_lowercase();
            entries
                .into_iter()
                .filter(|e| e.email.to_lowercase().contains(&needle))
                .collect()
        }
        _ => entries,
    };

    Ok(Json(ListResponse { total, entries }))
}

pub async fn export_csv(
    State(state): State<AppState>,
    RequestLanguage(lang): RequestLanguage,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state
        .store(lang)?
        .list_all()
        .await
        .map_err(|e| ApiError::Store(lang, e))?;

    let filename = export::export_filename(chrono::Utc::now().date_naive());
    info!("Exporting {} waitlist entries", entries.len());

    let headers: [(HeaderName, String); 2] = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, export::to_csv(&entries, lang)))
}

/// Idempotent delete. Ids that do not parse cannot exist, so they are a no-op too.
pub async fn remove_entry(
    State(state): State<AppState>,
    RequestLanguage(lang): RequestLanguage,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store(lang)?;

    match id.parse::<EntryId>() {
        Ok(id) => store
            .remove(id)
            .await
            .map_err(|e| ApiError::Store(lang, e))?,
        Err(_) => debug!("Ignoring delete for malformed id: {}", id),
    }

    Ok(StatusCode::NO_CONTENT)
}
