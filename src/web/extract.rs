use crate::i18n::Language;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap, Uri};
use serde::Deserialize;
use std::convert::Infallible;

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Language for a request: `?lang=`, then `Accept-Language`, then the default
pub fn request_language(uri: &Uri, headers: &HeaderMap) -> Language {
    let explicit = Query::<LangQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(q)| q.lang);
    let accept = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    Language::negotiate(explicit.as_deref(), accept)
}

/// Extractor wrapping the negotiated request language
#[derive(Debug, Clone, Copy)]
pub struct RequestLanguage(pub Language);

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestLanguage(request_language(&parts.uri, &parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_request_language_from_query() {
        let uri: Uri = "/api/waitlist/count?lang=ru".parse().unwrap();
        assert_eq!(
            request_language(&uri, &HeaderMap::new()),
            Language::RUSSIAN
        );
    }

    #[test]
    fn test_request_language_from_header() {
        let uri: Uri = "/api/waitlist/count".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        assert_eq!(request_language(&uri, &headers), Language::ENGLISH);
    }

    #[test]
    fn test_request_language_ignores_other_query_params() {
        let uri: Uri = "/api/admin/waitlist?search=gmail".parse().unwrap();
        assert_eq!(request_language(&uri, &HeaderMap::new()), Language::UZBEK);
    }
}
