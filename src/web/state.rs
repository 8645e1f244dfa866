use crate::i18n::Language;
use crate::waitlist::WaitlistStore;
use crate::web::error::ApiError;
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// `None` when no backing store is configured (degraded mode)
    store: Option<Arc<dyn WaitlistStore>>,
    admin_password: Option<Arc<str>>,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn WaitlistStore>>, admin_password: Option<String>) -> Self {
        Self {
            store,
            admin_password: admin_password.map(Arc::from),
        }
    }

    /// The "service ready" signal: writes are only possible with a store
    pub fn is_ready(&self) -> bool {
        self.store.is_some()
    }

    pub fn admin_password(&self) -> Option<&str> {
        self.admin_password.as_deref()
    }

    /// The configured store, or a localized 503
    pub fn store(&self, lang: Language) -> Result<&dyn WaitlistStore, ApiError> {
        self.store
            .as_deref()
            .ok_or(ApiError::ServiceUnavailable(lang))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_ready", &self.is_ready())
            .field("admin_enabled", &self.admin_password.is_some())
            .finish()
    }
}
