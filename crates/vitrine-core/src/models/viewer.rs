//! Viewer context model

use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Per-request viewer information used to personalize formatted results.
///
/// The auth token is an opaque handle passed through to portal collaborators
/// for permission and thumbnail resolution; it is never interpreted here and
/// must not appear in logs.
#[derive(Clone)]
pub struct ViewerContext {
    /// Locale tag used for locale-suffixed index fields, e.g. `en_US`
    pub locale: String,
    /// Opaque portal authorization token
    pub auth_token: String,
}

impl ViewerContext {
    pub fn new(locale: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            auth_token: auth_token.into(),
        }
    }
}

impl Debug for ViewerContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ViewerContext")
            .field("locale", &self.locale)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}
