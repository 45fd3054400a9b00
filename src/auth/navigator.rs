//! The "send the user to the login page" side effect.
//!
//! When authentication is lost the client asks a [`Navigator`] to move the
//! user to the login location. A browser host performs a page navigation;
//! a CLI or desktop host may show a prompt instead.

use std::sync::{Arc, Mutex, PoisonError};

/// Performs the redirect requested by the client on logout.
pub trait Navigator: Send + Sync {
    /// Moves the user to `location` (e.g. `/login/`).
    fn redirect(&self, location: &str);
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn redirect(&self, location: &str) {
        (**self).redirect(location);
    }
}

/// A [`Navigator`] that only logs the requested redirect.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect(&self, location: &str) {
        tracing::info!(location, "Authentication lost, redirecting to login");
    }
}

/// A [`Navigator`] that remembers every requested redirect.
///
/// Hosts without a navigation primitive can poll
/// [`last_redirect`](Self::last_redirect) after a failed call.
///
/// # Example
///
/// ```rust
/// use temucosoft_api::auth::{Navigator, RecordingNavigator};
///
/// let navigator = RecordingNavigator::new();
/// navigator.redirect("/login/");
/// assert_eq!(navigator.last_redirect().as_deref(), Some("/login/"));
/// assert_eq!(navigator.redirect_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates a navigator with no recorded redirects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent redirect location.
    #[must_use]
    pub fn last_redirect(&self) -> Option<String> {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Returns how many redirects were requested.
    #[must_use]
    pub fn redirect_count(&self) -> usize {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, location: &str) {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location.to_string());
    }
}
