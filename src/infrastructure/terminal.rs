use crate::domain::ports::{Navigator, Notifier, Route, Toast, ToastVariant};
use tracing::{info, warn};

/// Navigator for the CLI: route changes and redirects become log lines.
pub struct TerminalNavigator {
    origin: String,
}

impl TerminalNavigator {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn navigate_to(&self, route: Route) {
        info!(path = %route.path(), "navigating");
    }

    fn redirect_externally(&self, url: &str) {
        info!(%url, "redirecting to external consent page");
    }
}

/// Notifier for the CLI: toasts become log lines.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, toast: Toast) {
        let description = toast.description.unwrap_or_default();
        match toast.variant {
            ToastVariant::Success => info!(title = %toast.title, %description, "toast"),
            ToastVariant::Error => warn!(title = %toast.title, %description, "toast"),
        }
    }
}
