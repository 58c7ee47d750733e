//! User-notification seam.

/// Receiver of user-visible failure notifications.
///
/// The response classifier emits exactly one notification per classified
/// failure through this trait; the embedding shell decides how to render it.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Default notifier: forwards notifications to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!(target: "venue_console::notify", "{}", message);
    }
}
