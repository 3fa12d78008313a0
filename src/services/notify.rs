//! Transient user notices.

pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);
}

/// Emits notices as `info` events. Used where no toast surface exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!(message, "success notice");
    }
}
