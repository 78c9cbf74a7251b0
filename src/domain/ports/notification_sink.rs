/// User-visible notifications (toasts)
///
/// Fire-and-forget: nothing is returned and callers never wait on delivery.
pub trait NotificationSink: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}
