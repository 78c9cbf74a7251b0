// Logging setup

/// Installs the fmt subscriber as the global default
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    if tracing_subscriber::fmt().try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
