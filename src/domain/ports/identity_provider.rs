/// Source of the acting user's identity
pub trait IdentityProvider: Send + Sync {
    /// Profile id of the current viewer, `None` when signed out
    fn viewer_id(&self) -> Option<String>;
}
