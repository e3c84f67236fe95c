//! Service marker trait.

/// A long-lived component wired in explicitly at startup.
///
/// Components implement this so they can be held in a
/// [`ServiceRegistry`](crate::registry::ServiceRegistry) and shared with
/// worker jobs as `Arc<Self>`, without process-wide singletons.
pub trait Service: Send + Sync + 'static {
    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
