//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data`, so they only depend on the
//! registry port and stay testable without a running server.

use std::sync::Arc;

use crate::domain::ports::MemberRegistry;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use signup::inbound::http::state::HttpState;
/// use signup::outbound::memory::InMemoryMemberRegistry;
///
/// let state = HttpState::new(Arc::new(InMemoryMemberRegistry::new()));
/// assert_eq!(state.registry.capacity(), 10);
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Shared member registry.
    pub registry: Arc<dyn MemberRegistry>,
}

impl HttpState {
    /// Construct state around a registry handle.
    pub fn new(registry: Arc<dyn MemberRegistry>) -> Self {
        Self { registry }
    }
}
