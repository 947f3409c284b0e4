//! HTTP server configuration object.

use std::net::SocketAddr;

/// Configuration handed to [`super::create_server`].
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) member_limit: usize,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with a registry of `member_limit`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, member_limit: usize) -> Self {
        Self {
            bind_addr,
            member_limit,
        }
    }
}
