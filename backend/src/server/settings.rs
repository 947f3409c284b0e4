//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SIGNUP_*` environment variables or a
//! configuration file, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use signup::domain::ports::DEFAULT_MEMBER_LIMIT;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener and registry settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Maximum number of members the registry accepts.
    pub member_limit: Option<usize>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured registry capacity, falling back to the default limit.
    pub fn member_limit(&self) -> usize {
        self.member_limit.unwrap_or(DEFAULT_MEMBER_LIMIT)
    }

    /// Socket address assembled from host and port.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("signup")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("SIGNUP_HOST", None::<String>),
            ("SIGNUP_PORT", None::<String>),
            ("SIGNUP_MEMBER_LIMIT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.member_limit(), 10);
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal address")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SIGNUP_HOST", Some("127.0.0.1".to_owned())),
            ("SIGNUP_PORT", Some("9090".to_owned())),
            ("SIGNUP_MEMBER_LIMIT", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port(), 9090);
        assert_eq!(settings.member_limit(), 3);
        assert_eq!(
            settings.bind_addr().expect("override parses"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("literal address")
        );
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let settings = ServerSettings {
            host: Some("localhost".to_owned()),
            port: None,
            member_limit: None,
        };
        assert!(settings.bind_addr().is_err());
    }
}
