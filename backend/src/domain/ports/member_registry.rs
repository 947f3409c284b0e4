//! Port for the shared member registry.
//!
//! Inbound adapters depend on this trait rather than on a concrete store, so
//! handler tests can substitute a double and the process wires a single
//! registry instance at startup.

use crate::domain::{Member, MemberName};

use super::define_port_error;

/// Registry capacity used when no limit is configured.
pub const DEFAULT_MEMBER_LIMIT: usize = 10;

define_port_error! {
    /// Failures reported by member registry adapters.
    pub enum MemberRegistryError {
        /// The registry already holds its maximum number of members.
        CapacityExceeded { limit: usize } => "signup closed: member limit ({limit}) reached",
        /// An existing member uses the queried name.
        NameTaken => "name already taken",
    }
}

/// Bounded, insertion-ordered collection of members shared across requests.
///
/// Implementations must make the capacity check and the append in [`add`]
/// a single critical section, and must never expose a partially appended
/// member to [`list`] or [`check_availability`].
///
/// [`add`]: MemberRegistry::add
/// [`list`]: MemberRegistry::list
/// [`check_availability`]: MemberRegistry::check_availability
#[cfg_attr(test, mockall::automock)]
pub trait MemberRegistry: Send + Sync {
    /// Append `member`, failing once the registry is full.
    ///
    /// Names are not checked for uniqueness here.
    fn add(&self, member: &Member) -> Result<(), MemberRegistryError>;

    /// Snapshot of every member in insertion order.
    fn list(&self) -> Vec<Member>;

    /// Fail with [`MemberRegistryError::NameTaken`] if a member already uses
    /// `name` (exact, case-sensitive match).
    fn check_availability(&self, name: &MemberName) -> Result<(), MemberRegistryError>;

    /// Maximum number of members the registry accepts.
    fn capacity(&self) -> usize;
}
