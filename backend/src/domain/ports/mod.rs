//! Domain ports describing the edges of the hexagon.

mod macros;
pub(crate) use macros::define_port_error;

mod member_registry;

#[cfg(test)]
pub use member_registry::MockMemberRegistry;
pub use member_registry::{DEFAULT_MEMBER_LIMIT, MemberRegistry, MemberRegistryError};
