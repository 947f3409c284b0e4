//! In-process adapters holding state for the lifetime of the server.

mod member_registry;

pub use member_registry::InMemoryMemberRegistry;
