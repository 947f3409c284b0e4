//! Mutex-guarded, capacity-bounded member registry.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::ports::{DEFAULT_MEMBER_LIMIT, MemberRegistry, MemberRegistryError};
use crate::domain::{Member, MemberName};

/// Registry keeping members in a vector behind one coarse lock.
///
/// Every operation takes the same lock, so the capacity check and append in
/// `add` are atomic and readers never observe a half-finished insert.
///
/// # Examples
/// ```
/// use signup::domain::Member;
/// use signup::domain::ports::MemberRegistry;
/// use signup::outbound::memory::InMemoryMemberRegistry;
///
/// let registry = InMemoryMemberRegistry::with_capacity(1);
/// let member = Member::try_from_parts(Some("momo".to_owned()), Some(26)).expect("valid");
/// registry.add(&member).expect("first slot is free");
/// assert!(registry.add(&member).is_err());
/// assert_eq!(registry.list(), vec![member]);
/// ```
#[derive(Debug)]
pub struct InMemoryMemberRegistry {
    members: Mutex<Vec<Member>>,
    capacity: usize,
}

impl Default for InMemoryMemberRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MEMBER_LIMIT)
    }
}

impl InMemoryMemberRegistry {
    /// Empty registry accepting [`DEFAULT_MEMBER_LIMIT`] members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry accepting at most `capacity` members.
    ///
    /// Storage grows on demand; `capacity` only bounds [`MemberRegistry::add`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Mutex::new(Vec::new()),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Member>> {
        // A panic cannot leave the vector half-written, so a poisoned guard
        // still holds consistent data.
        self.members.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemberRegistry for InMemoryMemberRegistry {
    fn add(&self, member: &Member) -> Result<(), MemberRegistryError> {
        let mut members = self.lock();
        if members.len() >= self.capacity {
            warn!(limit = self.capacity, "member limit reached; rejecting sign-up");
            return Err(MemberRegistryError::capacity_exceeded(self.capacity));
        }
        members.push(member.clone());
        debug!(name = %member.name(), count = members.len(), "member added");
        Ok(())
    }

    fn list(&self) -> Vec<Member> {
        self.lock().clone()
    }

    fn check_availability(&self, name: &MemberName) -> Result<(), MemberRegistryError> {
        let taken = self.lock().iter().any(|member| member.name() == name);
        debug!(%name, taken, "name availability checked");
        if taken {
            Err(MemberRegistryError::name_taken())
        } else {
            Ok(())
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
