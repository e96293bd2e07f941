//! In-memory store of independent sessions.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use parking_lot::Mutex;
use rand::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::GameError;

/// Random identifier of a stored session, shown as 32 hex digits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionId(u128);

impl SessionId {
    fn random(rng: &mut impl Rng) -> Self {
        SessionId(rng.gen())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u128::from_str_radix(s, 16).map(SessionId)
    }
}

/// Sessions keyed by [`SessionId`].
///
/// Each call takes the lock once, so an [`SessionStore::update`] runs its
/// closure as one step relative to other callers. Sessions are values and
/// never share boards with each other.
pub struct SessionStore<T> {
    sessions: Mutex<HashMap<SessionId, T>>,
}

impl<T> Default for SessionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SessionStore<T> {
    #[must_use]
    pub fn new() -> Self {
        SessionStore {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Store a session under a fresh id
    pub fn insert(&self, session: T) -> SessionId {
        let mut sessions = self.sessions.lock();
        let mut rng = thread_rng();
        let mut id = SessionId::random(&mut rng);
        while sessions.contains_key(&id) {
            id = SessionId::random(&mut rng);
        }
        sessions.insert(id, session);
        log::info!("session {id} created ({} active)", sessions.len());
        id
    }

    /// Run `f` on the stored session while holding the lock. When `f`
    /// fails, whatever it left in the session stays, so callers should
    /// only mutate after their last fallible step.
    pub fn update<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut T) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(&id)
            .ok_or(GameError::SessionNotFound { id })?;
        f(session)
    }

    pub fn remove(&self, id: SessionId) -> Result<T, GameError> {
        let removed = self
            .sessions
            .lock()
            .remove(&id)
            .ok_or(GameError::SessionNotFound { id })?;
        log::info!("session {id} removed");
        Ok(removed)
    }

    /// Ids of all stored sessions, sorted
    #[must_use]
    pub fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.lock().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

impl<T: Clone> SessionStore<T> {
    /// Snapshot of a stored session
    pub fn get(&self, id: SessionId) -> Result<T, GameError> {
        self.sessions
            .lock()
            .get(&id)
            .cloned()
            .ok_or(GameError::SessionNotFound { id })
    }
}
