//! Query-style cache of the current authenticated user.
//!
//! DESIGN
//! ======
//! The auth forms never write the cached user. They only invalidate the
//! `"authUser"` key; the next read refetches `GET /api/auth/me`. A generation
//! counter keeps a fetch that raced with an invalidation from being stored as
//! fresh, so readers converge on the post-login identity.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::AuthUser;

/// Cache key holding the current authenticated user.
pub const AUTH_USER_KEY: &str = "authUser";

/// Invalidation side of the application's session cache.
pub trait SessionCache: Send + Sync {
    /// Mark `key` stale. Safe to call while other readers are mid-fetch.
    fn invalidate(&self, key: &str);
}

#[derive(Default)]
struct Slot {
    user: Option<AuthUser>,
    fresh: bool,
    generation: u64,
}

/// [`SessionCache`] holding the `"authUser"` entry.
pub struct AuthUserCache {
    api: Arc<dyn AuthApi>,
    slot: Mutex<Slot>,
}

impl AuthUserCache {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self { api, slot: Mutex::new(Slot::default()) }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current user, fetching from the server when the entry is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the refetch fails; the entry stays stale.
    pub async fn get(&self) -> Result<Option<AuthUser>, AuthError> {
        let generation = {
            let slot = self.slot();
            if slot.fresh {
                return Ok(slot.user.clone());
            }
            slot.generation
        };

        let user = self.api.current_user().await?;

        let mut slot = self.slot();
        if slot.generation == generation {
            slot.user.clone_from(&user);
            slot.fresh = true;
        } else {
            tracing::debug!(generation, current = slot.generation, "authUser invalidated during fetch");
        }
        Ok(user)
    }

    /// Cached value without fetching. May be stale.
    #[must_use]
    pub fn peek(&self) -> Option<AuthUser> {
        self.slot().user.clone()
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        !self.slot().fresh
    }

    /// Number of invalidations seen so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.slot().generation
    }
}

impl SessionCache for AuthUserCache {
    fn invalidate(&self, key: &str) {
        if key != AUTH_USER_KEY {
            tracing::debug!(key, "ignoring invalidation of unknown cache key");
            return;
        }
        let mut slot = self.slot();
        slot.fresh = false;
        slot.generation += 1;
        tracing::debug!(generation = slot.generation, "authUser invalidated");
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
