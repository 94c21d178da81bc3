//! Optimistic-exclusive edit locking for admin-editable records.
//!
//! A lease-based courtesy lock: opening an edit form claims the record,
//! a client-side heartbeat renews the claim, and the claim evaporates
//! [`LOCK_TTL_MINUTES`] after its last renewal whether or not it was ever
//! explicitly released. It prevents two administrators from accidentally
//! editing the same law firm or job listing at once; it is NOT a
//! correctness-critical mutex -- the underlying row write stays atomic
//! regardless, and a lost race costs at most a stale "being edited" notice.
//!
//! The state machine is pure and clock-agnostic: every operation takes an
//! explicit `now` so tests can time-travel. Expiry is lazy -- recomputed from
//! `now` at each predicate, never swept by a background task.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Minutes a lock stays live after its last acquire/refresh.
pub const LOCK_TTL_MINUTES: i64 = 15;

/// Refusal to bump a lock's timestamp for a caller who does not hold it.
///
/// Expected condition (a heartbeat that outlived its lock), not an
/// application error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("lock is held by another user")]
pub struct RefreshDenied;

/// The current lock holder: who and since when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holder<Id = DbId> {
    /// User id recorded as the lock holder.
    pub user_id: Id,
    /// When the lock was acquired or last renewed.
    pub since: Timestamp,
}

/// Exclusive edit-lock state for one lockable record.
///
/// Generic over the holder-id type so it is independent of any particular
/// entity; records compose it by delegation, mapping it onto their nullable
/// `locked_by` / `locked_at` columns via [`EditLock::from_columns`] and
/// [`EditLock::into_columns`]. Holding the holder as a single `Option`
/// makes "locked_by is present iff locked_at is present" true by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditLock<Id = DbId> {
    holder: Option<Holder<Id>>,
}

/// Decision of the edit-view access gate. See [`EditLock::guard_edit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome<Id = DbId> {
    /// The requester now holds the lock; serve the edit form.
    Editable,
    /// Someone else holds a live lock; serve the locked notice, no mutation.
    Blocked {
        holder: Id,
        locked_at: Timestamp,
    },
}

impl<Id: Copy + PartialEq> EditLock<Id> {
    /// An unlocked lock.
    pub fn unlocked() -> Self {
        Self { holder: None }
    }

    /// Rebuild lock state from the entity's two nullable columns.
    ///
    /// A half-set pair should never exist in the database; if one does, it
    /// is treated as unlocked rather than guessed at.
    pub fn from_columns(locked_by: Option<Id>, locked_at: Option<Timestamp>) -> Self {
        let holder = match (locked_by, locked_at) {
            (Some(user_id), Some(since)) => Some(Holder { user_id, since }),
            _ => None,
        };
        Self { holder }
    }

    /// Decompose into the entity's two nullable columns for persistence.
    pub fn into_columns(self) -> (Option<Id>, Option<Timestamp>) {
        match self.holder {
            Some(h) => (Some(h.user_id), Some(h.since)),
            None => (None, None),
        }
    }

    /// Raw stored holder id, ignoring expiry.
    pub fn locked_by(&self) -> Option<Id> {
        self.holder.map(|h| h.user_id)
    }

    /// Raw stored acquisition/renewal instant, ignoring expiry.
    pub fn locked_at(&self) -> Option<Timestamp> {
        self.holder.map(|h| h.since)
    }

    /// True iff a holder is recorded and the lease has not reached its TTL.
    ///
    /// The exact boundary counts as expired: a lock renewed at `t` is dead
    /// at `t + 15min`, alive one instant before.
    pub fn is_locked(&self, now: Timestamp) -> bool {
        match self.holder {
            Some(h) => now - h.since < chrono::Duration::minutes(LOCK_TTL_MINUTES),
            None => false,
        }
    }

    /// True iff the record is live-locked by someone other than `user_id`.
    ///
    /// A lock held by `user_id` themselves is never "by another", and an
    /// expired lock blocks nobody.
    pub fn is_locked_by_another(&self, user_id: Id, now: Timestamp) -> bool {
        self.is_locked(now)
            && self
                .holder
                .is_some_and(|h| h.user_id != user_id)
    }

    /// The user currently holding a live lock, if any.
    pub fn holder(&self, now: Timestamp) -> Option<Id> {
        if self.is_locked(now) {
            self.locked_by()
        } else {
            None
        }
    }

    /// Claim the lock for `user_id`, overwriting whatever was there.
    ///
    /// Unconditional by design: the access gate decides *whether* to
    /// acquire; this just records the claim. Re-acquiring your own lock is
    /// the heartbeat path, and acquiring over an expired lock is how a
    /// stale claim is silently reclaimed by the next editor.
    pub fn acquire(&mut self, user_id: Id, now: Timestamp) {
        self.holder = Some(Holder {
            user_id,
            since: now,
        });
    }

    /// Renew the lease for its current holder.
    ///
    /// The holder may refresh even past expiry (their heartbeat simply
    /// revives the claim). Anyone else gets [`RefreshDenied`] and the state
    /// is left untouched.
    pub fn refresh(&mut self, user_id: Id, now: Timestamp) -> Result<(), RefreshDenied> {
        match &mut self.holder {
            Some(h) if h.user_id == user_id => {
                h.since = now;
                Ok(())
            }
            _ => Err(RefreshDenied),
        }
    }

    /// Drop the lock if `user_id` holds it.
    ///
    /// A non-holder's release is a silent no-op. Clients fire release on
    /// page unload without awaiting the answer, so there is nobody to
    /// report an error to.
    pub fn release(&mut self, user_id: Id) {
        if self.locked_by() == Some(user_id) {
            self.holder = None;
        }
    }

    /// Access gate for "open the edit form".
    ///
    /// Blocked when someone else holds a live lock (no mutation); otherwise
    /// acquires -- which covers both the unlocked case and the same user
    /// reopening their own form, where the overwrite extends the lease.
    /// The caller is responsible for persisting the state after `Editable`.
    pub fn guard_edit(&mut self, user_id: Id, now: Timestamp) -> GateOutcome<Id> {
        match self.holder {
            Some(h) if h.user_id != user_id && self.is_locked(now) => GateOutcome::Blocked {
                holder: h.user_id,
                locked_at: h.since,
            },
            _ => {
                self.acquire(user_id, now);
                GateOutcome::Editable
            }
        }
    }
}
