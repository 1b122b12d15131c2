// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock bookkeeping.
//!
//! A modal locks page scrolling while it is open. Acquiring returns a
//! [`LockToken`] holding the state seen before the lock; restoring with that
//! token puts back exactly that state, so nested or overlapping owners never
//! leave the page locked or unlock it early.

/// Whether the page scrollable accepts wheel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollLock {
    #[default]
    Unlocked,
    Locked,
}

/// Proof of acquisition, carrying the state to restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "dropping the token leaves the page locked"]
pub struct LockToken {
    previous: ScrollLock,
}

impl LockToken {
    #[must_use]
    pub fn previous(self) -> ScrollLock {
        self.previous
    }
}

impl ScrollLock {
    /// Locks scrolling and returns a token remembering the prior state.
    pub fn acquire(&mut self) -> LockToken {
        let previous = *self;
        *self = ScrollLock::Locked;
        LockToken { previous }
    }

    /// Restores the state captured by `token`.
    pub fn restore(&mut self, token: LockToken) {
        *self = token.previous;
    }

    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, ScrollLock::Locked)
    }
}
