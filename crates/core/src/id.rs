// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification-ID allocation

/// Largest assignable notification id (`2^32 - 1`).
pub const MAX_ID: u32 = u32::MAX;

/// Hands out notification ids for the protocol object.
///
/// Ids start at 1 (0 means "allocate new" on the wire and is never
/// returned). The allocator is owned by the protocol object and only
/// mutated inside its dispatch, which serializes access; if dispatch
/// ever becomes concurrent the read-modify-write below must move
/// behind a mutex or atomic.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    counter: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { counter: 1 }
    }

    /// Start the counter at an arbitrary value, for boundary tests.
    #[cfg(any(test, feature = "test-support"))]
    pub fn starting_at(counter: u32) -> Self {
        Self { counter }
    }

    /// Resolve the id for an incoming notification.
    ///
    /// A non-zero `replaces_id` is returned as-is; the caller's
    /// replacement target is trusted without an existence check.
    /// Otherwise the next counter value is assigned. The wraparound
    /// check compares the *assigned* id against [`MAX_ID`], not the
    /// incremented counter, so the full `1..=MAX_ID` range is handed
    /// out before the sequence restarts at 1. Downstream clients may
    /// depend on that exact boundary, so don't tidy it up.
    pub fn allocate(&mut self, replaces_id: u32) -> u32 {
        if replaces_id != 0 {
            return replaces_id;
        }

        let id = self.counter;
        self.counter = self.counter.wrapping_add(1);
        if id >= MAX_ID {
            self.counter = 1;
        }
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
