// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element scene: element identifiers and flags.

/// Identifier for an element in an [`ElementTree`](crate::tree::ElementTree).
///
/// A slot index plus a generation counter. Removing an element frees its slot;
/// reusing the slot bumps the generation, so a stale `ElementId` never aliases
/// a newer element. Check liveness with
/// [`ElementTree::is_alive`](crate::tree::ElementTree::is_alive).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Higher generation wins, then higher slot.
    pub(crate) fn is_newer_than(self, other: Self) -> bool {
        (self.1 > other.1) || (self.1 == other.1 && self.0 > other.0)
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is visible.
        const VISIBLE  = 0b0000_0001;
        /// Element is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}
