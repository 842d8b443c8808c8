// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level listener registry.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use log::trace;
use understory_popover::listener::{GlobalEvent, GlobalEvents, ListenerHandle};

/// Live registrations of document-level listeners.
///
/// Cloning shares the registry. Each registration is owned by the
/// [`ListenerHandle`] returned from [`register`](Self::register); the handle
/// holds only a weak reference, so it may outlive the registry.
#[derive(Clone, Debug, Default)]
pub struct GlobalListeners {
    inner: Rc<RefCell<Registry>>,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: Vec<(u64, GlobalEvent)>,
}

impl GlobalListeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `event`.
    pub fn register(&self, event: GlobalEvent) -> ListenerHandle {
        let id = {
            let mut reg = self.inner.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.live.push((id, event));
            id
        };
        trace!("registered global listener {id} for {event:?}");
        let weak = Rc::downgrade(&self.inner);
        ListenerHandle::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().live.retain(|(i, _)| *i != id);
                trace!("released global listener {id}");
            }
        })
    }

    /// Number of live listeners for `event`.
    pub fn count(&self, event: GlobalEvent) -> usize {
        self.inner
            .borrow()
            .live
            .iter()
            .filter(|(_, e)| *e == event)
            .count()
    }

    /// Number of live listeners for any event.
    pub fn total(&self) -> usize {
        self.inner.borrow().live.len()
    }
}

impl GlobalEvents for GlobalListeners {
    fn listen(&mut self, event: GlobalEvent) -> ListenerHandle {
        self.register(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_track_registrations() {
        let reg = GlobalListeners::new();
        let mut a = reg.register(GlobalEvent::PointerDown);
        let b = reg.register(GlobalEvent::PointerDown);
        assert_eq!(reg.count(GlobalEvent::PointerDown), 2);
        a.release();
        assert_eq!(reg.count(GlobalEvent::PointerDown), 1);
        drop(b);
        assert_eq!(reg.total(), 0);
        assert!(!a.release());
    }

    #[test]
    fn clones_share_the_registry() {
        let reg = GlobalListeners::new();
        let mut other = reg.clone();
        let _h = other.listen(GlobalEvent::PointerDown);
        assert_eq!(reg.total(), 1);
    }

    #[test]
    fn handle_may_outlive_registry() {
        let reg = GlobalListeners::new();
        let mut h = reg.register(GlobalEvent::PointerDown);
        drop(reg);
        assert!(h.release());
    }
}
