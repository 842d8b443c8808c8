// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level listener registration as a scoped resource.
//!
//! ## Overview
//!
//! A [`GlobalEvents`] source registers a listener for a [`GlobalEvent`] and
//! hands back a [`ListenerHandle`]. The handle owns the registration: calling
//! [`ListenerHandle::release`] (or dropping the handle) deregisters it exactly
//! once. Releasing an already released handle does nothing.
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_popover::listener::ListenerHandle;
//!
//! let live = Rc::new(Cell::new(1));
//! let mut handle = {
//!     let live = live.clone();
//!     ListenerHandle::new(move || live.set(live.get() - 1))
//! };
//! assert!(handle.release());
//! assert!(!handle.release());
//! assert_eq!(live.get(), 0);
//! ```

use alloc::boxed::Box;
use core::fmt;

/// Document-level events a popover can listen for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GlobalEvent {
    /// A pointer button went down anywhere in the document.
    PointerDown,
}

/// Owner of one listener registration.
///
/// Holds the deregistration closure until it runs. Dropping an active handle
/// releases it.
pub struct ListenerHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerHandle {
    /// Wrap a deregistration closure.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Returns true until the registration has been released.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Deregister the listener.
    ///
    /// Returns true if this call performed the release.
    pub fn release(&mut self) -> bool {
        match self.release.take() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A source of document-level listener registrations.
///
/// Implemented by the toolkit's document or scene. The popover only registers
/// [`GlobalEvent::PointerDown`]; the owner delivers those events by calling
/// [`PopoverController::handle_pointer_down`](crate::controller::PopoverController::handle_pointer_down)
/// while the registration is live.
pub trait GlobalEvents {
    /// Register a listener for `event`.
    fn listen(&mut self, event: GlobalEvent) -> ListenerHandle;
}

impl<G: GlobalEvents + ?Sized> GlobalEvents for &mut G {
    fn listen(&mut self, event: GlobalEvent) -> ListenerHandle {
        (**self).listen(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn counted(count: &Rc<Cell<u32>>) -> ListenerHandle {
        count.set(count.get() + 1);
        let count = count.clone();
        ListenerHandle::new(move || count.set(count.get() - 1))
    }

    #[test]
    fn release_runs_once() {
        let live = Rc::new(Cell::new(0));
        let mut h = counted(&live);
        assert_eq!(live.get(), 1);
        assert!(h.is_active());
        assert!(h.release());
        assert_eq!(live.get(), 0);
        assert!(!h.is_active());
        assert!(!h.release());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn drop_releases_active_handle() {
        let live = Rc::new(Cell::new(0));
        {
            let _h = counted(&live);
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn drop_after_release_does_not_double_release() {
        let live = Rc::new(Cell::new(0));
        let mut h = counted(&live);
        h.release();
        drop(h);
        assert_eq!(live.get(), 0);
    }
}
