// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scene handle: element tree plus document listeners.

use alloc::rc::Rc;
use core::cell::{Ref, RefCell, RefMut};

use kurbo::{Point, Rect};
use understory_popover::listener::{GlobalEvent, GlobalEvents, ListenerHandle};

use crate::listeners::GlobalListeners;
use crate::tree::ElementTree;
use crate::types::ElementId;

/// A cloneable handle to one document: its [`ElementTree`] and its
/// [`GlobalListeners`].
///
/// Clones share state. Intended for a single UI thread; the tree borrow
/// accessors panic if a mutable borrow is already outstanding.
#[derive(Clone)]
pub struct Scene {
    pub(crate) tree: Rc<RefCell<ElementTree>>,
    listeners: GlobalListeners,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("tree", &self.tree)
            .field("listeners", &self.listeners.total())
            .finish()
    }
}

impl Scene {
    /// Create a scene whose root spans `viewport`.
    pub fn new(viewport: Rect) -> Self {
        Self {
            tree: Rc::new(RefCell::new(ElementTree::new(viewport))),
            listeners: GlobalListeners::new(),
        }
    }

    /// Borrow the element tree.
    pub fn tree(&self) -> Ref<'_, ElementTree> {
        self.tree.borrow()
    }

    /// Mutably borrow the element tree.
    pub fn tree_mut(&self) -> RefMut<'_, ElementTree> {
        self.tree.borrow_mut()
    }

    /// The document listener registry.
    pub fn listeners(&self) -> &GlobalListeners {
        &self.listeners
    }

    /// Insert an element; see [`ElementTree::insert`].
    pub fn insert(&self, parent: Option<ElementId>, bounds: Rect) -> ElementId {
        self.tree_mut().insert(parent, bounds)
    }

    /// Topmost element under `pt`; see [`ElementTree::hit_test`].
    pub fn hit_test(&self, pt: Point) -> Option<ElementId> {
        self.tree().hit_test(pt)
    }

    /// Returns true while anyone listens for `event`.
    pub fn is_listening(&self, event: GlobalEvent) -> bool {
        self.listeners.count(event) > 0
    }
}

impl GlobalEvents for Scene {
    fn listen(&mut self, event: GlobalEvent) -> ListenerHandle {
        self.listeners.register(event)
    }
}
