// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element tree: hierarchy, world bounds, z-order, tags, and hit testing.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::types::{ElementFlags, ElementId};

/// A hierarchy of rectangular elements under a single root.
///
/// The root spans the viewport, is never removed, and is not pickable, so a
/// hit test over empty background returns `None`. Bounds are world-space;
/// this tree does no layout.
pub struct ElementTree {
    slots: Vec<Option<Element>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: ElementId,
}

impl core::fmt::Debug for ElementTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementTree")
            .field("elements_total", &self.slots.len())
            .field("elements_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Element {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    bounds: Rect,
    z_index: i32,
    flags: ElementFlags,
    tag: Option<String>,
}

impl Element {
    fn new(bounds: Rect) -> Self {
        Self {
            generation: 0,
            parent: None,
            children: Vec::new(),
            bounds,
            z_index: 0,
            flags: ElementFlags::default(),
            tag: None,
        }
    }
}

impl ElementTree {
    /// Create a tree whose root spans `viewport`.
    pub fn new(viewport: Rect) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: ElementId::new(0, 1),
        };
        let mut root = Element::new(viewport);
        root.flags = ElementFlags::VISIBLE;
        tree.root = tree.alloc(root);
        tree
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Bounds of the root element.
    pub fn viewport(&self) -> Rect {
        self.element(self.root).map_or(Rect::ZERO, |e| e.bounds)
    }

    /// Number of live elements, not counting the root.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count() - 1
    }

    /// Returns true if nothing but the root is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an element under `parent` (the root if `None` or stale).
    pub fn insert(&mut self, parent: Option<ElementId>, bounds: Rect) -> ElementId {
        let parent = parent
            .filter(|p| self.is_alive(*p))
            .unwrap_or(self.root);
        let id = self.alloc(Element::new(bounds));
        if let Some(p) = self.element_mut(parent) {
            p.children.push(id);
        }
        if let Some(e) = self.element_mut(id) {
            e.parent = Some(parent);
        }
        id
    }

    /// Remove an element and its subtree. Removing the root does nothing.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.root || !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent_of(id)
            && let Some(p) = self.element_mut(parent)
        {
            p.children.retain(|c| *c != id);
        }
        self.remove_subtree(id);
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// Parent of `id`; `None` for the root and stale ids.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.element(id)?.parent
    }

    /// Children of `id` in insertion order.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        match self.element(id) {
            Some(e) => &e.children,
            None => &[],
        }
    }

    /// Returns true if `target` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: ElementId, target: ElementId) -> bool {
        if !self.is_alive(ancestor) {
            return false;
        }
        let mut cur = Some(target).filter(|t| self.is_alive(*t));
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent_of(id);
        }
        false
    }

    /// World bounds of a live element.
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.element(id).map(|e| e.bounds)
    }

    /// Update world bounds.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(e) = self.element_mut(id) {
            e.bounds = bounds;
        }
    }

    /// Z-index of a live element.
    pub fn z_index(&self, id: ElementId) -> Option<i32> {
        self.element(id).map(|e| e.z_index)
    }

    /// Update the z-index.
    pub fn set_z_index(&mut self, id: ElementId, z: i32) {
        if let Some(e) = self.element_mut(id) {
            e.z_index = z;
        }
    }

    /// Highest z-index among live elements.
    pub fn max_z_index(&self) -> i32 {
        self.slots
            .iter()
            .flatten()
            .map(|e| e.z_index)
            .max()
            .unwrap_or(0)
    }

    /// Flags of a live element.
    pub fn flags(&self, id: ElementId) -> Option<ElementFlags> {
        self.element(id).map(|e| e.flags)
    }

    /// Update the flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(e) = self.element_mut(id) {
            e.flags = flags;
        }
    }

    /// Tag of a live element.
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.element(id)?.tag.as_deref()
    }

    /// Set or clear the tag used by [`find_tagged`](Self::find_tagged).
    pub fn set_tag(&mut self, id: ElementId, tag: Option<String>) {
        if let Some(e) = self.element_mut(id) {
            e.tag = tag;
        }
    }

    /// The oldest live element carrying `tag`.
    pub fn find_tagged(&self, tag: &str) -> Option<ElementId> {
        self.slots.iter().enumerate().find_map(|(idx, slot)| {
            let e = slot.as_ref()?;
            (e.tag.as_deref() == Some(tag)).then(|| id_at(idx, e.generation))
        })
    }

    /// Topmost visible, pickable element under `pt`.
    ///
    /// Higher z-index wins; equal z-index goes to the newer [`ElementId`].
    pub fn hit_test(&self, pt: Point) -> Option<ElementId> {
        let mut best: Option<(ElementId, i32)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            let Some(e) = slot.as_ref() else {
                continue;
            };
            if !e
                .flags
                .contains(ElementFlags::VISIBLE | ElementFlags::PICKABLE)
            {
                continue;
            }
            if !e.bounds.contains(pt) {
                continue;
            }
            let id = id_at(idx, e.generation);
            match best {
                None => best = Some((id, e.z_index)),
                Some((best_id, z_best)) => {
                    if e.z_index > z_best || (e.z_index == z_best && id.is_newer_than(best_id)) {
                        best = Some((id, e.z_index));
                    }
                }
            }
        }
        best.map(|(id, _)| id)
    }

    // --- internals ---

    fn alloc(&mut self, mut element: Element) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            element.generation = generation;
            self.slots[idx] = Some(element);
            (idx, generation)
        } else {
            element.generation = 1;
            self.slots.push(Some(element));
            self.generations.push(1);
            (self.slots.len() - 1, 1)
        };
        id_at(idx, generation)
    }

    fn remove_subtree(&mut self, id: ElementId) {
        let children = match self.element(id) {
            Some(e) => e.children.clone(),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.slots
            .get(id.idx())?
            .as_ref()
            .filter(|e| e.generation == id.1)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.idx())?
            .as_mut()
            .filter(|e| e.generation == id.1)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "ElementId uses 32-bit indices by design."
)]
fn id_at(idx: usize, generation: u32) -> ElementId {
    ElementId::new(idx as u32, generation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> ElementTree {
        ElementTree::new(Rect::new(0.0, 0.0, 400.0, 300.0))
    }

    #[test]
    fn root_spans_viewport_and_is_not_hit() {
        let t = tree();
        assert_eq!(t.viewport(), Rect::new(0.0, 0.0, 400.0, 300.0));
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.hit_test(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn contains_is_inclusive_and_follows_parents() {
        let mut t = tree();
        let a = t.insert(None, Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = t.insert(Some(a), Rect::new(10.0, 10.0, 50.0, 50.0));
        let c = t.insert(None, Rect::new(200.0, 0.0, 300.0, 100.0));
        assert!(t.contains(a, a));
        assert!(t.contains(a, b));
        assert!(!t.contains(b, a));
        assert!(!t.contains(a, c));
        assert!(t.contains(t.root(), b));
    }

    #[test]
    fn remove_drops_subtree_and_reuses_slots() {
        let mut t = tree();
        let a = t.insert(None, Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = t.insert(Some(a), Rect::new(10.0, 10.0, 50.0, 50.0));
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
        t.remove(a);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert!(!t.is_alive(a));
        assert!(!t.is_alive(b));
        assert!(t.children_of(t.root()).is_empty());
        let c = t.insert(None, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(t.is_alive(c));
        assert!(!t.is_alive(a));
        assert!(!t.is_alive(b));
        assert!(!t.contains(c, b));
    }

    #[test]
    fn removing_root_is_ignored() {
        let mut t = tree();
        let root = t.root();
        t.remove(root);
        assert!(t.is_alive(root));
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn stale_parent_falls_back_to_root() {
        let mut t = tree();
        let a = t.insert(None, Rect::new(0.0, 0.0, 10.0, 10.0));
        t.remove(a);
        let b = t.insert(Some(a), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(t.parent_of(b), Some(t.root()));
    }

    #[test]
    fn hit_test_prefers_higher_z_then_newer() {
        let mut t = tree();
        let low = t.insert(None, Rect::new(0.0, 0.0, 100.0, 100.0));
        let high = t.insert(None, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(t.hit_test(Point::new(5.0, 5.0)), Some(high));
        t.set_z_index(low, 5);
        assert_eq!(t.hit_test(Point::new(5.0, 5.0)), Some(low));
        assert_eq!(t.max_z_index(), 5);
        t.set_flags(low, ElementFlags::VISIBLE);
        assert_eq!(t.hit_test(Point::new(5.0, 5.0)), Some(high));
    }

    #[test]
    fn tags_are_found() {
        let mut t = tree();
        let body = t.insert(None, t.viewport());
        t.set_tag(body, Some("body".into()));
        assert_eq!(t.find_tagged("body"), Some(body));
        assert_eq!(t.tag(body), Some("body"));
        assert_eq!(t.find_tagged("aside"), None);
        t.remove(body);
        assert_eq!(t.find_tagged("body"), None);
    }
}
