// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An [`OverlayLoader`] backed by a [`Scene`].
//!
//! ## Containers
//!
//! - [`Container::Inline`]: the overlay becomes a sibling of the host (a child
//!   of the host's parent).
//! - [`Container::Body`]: a child of the element tagged `body`, or of the root
//!   when no such element exists.
//! - [`Container::Selector`]: a child of the element tagged with the selector.
//!   If none exists the overlay is not shown.
//!
//! ## Geometry
//!
//! The overlay gets a fixed size (see [`SceneLoader::with_overlay_size`]) and is
//! placed with [`place_within`] against the viewport, so it may end up on the
//! opposite side from the one requested. It is stacked above every existing
//! element.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use log::{debug, warn};
use understory_popover::loader::{OverlayLoader, ShowRequest};
use understory_popover::triggers::Triggers;
use understory_popover::types::{Container, Content, Notice, Placement};

use crate::placement::place_within;
use crate::scene::Scene;
use crate::tree::ElementTree;
use crate::types::ElementId;

/// Default overlay size.
pub const DEFAULT_OVERLAY_SIZE: Size = Size::new(160.0, 80.0);

/// Default gap between anchor and overlay.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Tag given to overlay elements.
pub const OVERLAY_TAG: &str = "popover";

/// What the loader rendered for the current overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    /// Body of the popover.
    pub content: Content,
    /// Header text.
    pub title: Option<String>,
    /// Placement carried by the show request.
    pub requested: Placement,
    /// Side actually used after fitting into the viewport.
    pub placement: Placement,
    /// World bounds of the overlay element.
    pub bounds: Rect,
}

/// Overlay loader that inserts the popover as an element of a [`Scene`].
pub struct SceneLoader {
    scene: Scene,
    overlay_size: Size,
    offset: f64,
    container: Container,
    anchor: Option<(ElementId, Placement)>,
    overlay: Option<ElementId>,
    rendered: Option<Rendered>,
    listening: Option<(ElementId, Triggers)>,
    notices: Vec<Notice>,
}

impl core::fmt::Debug for SceneLoader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SceneLoader")
            .field("overlay", &self.overlay)
            .field("anchor", &self.anchor)
            .field("container", &self.container)
            .field("pending_notices", &self.notices.len())
            .finish_non_exhaustive()
    }
}

impl SceneLoader {
    /// Create a loader for `scene` with the default size and offset.
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            overlay_size: DEFAULT_OVERLAY_SIZE,
            offset: DEFAULT_OFFSET,
            container: Container::Inline,
            anchor: None,
            overlay: None,
            rendered: None,
            listening: None,
            notices: Vec::new(),
        }
    }

    /// Use `size` for overlays shown from now on.
    pub fn with_overlay_size(mut self, size: Size) -> Self {
        self.overlay_size = size;
        self
    }

    /// Use `offset` as the gap between anchor and overlay.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// The scene this loader inserts into.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// What is currently rendered, if shown.
    pub fn rendered(&self) -> Option<&Rendered> {
        self.rendered.as_ref()
    }

    /// Host and trigger spec registered by the last [`OverlayLoader::listen`].
    pub fn listening(&self) -> Option<(ElementId, &Triggers)> {
        self.listening.as_ref().map(|(host, t)| (*host, t))
    }

    /// Recompute the overlay bounds after the anchor moved or resized.
    ///
    /// Returns the side used, or `None` when nothing is shown.
    pub fn reposition(&mut self) -> Option<Placement> {
        let overlay = self.rendered_element()?;
        let (host, placement) = self.anchor?;
        let mut tree = self.scene.tree_mut();
        let (side, bounds) = self.fit(&tree, host, placement)?;
        tree.set_bounds(overlay, bounds);
        drop(tree);
        if let Some(r) = self.rendered.as_mut() {
            r.placement = side;
            r.bounds = bounds;
        }
        Some(side)
    }

    fn resolve_parent(&self, tree: &ElementTree) -> Option<ElementId> {
        match &self.container {
            Container::Inline => Some(
                self.anchor
                    .and_then(|(host, _)| tree.parent_of(host))
                    .unwrap_or(tree.root()),
            ),
            Container::Body => Some(tree.find_tagged("body").unwrap_or(tree.root())),
            Container::Selector(sel) => tree.find_tagged(sel),
        }
    }

    fn fit(
        &self,
        tree: &ElementTree,
        host: ElementId,
        placement: Placement,
    ) -> Option<(Placement, Rect)> {
        let anchor = tree.bounds(host)?;
        Some(place_within(
            anchor,
            self.overlay_size,
            placement,
            self.offset,
            tree.viewport(),
        ))
    }
}

impl OverlayLoader for SceneLoader {
    type Element = ElementId;

    fn is_shown(&self) -> bool {
        self.overlay
            .is_some_and(|id| self.scene.tree().is_alive(id))
    }

    fn attach(&mut self, container: &Container) {
        self.container = container.clone();
    }

    fn position(&mut self, anchor: ElementId, placement: Placement) {
        self.anchor = Some((anchor, placement));
    }

    fn show(&mut self, request: ShowRequest<'_>) {
        if self.is_shown() {
            return;
        }
        let Some((host, placement)) = self.anchor else {
            warn!("popover shown without an anchor; skipped");
            return;
        };
        let mut tree = self.scene.tree_mut();
        let Some(parent) = self.resolve_parent(&tree) else {
            warn!("popover container {:?} not found; skipped", self.container);
            return;
        };
        let Some((side, bounds)) = self.fit(&tree, host, placement) else {
            warn!("popover anchor {host:?} is gone; skipped");
            return;
        };
        let z = tree.max_z_index().saturating_add(1);
        let id = tree.insert(Some(parent), bounds);
        tree.set_z_index(id, z);
        tree.set_tag(id, Some(OVERLAY_TAG.to_string()));
        drop(tree);

        self.overlay = Some(id);
        self.rendered = Some(Rendered {
            content: request.content.clone(),
            title: request.title.map(ToString::to_string),
            requested: request.placement,
            placement: side,
            bounds,
        });
        self.notices.push(Notice::Shown);
        debug!("overlay {id:?} inserted under {parent:?} on the {side} side");
    }

    fn hide(&mut self) {
        let Some(id) = self.overlay.take() else {
            return;
        };
        self.rendered = None;
        let mut tree = self.scene.tree_mut();
        if tree.is_alive(id) {
            tree.remove(id);
            drop(tree);
            self.notices.push(Notice::Hidden);
            debug!("overlay {id:?} removed");
        }
    }

    fn listen(&mut self, host: ElementId, triggers: &Triggers) {
        self.listening = Some((host, triggers.clone()));
    }

    fn rendered_element(&self) -> Option<ElementId> {
        self.overlay.filter(|id| self.scene.tree().is_alive(*id))
    }

    fn contains(&self, ancestor: ElementId, target: ElementId) -> bool {
        self.scene.tree().contains(ancestor, target)
    }

    fn dispose(&mut self) {
        self.hide();
        self.listening = None;
        self.anchor = None;
        self.container = Container::Inline;
    }

    fn drain_notices(&mut self) -> Vec<Notice> {
        core::mem::take(&mut self.notices)
    }
}

impl Drop for SceneLoader {
    fn drop(&mut self) {
        if let Some(id) = self.overlay.take()
            && let Ok(mut tree) = self.scene.tree.try_borrow_mut()
        {
            tree.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;
    use understory_popover::config::PopoverConfig;
    use understory_popover::controller::PopoverController;
    use understory_popover::listener::GlobalEvent;
    use understory_popover::triggers::TriggerEvents;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    struct Fixture {
        scene: Scene,
        panel: ElementId,
        host: ElementId,
        label: ElementId,
        other: ElementId,
    }

    fn fixture() -> Fixture {
        let scene = Scene::new(VIEWPORT);
        let panel = scene.insert(None, Rect::new(100.0, 100.0, 700.0, 500.0));
        let host = scene.insert(Some(panel), Rect::new(350.0, 280.0, 450.0, 320.0));
        let label = scene.insert(Some(host), Rect::new(360.0, 290.0, 440.0, 310.0));
        let other = scene.insert(Some(panel), Rect::new(120.0, 120.0, 200.0, 160.0));
        Fixture {
            scene,
            panel,
            host,
            label,
            other,
        }
    }

    type Controller = PopoverController<SceneLoader, Scene>;

    fn controller(f: &Fixture, config: &PopoverConfig) -> Controller {
        let loader = SceneLoader::new(f.scene.clone()).with_overlay_size(Size::new(100.0, 50.0));
        let mut c = Controller::with_config(loader, f.scene.clone(), config);
        c.attach(f.host);
        c
    }

    fn overlays(scene: &Scene) -> usize {
        let tree = scene.tree();
        let mut n = 0;
        let mut stack = vec![tree.root()];
        while let Some(id) = stack.pop() {
            if tree.tag(id) == Some(OVERLAY_TAG) {
                n += 1;
            }
            stack.extend_from_slice(tree.children_of(id));
        }
        n
    }

    #[test]
    fn show_inserts_one_overlay_above_host() {
        let f = fixture();
        let mut c = controller(&f, &PopoverConfig::new("Hi").title("Title"));
        c.show();
        c.show();
        assert_eq!(overlays(&f.scene), 1);
        let r = c.loader().rendered().unwrap();
        assert_eq!(r.placement, Placement::Top);
        assert_eq!(r.bounds, Rect::new(350.0, 222.0, 450.0, 272.0));
        assert_eq!(r.title.as_deref(), Some("Title"));
        let overlay = c.loader().rendered_element().unwrap();
        assert_eq!(f.scene.tree().parent_of(overlay), Some(f.panel));
        assert!(f.scene.tree().z_index(overlay) > f.scene.tree().z_index(f.other));
        assert_eq!(c.drain_notices(), vec![Notice::Shown]);
    }

    #[test]
    fn outside_click_through_hit_testing() {
        let f = fixture();
        let mut c = controller(&f, &PopoverConfig::new("x").close_on_click_outside(true));
        c.show();
        assert!(f.scene.is_listening(GlobalEvent::PointerDown));

        // On the host's label.
        let target = f.scene.hit_test(Point::new(400.0, 300.0));
        assert_eq!(target, Some(f.label));
        assert!(!c.handle_pointer_down(target));

        // Inside the overlay.
        let target = f.scene.hit_test(Point::new(400.0, 250.0));
        assert_eq!(target, c.loader().rendered_element());
        assert!(!c.handle_pointer_down(target));
        assert!(c.is_open());

        // On an unrelated sibling.
        let target = f.scene.hit_test(Point::new(150.0, 140.0));
        assert_eq!(target, Some(f.other));
        assert!(c.handle_pointer_down(target));
        assert!(!c.is_open());
        assert_eq!(overlays(&f.scene), 0);
        assert_eq!(f.scene.listeners().total(), 0);
    }

    #[test]
    fn background_click_hides() {
        let f = fixture();
        let mut c = controller(&f, &PopoverConfig::new("x").close_on_click_outside(true));
        c.show();
        let target = f.scene.hit_test(Point::new(10.0, 10.0));
        assert_eq!(target, None);
        assert!(c.handle_pointer_down(target));
    }

    #[test]
    fn detach_leaves_no_listeners_or_overlays() {
        let f = fixture();
        let mut c = controller(&f, &PopoverConfig::new("x").close_on_click_outside(true));
        c.show();
        assert_eq!(f.scene.listeners().count(GlobalEvent::PointerDown), 1);
        c.detach();
        assert_eq!(f.scene.listeners().total(), 0);
        assert_eq!(overlays(&f.scene), 0);
        assert!(c.loader().listening().is_none());
        assert_eq!(c.drain_notices(), vec![Notice::Shown, Notice::Hidden]);
    }

    #[test]
    fn body_container_uses_tagged_element() {
        let f = fixture();
        let body = f.scene.insert(None, VIEWPORT);
        f.scene.tree_mut().set_tag(body, Some("body".into()));
        let mut c = controller(&f, &PopoverConfig::new("x").container(Container::Body));
        c.show();
        let overlay = c.loader().rendered_element().unwrap();
        assert_eq!(f.scene.tree().parent_of(overlay), Some(body));
    }

    #[test]
    fn body_container_falls_back_to_root() {
        let f = fixture();
        let mut c = controller(&f, &PopoverConfig::new("x").container(Container::Body));
        c.show();
        let overlay = c.loader().rendered_element().unwrap();
        assert_eq!(f.scene.tree().parent_of(overlay), Some(f.scene.tree().root()));
    }

    #[test]
    fn missing_selector_skips_show() {
        let f = fixture();
        let config = PopoverConfig::new("x")
            .container(Container::Selector("aside".into()))
            .close_on_click_outside(true);
        let mut c = controller(&f, &config);
        c.show();
        assert!(!c.is_open());
        assert_eq!(overlays(&f.scene), 0);
        assert_eq!(f.scene.listeners().total(), 0);
        assert!(c.drain_notices().is_empty());
    }

    #[test]
    fn flips_when_requested_side_overflows() {
        let f = fixture();
        f.scene
            .tree_mut()
            .set_bounds(f.host, Rect::new(350.0, 10.0, 450.0, 40.0));
        let mut c = controller(&f, &PopoverConfig::new("x"));
        c.show();
        let r = c.loader().rendered().unwrap();
        assert_eq!(r.requested, Placement::Top);
        assert_eq!(r.placement, Placement::Bottom);
    }

    #[test]
    fn reposition_follows_host() {
        let f = fixture();
        let mut c = controller(&f, &PopoverConfig::new("x").placement(Placement::Right));
        assert_eq!(c.loader_mut().reposition(), None);
        c.show();
        f.scene
            .tree_mut()
            .set_bounds(f.host, Rect::new(100.0, 100.0, 200.0, 140.0));
        assert_eq!(c.loader_mut().reposition(), Some(Placement::Right));
        let overlay = c.loader().rendered_element().unwrap();
        assert_eq!(
            f.scene.tree().bounds(overlay),
            Some(Rect::new(208.0, 95.0, 308.0, 145.0))
        );
    }

    #[test]
    fn listen_records_triggers_and_routes_events() {
        let f = fixture();
        let config = PopoverConfig::new("x").triggers("hover".parse().unwrap());
        let mut c = controller(&f, &config);
        let (host, triggers) = c.loader().listening().unwrap();
        assert_eq!(host, f.host);
        assert_eq!(triggers.to_string(), "mouseover:mouseout");
        assert!(c.handle_trigger(TriggerEvents::MOUSE_OVER));
        assert!(c.is_open());
        assert!(c.handle_trigger(TriggerEvents::MOUSE_OUT));
        assert!(!c.is_open());
    }

    #[test]
    fn externally_removed_overlay_reads_as_hidden() {
        let f = fixture();
        let mut c = controller(&f, &PopoverConfig::new("x"));
        c.show();
        f.scene.tree_mut().remove(f.panel);
        assert!(!c.is_open());
        assert_eq!(c.loader().rendered_element(), None);
        c.hide();
        assert_eq!(c.drain_notices(), vec![Notice::Shown]);
    }

    #[test]
    fn dropping_loader_removes_overlay() {
        let f = fixture();
        let mut c = controller(&f, &PopoverConfig::new("x").close_on_click_outside(true));
        c.show();
        drop(c);
        assert_eq!(overlays(&f.scene), 0);
        assert_eq!(f.scene.listeners().total(), 0);
    }
}
