// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_overlay --heading-base-level=0

//! Understory Overlay: a Kurbo-native host for popovers.
//!
//! ## Overview
//!
//! [`understory_popover`] decides when a popover opens and closes. This crate
//! supplies the pieces it drives:
//!
//! - [`ElementTree`](crate::tree::ElementTree): a small element hierarchy with
//!   generational ids, world bounds, z-order, tags, and hit testing.
//! - [`GlobalListeners`](crate::listeners::GlobalListeners): document-level
//!   listener registrations owned by
//!   [`ListenerHandle`](understory_popover::listener::ListenerHandle)s.
//! - [`Scene`](crate::scene::Scene): a shared handle bundling both, and the
//!   [`GlobalEvents`](understory_popover::listener::GlobalEvents) source for a
//!   controller.
//! - [`placement`]: anchor-relative geometry with viewport flipping.
//! - [`SceneLoader`](crate::loader::SceneLoader): an
//!   [`OverlayLoader`](understory_popover::loader::OverlayLoader) that inserts
//!   the overlay as a scene element.
//!
//! It does not render. Upstream code lays out elements and writes their world
//! bounds into the tree; a renderer reads the overlay element and
//! [`SceneLoader::rendered`](crate::loader::SceneLoader::rendered) back out.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_overlay::loader::SceneLoader;
//! use understory_overlay::scene::Scene;
//! use understory_popover::config::PopoverConfig;
//! use understory_popover::controller::PopoverController;
//! use understory_popover::listener::GlobalEvent;
//! use understory_popover::triggers::TriggerEvents;
//! use understory_popover::types::Notice;
//!
//! let scene = Scene::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let button = scene.insert(None, Rect::new(350.0, 280.0, 450.0, 320.0));
//!
//! let config = PopoverConfig::new("Saved!").close_on_click_outside(true);
//! let mut popover =
//!     PopoverController::with_config(SceneLoader::new(scene.clone()), scene.clone(), &config);
//! popover.attach(button);
//!
//! // A click on the button opens the popover.
//! popover.handle_trigger(TriggerEvents::CLICK);
//! assert!(popover.is_open());
//!
//! // A pointer down elsewhere closes it.
//! if scene.is_listening(GlobalEvent::PointerDown) {
//!     let target = scene.hit_test(Point::new(20.0, 20.0));
//!     popover.handle_pointer_down(target);
//! }
//! assert!(!popover.is_open());
//! assert_eq!(popover.drain_notices(), [Notice::Shown, Notice::Hidden]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod listeners;
pub mod loader;
pub mod placement;
pub mod scene;
pub mod tree;
pub mod types;
