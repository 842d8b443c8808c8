// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: a deterministic, `no_std` popover controller for UI.
//!
//! ## Overview
//!
//! A popover is a transient floating overlay anchored to a host element.
//! This crate decides *when* it is shown or hidden; it does not create, lay
//! out, or render anything itself.
//! Instead, it drives an [`OverlayLoader`](crate::loader::OverlayLoader) that
//! owns the overlay, and a [`GlobalEvents`](crate::listener::GlobalEvents)
//! source for the document-level pointer listener used by click-outside
//! dismissal.
//!
//! ## Inputs
//!
//! - A [`PopoverConfig`](crate::config::PopoverConfig): content, title,
//!   [`Placement`](crate::types::Placement), [`Triggers`](crate::triggers::Triggers),
//!   [`Container`](crate::types::Container), click-outside dismissal, and an
//!   optional initial open state.
//! - Host events, delivered with
//!   [`PopoverController::handle_trigger`](crate::controller::PopoverController::handle_trigger).
//! - Document pointer downs, delivered with
//!   [`PopoverController::handle_pointer_down`](crate::controller::PopoverController::handle_pointer_down).
//!
//! ## Outputs
//!
//! [`Notice::Shown`](crate::types::Notice::Shown) and
//! [`Notice::Hidden`](crate::types::Notice::Hidden), recorded by the loader
//! and returned untouched by
//! [`PopoverController::drain_notices`](crate::controller::PopoverController::drain_notices).
//!
//! ## Workflow
//!
//! 1) Construct a [`PopoverController`](crate::controller::PopoverController)
//!    with a loader and a global event source.
//! 2) [`attach`](crate::controller::PopoverController::attach) it to the host
//!    element; the trigger spec is registered with the loader.
//! 3) Route host events and document pointer downs to it. Use
//!    [`show`](crate::controller::PopoverController::show),
//!    [`hide`](crate::controller::PopoverController::hide),
//!    [`toggle`](crate::controller::PopoverController::toggle) or
//!    [`set_open`](crate::controller::PopoverController::set_open) for manual
//!    control.
//! 4) [`detach`](crate::controller::PopoverController::detach) when the host
//!    goes away. The loader is disposed and the pointer listener released.
//!
//! ## Listener discipline
//!
//! At most one document pointer listener exists per controller. It is
//! registered on a successful show with dismissal enabled, and released on
//! hide, on detach, when dismissal is disabled, or when its
//! [`ListenerHandle`](crate::listener::ListenerHandle) is dropped.
//!
//! A reference loader built on a small element scene lives in
//! `understory_overlay`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod error;
pub mod listener;
pub mod loader;
pub mod triggers;
pub mod types;

pub use error::Error;
