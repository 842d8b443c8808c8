// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay loader seam.
//!
//! ## Overview
//!
//! An [`OverlayLoader`] owns the existence of one transient overlay: it
//! attaches it to a container, positions it against an anchor, renders it,
//! removes it, and reports [`Notice`]s. The
//! [controller](crate::controller::PopoverController) only decides *when*
//! these happen.
//!
//! ## Contract
//!
//! - At most one overlay exists per loader.
//! - [`OverlayLoader::is_shown`] is true iff an overlay is currently attached.
//! - [`OverlayLoader::show`] on a shown loader and [`OverlayLoader::hide`] on a
//!   hidden one do nothing.
//! - A successful show records exactly one [`Notice::Shown`]; a successful hide
//!   records exactly one [`Notice::Hidden`].
//! - [`OverlayLoader::dispose`] hides a shown overlay and drops trigger
//!   registrations.

use alloc::vec::Vec;

use crate::triggers::Triggers;
use crate::types::{Container, Content, Notice, Placement};

/// What to render when the overlay is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShowRequest<'a> {
    /// Body of the popover.
    pub content: &'a Content,
    /// Optional header text.
    pub title: Option<&'a str>,
    /// Requested side of the anchor.
    pub placement: Placement,
}

/// Attaches, positions, renders, and removes one overlay.
///
/// Implemented by the toolkit (or by `understory_overlay::SceneLoader`).
/// Calls arrive in the order `attach` → `position` → `show` when opening.
pub trait OverlayLoader {
    /// Toolkit element identifier.
    type Element: Copy + Eq + core::fmt::Debug;

    /// Returns true while an overlay is attached.
    fn is_shown(&self) -> bool;

    /// Select the container the next overlay is appended into.
    fn attach(&mut self, container: &Container);

    /// Anchor the next overlay to `anchor` on the `placement` side.
    fn position(&mut self, anchor: Self::Element, placement: Placement);

    /// Create and render the overlay. Does nothing if one is already shown.
    ///
    /// A loader that cannot resolve its container leaves itself hidden.
    fn show(&mut self, request: ShowRequest<'_>);

    /// Remove the overlay. Does nothing if none is shown.
    fn hide(&mut self);

    /// Register the host events named by `triggers` on `host`.
    ///
    /// Replaces any earlier registration.
    fn listen(&mut self, host: Self::Element, triggers: &Triggers);

    /// Root element of the rendered overlay, if one can be resolved.
    fn rendered_element(&self) -> Option<Self::Element>;

    /// Returns true if `target` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: Self::Element, target: Self::Element) -> bool;

    /// Hide any overlay and release every registration.
    fn dispose(&mut self);

    /// Take the notices recorded since the last call, oldest first.
    fn drain_notices(&mut self) -> Vec<Notice>;
}
