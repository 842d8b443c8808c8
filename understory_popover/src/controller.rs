// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover controller: the show/hide state machine for one host element.
//!
//! ## Overview
//!
//! [`PopoverController`] turns a declarative [`PopoverConfig`] into calls on an
//! [`OverlayLoader`], and registers a document-level pointer listener through
//! [`GlobalEvents`] while click-outside dismissal is active.
//!
//! ## States
//!
//! Two states, hidden (initial) and shown, both read from the loader:
//! - [`show`](PopoverController::show) moves hidden → shown and is a no-op when shown.
//! - [`hide`](PopoverController::hide) moves shown → hidden and is a no-op when hidden.
//! - A pointer down outside the host and the overlay hides, when enabled.
//! - [`detach`](PopoverController::detach) disposes the loader from either state.
//!
//! ## Driving it
//!
//! The controller holds no callbacks. Its owner delivers input:
//! - host events via [`handle_trigger`](PopoverController::handle_trigger),
//! - document pointer downs via [`handle_pointer_down`](PopoverController::handle_pointer_down)
//!   while [`has_outside_click_listener`](PopoverController::has_outside_click_listener) is true,
//!
//! and collects visibility changes with [`drain_notices`](PopoverController::drain_notices).

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::config::PopoverConfig;
use crate::listener::{GlobalEvent, GlobalEvents, ListenerHandle};
use crate::loader::{OverlayLoader, ShowRequest};
use crate::triggers::{TriggerAction, TriggerEvents, Triggers};
use crate::types::{Container, Content, Notice, Placement};

/// Controls the popover of one host element.
///
/// ## Usage
///
/// - Construct with [`PopoverController::new`] or [`PopoverController::with_config`],
///   passing the loader and the global event source explicitly.
/// - Call [`PopoverController::attach`] once the host element exists, and
///   [`PopoverController::detach`] when it goes away.
/// - Use [`show`](Self::show), [`hide`](Self::hide), [`toggle`](Self::toggle) or
///   [`set_open`](Self::set_open) for manual control.
pub struct PopoverController<L: OverlayLoader, G: GlobalEvents> {
    loader: L,
    events: G,
    content: Content,
    title: Option<String>,
    placement: Placement,
    triggers: Triggers,
    container: Container,
    close_on_click_outside: bool,
    pending_open: Option<bool>,
    host: Option<L::Element>,
    outside_click: Option<ListenerHandle>,
}

impl<L: OverlayLoader, G: GlobalEvents> core::fmt::Debug for PopoverController<L, G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PopoverController")
            .field("host", &self.host)
            .field("placement", &self.placement)
            .field("triggers", &self.triggers)
            .field("container", &self.container)
            .field("close_on_click_outside", &self.close_on_click_outside)
            .field("is_open", &self.loader.is_shown())
            .finish_non_exhaustive()
    }
}

impl<L: OverlayLoader, G: GlobalEvents> PopoverController<L, G> {
    /// Create a controller with the default configuration.
    pub fn new(loader: L, events: G) -> Self {
        Self::with_config(loader, events, &PopoverConfig::default())
    }

    /// Create a controller and apply `config`.
    pub fn with_config(loader: L, events: G, config: &PopoverConfig) -> Self {
        let mut this = Self {
            loader,
            events,
            content: Content::default(),
            title: None,
            placement: Placement::default(),
            triggers: Triggers::default(),
            container: Container::default(),
            close_on_click_outside: false,
            pending_open: None,
            host: None,
            outside_click: None,
        };
        this.apply(config);
        this
    }

    /// Copy every option from `config`.
    ///
    /// An `is_open` request is applied immediately when attached, otherwise on
    /// the next [`attach`](Self::attach).
    pub fn apply(&mut self, config: &PopoverConfig) {
        self.set_content(config.content.clone());
        self.set_title(config.title.clone());
        self.set_placement(config.placement);
        self.set_triggers(config.triggers.clone());
        self.set_container(config.container.clone());
        self.set_close_on_click_outside(config.close_on_click_outside);
        if let Some(open) = config.is_open {
            if self.host.is_some() {
                self.set_open(open);
            } else {
                self.pending_open = Some(open);
            }
        }
    }

    /// Bind to `host` and register its trigger events with the loader.
    ///
    /// Attaching while already attached detaches first.
    pub fn attach(&mut self, host: L::Element) {
        if self.host.is_some() {
            self.detach();
        }
        self.host = Some(host);
        self.loader.listen(host, &self.triggers);
        debug!("popover attached to {host:?}");
        if let Some(open) = self.pending_open.take() {
            self.set_open(open);
        }
    }

    /// Dispose the loader, release the outside-click listener, and unbind.
    pub fn detach(&mut self) {
        self.loader.dispose();
        self.release_outside_click();
        if let Some(host) = self.host.take() {
            debug!("popover detached from {host:?}");
        }
    }

    /// Open the popover. Does nothing if it is already open or no host is attached.
    pub fn show(&mut self) {
        if self.loader.is_shown() {
            return;
        }
        let Some(host) = self.host else {
            trace!("popover show ignored: no host attached");
            return;
        };

        self.loader.attach(&self.container);
        self.loader.position(host, self.placement);
        self.loader.show(ShowRequest {
            content: &self.content,
            title: self.title.as_deref(),
            placement: self.placement,
        });
        if !self.loader.is_shown() {
            debug!("popover loader declined to show for {host:?}");
            return;
        }
        debug!("popover shown for {host:?} at {}", self.placement);

        if self.close_on_click_outside {
            self.release_outside_click();
            self.outside_click = Some(self.events.listen(GlobalEvent::PointerDown));
        }
    }

    /// Close the popover and release the outside-click listener, if any.
    pub fn hide(&mut self) {
        if self.loader.is_shown() {
            self.loader.hide();
            debug!("popover hidden");
        }
        self.release_outside_click();
    }

    /// Close if open, otherwise open.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Returns true while the loader reports an attached overlay.
    pub fn is_open(&self) -> bool {
        self.loader.is_shown()
    }

    /// Open (`true`) or close (`false`) the popover.
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.show();
        } else {
            self.hide();
        }
    }

    /// Deliver a host event.
    ///
    /// Returns true if the trigger spec mentions the event and the controller
    /// is attached.
    pub fn handle_trigger(&mut self, event: TriggerEvents) -> bool {
        if self.host.is_none() {
            return false;
        }
        match self.triggers.action_for(event) {
            Some(TriggerAction::Show) => self.show(),
            Some(TriggerAction::Hide) => self.hide(),
            Some(TriggerAction::Toggle) => self.toggle(),
            None => return false,
        }
        true
    }

    /// Deliver a document-level pointer down.
    ///
    /// `None` means the pointer went down on no element. Hides the popover
    /// when click-outside dismissal is live and `target` lies outside both the
    /// host and the rendered overlay. Returns true if it hid.
    pub fn handle_pointer_down(&mut self, target: Option<L::Element>) -> bool {
        if !self.close_on_click_outside || self.outside_click.is_none() {
            return false;
        }
        let Some(overlay) = self.loader.rendered_element() else {
            trace!("pointer down ignored: no rendered overlay");
            return false;
        };
        if let Some(target) = target {
            if let Some(host) = self.host
                && self.loader.contains(host, target)
            {
                return false;
            }
            if self.loader.contains(overlay, target) {
                return false;
            }
        }
        self.hide();
        true
    }

    /// Take the loader's notices since the last call, unchanged.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.loader.drain_notices()
    }

    /// Returns true while a document pointer listener is registered.
    pub fn has_outside_click_listener(&self) -> bool {
        self.outside_click.as_ref().is_some_and(ListenerHandle::is_active)
    }

    /// The attached host element.
    pub fn host(&self) -> Option<L::Element> {
        self.host
    }

    /// The overlay loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Mutable access to the overlay loader, e.g. to reposition after layout.
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    /// Popover body.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Set the popover body; takes effect on the next show.
    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Header text.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the header text; takes effect on the next show.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Side of the host the overlay is anchored to.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Set the placement; takes effect on the next show.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Trigger spec.
    pub fn triggers(&self) -> &Triggers {
        &self.triggers
    }

    /// Replace the trigger spec, re-registering with the loader when attached.
    pub fn set_triggers(&mut self, triggers: Triggers) {
        self.triggers = triggers;
        if let Some(host) = self.host {
            self.loader.listen(host, &self.triggers);
        }
    }

    /// Container target.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Set the container target; takes effect on the next show.
    pub fn set_container(&mut self, container: Container) {
        self.container = container;
    }

    /// Whether click-outside dismissal is enabled.
    pub fn close_on_click_outside(&self) -> bool {
        self.close_on_click_outside
    }

    /// Enable or disable click-outside dismissal.
    ///
    /// Disabling releases a live listener; enabling takes effect on the next show.
    pub fn set_close_on_click_outside(&mut self, enabled: bool) {
        self.close_on_click_outside = enabled;
        if !enabled {
            self.release_outside_click();
        }
    }

    fn release_outside_click(&mut self) {
        if let Some(mut handle) = self.outside_click.take() {
            handle.release();
        }
    }
}
