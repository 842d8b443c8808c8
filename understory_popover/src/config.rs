// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative popover configuration.
//!
//! A [`PopoverConfig`] lists every option a popover recognizes. Toolkits build
//! one from their template bindings (or deserialize one with the `serde`
//! feature) and hand it to
//! [`PopoverController::with_config`](crate::controller::PopoverController::with_config)
//! or [`PopoverController::apply`](crate::controller::PopoverController::apply).

use alloc::string::String;

use crate::triggers::Triggers;
use crate::types::{Container, Content, Placement};

/// Every recognized popover option.
///
/// Defaults: empty text content, no title, [`Placement::Top`], `click`
/// triggers, [`Container::Inline`], click-outside dismissal off, and no
/// initial open state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PopoverConfig {
    /// Body of the popover.
    pub content: Content,
    /// Optional header text.
    pub title: Option<String>,
    /// Side of the host the overlay is anchored to.
    pub placement: Placement,
    /// Host events that open (and optionally close) the popover.
    pub triggers: Triggers,
    /// Where the overlay element is appended.
    pub container: Container,
    /// Hide when a pointer goes down outside both the host and the overlay.
    pub close_on_click_outside: bool,
    /// Open state to apply once the controller is attached to a host.
    pub is_open: Option<bool>,
}

impl PopoverConfig {
    /// A default configuration with the given content.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the placement.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the trigger spec.
    pub fn triggers(mut self, triggers: Triggers) -> Self {
        self.triggers = triggers;
        self
    }

    /// Set the container target.
    pub fn container(mut self, container: Container) -> Self {
        self.container = container;
        self
    }

    /// Enable or disable click-outside dismissal.
    pub fn close_on_click_outside(mut self, enabled: bool) -> Self {
        self.close_on_click_outside = enabled;
        self
    }

    /// Request an initial open state.
    pub fn open(mut self, open: bool) -> Self {
        self.is_open = Some(open);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triggers::TriggerEvents;

    #[test]
    fn defaults_match_classic_popover() {
        let c = PopoverConfig::default();
        assert_eq!(c.placement, Placement::Top);
        assert_eq!(c.triggers.open_events(), TriggerEvents::CLICK);
        assert_eq!(c.container, Container::Inline);
        assert!(!c.close_on_click_outside);
        assert_eq!(c.is_open, None);
        assert_eq!(c.title, None);
    }

    #[test]
    fn builder_sets_fields() {
        let c = PopoverConfig::new("Hello")
            .title("Greeting")
            .placement(Placement::Right)
            .triggers(Triggers::manual())
            .container(Container::Body)
            .close_on_click_outside(true)
            .open(true);
        assert_eq!(c.content, Content::Text("Hello".into()));
        assert_eq!(c.title.as_deref(), Some("Greeting"));
        assert_eq!(c.placement, Placement::Right);
        assert!(c.triggers.is_empty());
        assert_eq!(c.container, Container::Body);
        assert!(c.close_on_click_outside);
        assert_eq!(c.is_open, Some(true));
    }
}
