// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger specs: which host events open or close a popover.
//!
//! ## Grammar
//!
//! A trigger spec is a space-separated list of entries. Each entry is either
//! `open` or `open:close`, where both sides are event names:
//! `click`, `mouseenter`, `mouseleave`, `mouseover`, `mouseout`, `focus`,
//! `blur`, `focusin`, `focusout`. The alias `hover` stands for
//! `mouseover:mouseout`. An empty spec means the popover is only opened
//! manually.
//!
//! ```
//! use understory_popover::triggers::{TriggerAction, TriggerEvents, Triggers};
//!
//! let t: Triggers = "click hover".parse().unwrap();
//! assert_eq!(t.action_for(TriggerEvents::CLICK), Some(TriggerAction::Show));
//! assert_eq!(t.action_for(TriggerEvents::MOUSE_OUT), Some(TriggerAction::Hide));
//! assert_eq!(t.to_string(), "click mouseover:mouseout");
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::Error;

bitflags::bitflags! {
    /// Host element events a trigger spec can name.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TriggerEvents: u16 {
        /// Pointer click.
        const CLICK       = 0b0000_0000_0001;
        /// Pointer enters the host (does not bubble).
        const MOUSE_ENTER = 0b0000_0000_0010;
        /// Pointer leaves the host (does not bubble).
        const MOUSE_LEAVE = 0b0000_0000_0100;
        /// Pointer moves onto the host or a descendant.
        const MOUSE_OVER  = 0b0000_0000_1000;
        /// Pointer moves off the host or a descendant.
        const MOUSE_OUT   = 0b0000_0001_0000;
        /// Host gains focus.
        const FOCUS       = 0b0000_0010_0000;
        /// Host loses focus.
        const BLUR        = 0b0000_0100_0000;
        /// Host or a descendant gains focus.
        const FOCUS_IN    = 0b0000_1000_0000;
        /// Host or a descendant loses focus.
        const FOCUS_OUT   = 0b0001_0000_0000;
    }
}

const EVENT_NAMES: [(&str, TriggerEvents); 9] = [
    ("click", TriggerEvents::CLICK),
    ("mouseenter", TriggerEvents::MOUSE_ENTER),
    ("mouseleave", TriggerEvents::MOUSE_LEAVE),
    ("mouseover", TriggerEvents::MOUSE_OVER),
    ("mouseout", TriggerEvents::MOUSE_OUT),
    ("focus", TriggerEvents::FOCUS),
    ("blur", TriggerEvents::BLUR),
    ("focusin", TriggerEvents::FOCUS_IN),
    ("focusout", TriggerEvents::FOCUS_OUT),
];

impl TriggerEvents {
    /// Look up a single event by its DOM-style name.
    ///
    /// Unlike the generated `from_name`, this matches `click`, not `CLICK`.
    pub fn from_event_name(name: &str) -> Option<Self> {
        EVENT_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, ev)| ev)
    }

    /// DOM-style name of a single event; `None` for empty or combined sets.
    pub fn name(self) -> Option<&'static str> {
        EVENT_NAMES
            .iter()
            .find(|(_, ev)| *ev == self)
            .map(|&(n, _)| n)
    }
}

/// One entry of a trigger spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Trigger {
    /// Event that opens the popover.
    pub open: TriggerEvents,
    /// Event that closes it, if the entry was written as `open:close`.
    pub close: Option<TriggerEvents>,
}

impl Trigger {
    fn is_single(&self) -> bool {
        self.open.name().is_some() && self.close.is_none_or(|c| c.name().is_some())
    }
}

/// What a host event asks the popover to do.
///
/// Returned by [`Triggers::action_for`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TriggerAction {
    /// Open the popover.
    Show,
    /// Close the popover.
    Hide,
    /// The event both opens and closes; flip the current state.
    Toggle,
}

/// A parsed trigger spec.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triggers {
    entries: Vec<Trigger>,
}

impl Default for Triggers {
    fn default() -> Self {
        Self {
            entries: alloc::vec![Trigger {
                open: TriggerEvents::CLICK,
                close: None,
            }],
        }
    }
}

impl Triggers {
    /// A spec with no entries; the popover only opens manually.
    pub fn manual() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a spec from entries.
    ///
    /// Each side of an entry must name exactly one event, so that the spec
    /// prints back to a string that parses to the same entries.
    pub fn from_entries(entries: impl IntoIterator<Item = Trigger>) -> Result<Self, Error> {
        let entries: Vec<Trigger> = entries.into_iter().collect();
        if let Some(bad) = entries.iter().find(|t| !t.is_single()) {
            return Err(Error::InvalidTrigger(*bad));
        }
        Ok(Self { entries })
    }

    /// The parsed entries in spec order.
    pub fn entries(&self) -> &[Trigger] {
        &self.entries
    }

    /// Returns true when no event opens or closes the popover.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union of every opening event.
    pub fn open_events(&self) -> TriggerEvents {
        self.entries
            .iter()
            .fold(TriggerEvents::empty(), |acc, t| acc | t.open)
    }

    /// Union of every closing event.
    pub fn close_events(&self) -> TriggerEvents {
        self.entries
            .iter()
            .filter_map(|t| t.close)
            .fold(TriggerEvents::empty(), |acc, ev| acc | ev)
    }

    /// Classify a host event against this spec.
    ///
    /// Returns `None` for events the spec does not mention.
    pub fn action_for(&self, event: TriggerEvents) -> Option<TriggerAction> {
        let opens = self.open_events().intersects(event);
        let closes = self.close_events().intersects(event);
        match (opens, closes) {
            (true, true) => Some(TriggerAction::Toggle),
            (true, false) => Some(TriggerAction::Show),
            (false, true) => Some(TriggerAction::Hide),
            (false, false) => None,
        }
    }
}

fn parse_event(name: &str, entry: &str) -> Result<TriggerEvents, Error> {
    if name.is_empty() {
        return Err(Error::MalformedTrigger(entry.to_string()));
    }
    TriggerEvents::from_event_name(name).ok_or_else(|| Error::UnknownTrigger(name.to_string()))
}

impl FromStr for Triggers {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();
        for entry in s.split_whitespace() {
            if entry == "hover" {
                entries.push(Trigger {
                    open: TriggerEvents::MOUSE_OVER,
                    close: Some(TriggerEvents::MOUSE_OUT),
                });
                continue;
            }
            let trigger = match entry.split_once(':') {
                None => Trigger {
                    open: parse_event(entry, entry)?,
                    close: None,
                },
                Some((_, close)) if close.contains(':') => {
                    return Err(Error::MalformedTrigger(entry.to_string()));
                }
                Some((open, close)) => Trigger {
                    open: parse_event(open, entry)?,
                    close: Some(parse_event(close, entry)?),
                },
            };
            entries.push(trigger);
        }
        Ok(Self { entries })
    }
}

impl fmt::Display for Triggers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(t.open.name().unwrap_or("?"))?;
            if let Some(close) = t.close {
                write!(f, ":{}", close.name().unwrap_or("?"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Triggers {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Triggers> for String {
    fn from(value: Triggers) -> Self {
        value.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Triggers {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Triggers {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        spec.parse().map_err(serde::de::Error::custom)
    }
}
