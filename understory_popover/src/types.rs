// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for popovers: placement, content, container targets, and notices.
//!
//! ## Overview
//!
//! These types describe what a popover shows and where it goes. They are
//! carried by [`PopoverConfig`](crate::config::PopoverConfig), handed to an
//! [`OverlayLoader`](crate::loader::OverlayLoader) through a
//! [`ShowRequest`](crate::loader::ShowRequest), and reported back as [`Notice`]s.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Side of the host element the overlay is anchored to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Placement {
    /// Above the host.
    #[default]
    Top,
    /// Below the host.
    Bottom,
    /// Left of the host.
    Left,
    /// Right of the host.
    Right,
}

impl Placement {
    /// All placements, in declaration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The placement on the other side of the host.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true for `Top` and `Bottom`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Lowercase name used in declarative configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPlacement(s.to_string()))
    }
}

/// Opaque handle to a template owned by the toolkit.
///
/// The popover never looks inside; the loader resolves it when rendering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateKey(pub u32);

/// What the popover body renders.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Content {
    /// Plain text.
    Text(String),
    /// A toolkit template.
    Template(TemplateKey),
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<TemplateKey> for Content {
    fn from(key: TemplateKey) -> Self {
        Self::Template(key)
    }
}

/// Where the overlay element is appended.
///
/// Parsed from a selector string: `"body"` becomes [`Container::Body`],
/// anything else non-blank becomes [`Container::Selector`]. Absence of a
/// selector is [`Container::Inline`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Option<String>", into = "Option<String>")
)]
pub enum Container {
    /// Next to the host element, under the host's parent.
    #[default]
    Inline,
    /// The document body.
    Body,
    /// An element found by the loader under this selector.
    Selector(String),
}

impl FromStr for Container {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(Error::EmptyContainer),
            "body" => Ok(Self::Body),
            other => Ok(Self::Selector(other.to_string())),
        }
    }
}

impl TryFrom<Option<String>> for Container {
    type Error = Error;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(Self::Inline),
            Some(s) => s.parse(),
        }
    }
}

impl From<Container> for Option<String> {
    fn from(value: Container) -> Self {
        match value {
            Container::Inline => None,
            Container::Body => Some("body".to_string()),
            Container::Selector(s) => Some(s),
        }
    }
}

/// Visibility notification emitted by an overlay loader.
///
/// Returned, untransformed, by
/// [`PopoverController::drain_notices`](crate::controller::PopoverController::drain_notices).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Notice {
    /// An overlay was attached and shown.
    Shown,
    /// The overlay was removed.
    Hidden,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_parse_is_case_insensitive() {
        assert_eq!("top".parse::<Placement>(), Ok(Placement::Top));
        assert_eq!(" Bottom ".parse::<Placement>(), Ok(Placement::Bottom));
        assert_eq!("LEFT".parse::<Placement>(), Ok(Placement::Left));
        assert_eq!(
            "center".parse::<Placement>(),
            Err(Error::UnknownPlacement("center".to_string()))
        );
    }

    #[test]
    fn placement_opposites_pair_up() {
        for p in Placement::ALL {
            assert_eq!(p.opposite().opposite(), p);
            assert_eq!(p.opposite().is_vertical(), p.is_vertical());
        }
    }

    #[test]
    fn container_from_selector() {
        assert_eq!("body".parse::<Container>(), Ok(Container::Body));
        assert_eq!(
            "#sidebar".parse::<Container>(),
            Ok(Container::Selector("#sidebar".to_string()))
        );
        assert_eq!("  ".parse::<Container>(), Err(Error::EmptyContainer));
        assert_eq!(Container::try_from(None::<String>), Ok(Container::Inline));
        assert_eq!(Option::<String>::from(Container::Inline), None);
    }
}
