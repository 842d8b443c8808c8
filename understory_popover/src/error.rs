// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors from parsing declarative popover configuration.

use alloc::string::String;

use crate::triggers::Trigger;

/// Failure to parse a configuration string.
///
/// Runtime operations on a [`PopoverController`](crate::controller::PopoverController)
/// never fail; only turning strings into [`Placement`](crate::types::Placement),
/// [`Triggers`](crate::triggers::Triggers) or [`Container`](crate::types::Container)
/// can.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The placement is not one of `top`, `bottom`, `left`, `right`.
    #[error("unknown placement `{0}`")]
    UnknownPlacement(String),
    /// A trigger spec names an event that is not recognized.
    #[error("unknown trigger event `{0}`")]
    UnknownTrigger(String),
    /// A trigger entry has an empty side or more than one `:` separator.
    #[error("malformed trigger entry `{0}`")]
    MalformedTrigger(String),
    /// A programmatically built trigger entry names no event, or several, on
    /// one side.
    #[error("trigger entry must name exactly one event per side: {0:?}")]
    InvalidTrigger(Trigger),
    /// A container selector was given but is blank.
    #[error("container selector is empty")]
    EmptyContainer,
}
