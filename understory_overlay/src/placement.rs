// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement geometry: where an overlay goes relative to its anchor.
//!
//! [`place`] centers the overlay on one side of the anchor. [`place_within`]
//! additionally flips to the opposite side when the preferred side overflows
//! the bounds and the opposite side does not, then slides the overlay along
//! the anchor's edge to stay inside the bounds.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_overlay::placement::place_within;
//! use understory_popover::types::Placement;
//!
//! let viewport = Rect::new(0.0, 0.0, 400.0, 300.0);
//! // Too close to the top edge for a popover above it.
//! let anchor = Rect::new(100.0, 10.0, 200.0, 40.0);
//! let (side, rect) = place_within(anchor, Size::new(80.0, 50.0), Placement::Top, 4.0, viewport);
//! assert_eq!(side, Placement::Bottom);
//! assert_eq!(rect, Rect::new(110.0, 44.0, 190.0, 94.0));
//! ```

use kurbo::{Point, Rect, Size, Vec2};
use understory_popover::types::Placement;

/// Rectangle for an overlay of `size` on the `placement` side of `anchor`,
/// separated by `offset` and centered along the shared edge.
pub fn place(anchor: Rect, size: Size, placement: Placement, offset: f64) -> Rect {
    let center = anchor.center();
    let origin = match placement {
        Placement::Top => Point::new(
            center.x - size.width / 2.0,
            anchor.y0 - offset - size.height,
        ),
        Placement::Bottom => Point::new(center.x - size.width / 2.0, anchor.y1 + offset),
        Placement::Left => Point::new(
            anchor.x0 - offset - size.width,
            center.y - size.height / 2.0,
        ),
        Placement::Right => Point::new(anchor.x1 + offset, center.y - size.height / 2.0),
    };
    Rect::from_origin_size(origin, size)
}

/// Like [`place`], but keeps the overlay inside `bounds` where possible.
///
/// Returns the side actually used and the final rectangle.
pub fn place_within(
    anchor: Rect,
    size: Size,
    placement: Placement,
    offset: f64,
    bounds: Rect,
) -> (Placement, Rect) {
    let side = if fits_side(place(anchor, size, placement, offset), placement, bounds) {
        placement
    } else {
        let flipped = placement.opposite();
        if fits_side(place(anchor, size, flipped, offset), flipped, bounds) {
            flipped
        } else {
            placement
        }
    };
    let rect = place(anchor, size, side, offset);
    (side, slide_into(rect, side, bounds))
}

// Only the edge facing away from the anchor matters here; the cross axis is
// handled by `slide_into`.
fn fits_side(rect: Rect, placement: Placement, bounds: Rect) -> bool {
    match placement {
        Placement::Top => rect.y0 >= bounds.y0,
        Placement::Bottom => rect.y1 <= bounds.y1,
        Placement::Left => rect.x0 >= bounds.x0,
        Placement::Right => rect.x1 <= bounds.x1,
    }
}

fn slide_into(rect: Rect, placement: Placement, bounds: Rect) -> Rect {
    if placement.is_vertical() {
        rect + Vec2::new(shift(rect.x0, rect.x1, bounds.x0, bounds.x1), 0.0)
    } else {
        rect + Vec2::new(0.0, shift(rect.y0, rect.y1, bounds.y0, bounds.y1))
    }
}

// Distance to move [lo, hi] inside [min, max]; aligns to `min` when too large.
fn shift(lo: f64, hi: f64, min: f64, max: f64) -> f64 {
    if lo < min || hi - lo > max - min {
        min - lo
    } else if hi > max {
        max - hi
    } else {
        0.0
    }
}
