// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Manual popover control against a scene.
//!
//! Shows, hides, and toggles a popover on a button and prints the notices and
//! the overlay geometry at each step.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example popover_basics`

use kurbo::{Rect, Size};
use understory_overlay::loader::SceneLoader;
use understory_overlay::scene::Scene;
use understory_popover::config::PopoverConfig;
use understory_popover::controller::PopoverController;
use understory_popover::types::{Notice, Placement};

fn main() {
    env_logger::init();

    let scene = Scene::new(Rect::new(0.0, 0.0, 640.0, 480.0));
    let toolbar = scene.insert(None, Rect::new(0.0, 0.0, 640.0, 48.0));
    let button = scene.insert(Some(toolbar), Rect::new(300.0, 8.0, 340.0, 40.0));

    let config = PopoverConfig::new("Undo the last edit")
        .title("Undo")
        .placement(Placement::Top);
    let loader = SceneLoader::new(scene.clone()).with_overlay_size(Size::new(180.0, 60.0));
    let mut popover = PopoverController::with_config(loader, scene.clone(), &config);
    popover.attach(button);

    popover.show();
    popover.show();
    let rendered = popover.loader().rendered().cloned();
    println!("== Show (twice) ==\n  {:?}", popover.drain_notices());
    if let Some(r) = &rendered {
        // The toolbar hugs the top edge, so the popover flips below the button.
        println!(
            "  requested {} placed {} at {:?}",
            r.requested, r.placement, r.bounds
        );
    }

    popover.hide();
    popover.hide();
    println!("== Hide (twice) ==\n  {:?}", popover.drain_notices());

    let mut states = Vec::new();
    for _ in 0..4 {
        popover.toggle();
        states.push(popover.is_open());
    }
    println!("== Toggle x4 ==\n  {states:?}");

    popover.detach();
    let notices = popover.drain_notices();
    println!("== Toggle + detach notices ==\n  {notices:?}");

    assert_eq!(rendered.map(|r| r.placement), Some(Placement::Bottom));
    assert_eq!(states, vec![true, false, true, false]);
    assert_eq!(
        notices,
        vec![Notice::Shown, Notice::Hidden, Notice::Shown, Notice::Hidden]
    );
}
