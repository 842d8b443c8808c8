// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-outside dismissal driven by hit testing.
//!
//! A small event loop feeds pointer downs to the scene. Clicks on the host
//! trigger the popover; any pointer down is also offered to the popover while
//! it holds a document listener.
//!
//! Run:
//! - `cargo run -p understory_demos --example popover_dismiss`

use kurbo::{Point, Rect};
use understory_overlay::loader::SceneLoader;
use understory_overlay::scene::Scene;
use understory_popover::config::PopoverConfig;
use understory_popover::controller::PopoverController;
use understory_popover::listener::GlobalEvent;
use understory_popover::triggers::TriggerEvents;

fn main() {
    env_logger::init();

    let scene = Scene::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let card = scene.insert(None, Rect::new(200.0, 150.0, 600.0, 450.0));
    let info = scene.insert(Some(card), Rect::new(380.0, 280.0, 420.0, 320.0));
    let other = scene.insert(Some(card), Rect::new(220.0, 170.0, 300.0, 200.0));

    let config = PopoverConfig::new("Details about this card").close_on_click_outside(true);
    let mut popover =
        PopoverController::with_config(SceneLoader::new(scene.clone()), scene.clone(), &config);
    popover.attach(info);

    let clicks = [
        ("info icon", Point::new(400.0, 300.0)),
        ("inside popover", Point::new(400.0, 250.0)),
        ("info icon again", Point::new(400.0, 300.0)),
        ("other button", Point::new(250.0, 185.0)),
        ("info icon", Point::new(400.0, 300.0)),
        ("background", Point::new(20.0, 20.0)),
    ];

    let mut states = Vec::new();
    for (label, pt) in clicks {
        let target = scene.hit_test(pt);
        // Document-level listeners see the pointer down first.
        if scene.is_listening(GlobalEvent::PointerDown) {
            popover.handle_pointer_down(target);
        }
        if target == Some(info) {
            popover.handle_trigger(TriggerEvents::CLICK);
        }
        println!(
            "{label:>16}: target={target:?} open={} listeners={}",
            popover.is_open(),
            scene.listeners().total()
        );
        states.push(popover.is_open());
    }

    popover.detach();
    println!("after detach: listeners={}", scene.listeners().total());

    assert_eq!(scene.hit_test(Point::new(250.0, 185.0)), Some(other));
    assert_eq!(states, vec![true, true, true, false, true, false]);
    assert_eq!(scene.listeners().total(), 0);
}
