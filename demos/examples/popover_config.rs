// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative configuration loaded from JSON.
//!
//! Demonstrates the `serde` feature of `understory_popover`, string parsing of
//! trigger specs, and the errors reported for bad configuration.
//!
//! Run:
//! - `cargo run -p understory_demos --example popover_config`

use kurbo::Rect;
use understory_overlay::loader::SceneLoader;
use understory_overlay::scene::Scene;
use understory_popover::config::PopoverConfig;
use understory_popover::controller::PopoverController;
use understory_popover::triggers::{TriggerEvents, Triggers};
use understory_popover::types::{Container, Content, Placement};

const CONFIG: &str = r#"{
    "content": { "text": "Keyboard shortcuts" },
    "title": "Help",
    "placement": "right",
    "triggers": "mouseenter:mouseleave focus:blur",
    "container": "body",
    "close_on_click_outside": true,
    "is_open": true
}"#;

fn main() {
    env_logger::init();

    let config: PopoverConfig = match serde_json::from_str(CONFIG) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid popover config: {e}");
            std::process::exit(1);
        }
    };
    println!("== Parsed ==\n  {config:?}");

    assert_eq!(config.content, Content::Text("Keyboard shortcuts".into()));
    assert_eq!(config.placement, Placement::Right);
    assert_eq!(config.container, Container::Body);

    let scene = Scene::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let help = scene.insert(None, Rect::new(40.0, 40.0, 72.0, 72.0));
    let mut popover =
        PopoverController::with_config(SceneLoader::new(scene.clone()), scene.clone(), &config);

    // `is_open` waits for a host.
    assert!(!popover.is_open());
    popover.attach(help);
    assert!(popover.is_open());

    popover.handle_trigger(TriggerEvents::BLUR);
    assert!(!popover.is_open());
    popover.handle_trigger(TriggerEvents::FOCUS);
    assert!(popover.is_open());
    println!("== Notices ==\n  {:?}", popover.drain_notices());

    match serde_json::to_string(&config) {
        Ok(json) => println!("== Serialized ==\n  {json}"),
        Err(e) => eprintln!("serialize failed: {e}"),
    }

    println!("== Rejected ==");
    for bad in [
        r#"{ "placement": "center" }"#,
        r#"{ "triggers": "click tap" }"#,
        r#"{ "container": "" }"#,
    ] {
        if let Err(e) = serde_json::from_str::<PopoverConfig>(bad) {
            println!("  {bad} -> {e}");
        }
    }

    let spec: Result<Triggers, _> = "click:".parse();
    println!("  \"click:\" -> {spec:?}");
}
