// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture pipeline: notifications → router → log + variables.
//!
//! This example plays the role of the host's notification source. It feeds a
//! handful of raw payloads — a tap, a manipulation, a cross-slide, an event
//! from an unrecognized gesture code, and a malformed payload — through a
//! [`thicket_dispatch::Router`] wired to in-memory sinks, then dumps both
//! sinks.
//!
//! Run:
//! - `cargo run -p thicket_demos --example gesture_pipeline`

use thicket_context::Value;
use thicket_dispatch::{Filter, MemoryStore, Notification, Router, VecLog};
use thicket_project::NAMESPACE;

fn main() {
    let mut log = VecLog::new();
    let mut store = MemoryStore::with_namespace(NAMESPACE);
    let mut router = Router::new(Filter::for_screen("Main"), &mut log, &mut store);

    // A double tap with a mouse at (100.7, 50.2).
    let tap = vec![
        Value::Uint(2),
        Value::Uint(1), // begin
        Value::Uint(4), // mouse
        Value::Float(100.7),
        Value::Float(50.2),
        Value::Uint(2),
    ];

    // A two-finger manipulation: delta, cumulative, velocity, rails.
    let manipulation = vec![
        Value::Uint(1),
        Value::Uint(8), // inertia
        Value::Uint(2), // touch
        Value::Float(640.0),
        Value::Float(360.0),
        Value::List(vec![
            Value::List(vec![
                Value::Float(4.25),
                Value::Float(-1.5),
                Value::Float(1.02),
                Value::Float(0.5),
                Value::Float(0.01),
            ]),
            Value::List(vec![
                Value::Float(128.5),
                Value::Float(-44.0),
                Value::Float(1.6),
                Value::Float(12.0),
                Value::Float(0.35),
            ]),
            Value::List(vec![
                Value::Float(0.8),
                Value::Float(-0.2),
                Value::Float(0.01),
                Value::Float(0.0),
            ]),
            Value::Uint(1), // free
        ]),
    ];

    // A cross-slide that both selected and crossed the speed bump.
    let cross_slide = vec![
        Value::Uint(6),
        Value::Uint(2), // end
        Value::Uint(2), // touch
        Value::Float(300.0),
        Value::Float(80.0),
        Value::Uint(0b011), // select | speed bump
    ];

    // A gesture code this pipeline has never heard of.
    let unrecognized = vec![
        Value::Uint(99),
        Value::Uint(0),
        Value::Uint(3), // pen
        Value::Float(5.5),
        Value::Float(6.5),
        Value::Null,
    ];

    // A payload the host mangled: slots missing.
    let malformed = vec![Value::Uint(2), Value::Uint(1)];

    let payloads: [&[Value]; 5] = [&tap, &manipulation, &cross_slide, &unrecognized, &malformed];
    for payload in payloads {
        router.handle(&Notification {
            screen: "Main",
            element: None,
            payload,
        });
    }

    // An event from another screen: dropped before any sink activity.
    router.handle(&Notification {
        screen: "Settings",
        element: None,
        payload: &tap,
    });
    drop(router);

    println!("== Event log ==");
    for line in log.lines() {
        println!("{line}");
    }

    println!("\n== Variable namespace (after the last event) ==");
    for name in NAMESPACE {
        println!("{name} = {:?}", store.get(name).unwrap_or(""));
    }
}
