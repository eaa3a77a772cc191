// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Project: pure projections of interaction events.
//!
//! ## Overview
//!
//! A decoded [`InteractionEvent`](thicket_event::InteractionEvent) feeds two
//! downstream surfaces, and this crate renders both:
//!
//! - [`format_event`] produces the single-line, human-readable log entry —
//!   kind, phase flags, pointer type, floored position, and (for taps) the
//!   count. Manipulation and cross-slide detail stays *out* of the line on
//!   purpose: the log is a compact trace, not a data channel.
//! - [`project_event`] produces one write per slot of the fixed variable
//!   [`NAMESPACE`] — a *full refresh*. Slots that do not apply to the
//!   current event are explicitly written empty, never left holding a stale
//!   value from an earlier event. That clear-the-rest rule is an invariant,
//!   not an optimization.
//!
//! Both functions are total: any event renders, nothing fails.
//!
//! ```
//! use thicket_context::Value;
//! use thicket_event::decode;
//! use thicket_project::{format_event, names, project_event};
//!
//! let payload = [
//!     Value::Uint(2),
//!     Value::Uint(1),
//!     Value::Uint(4),
//!     Value::Float(100.7),
//!     Value::Float(50.2),
//!     Value::Uint(3),
//! ];
//! let event = decode(&payload).unwrap();
//! assert_eq!(
//!     format_event(&event),
//!     "TAP Flag(s): BEGIN, using: MOUSE X-Position: 100 Y-Position: 50 Count: 3",
//! );
//! let writes = project_event(&event);
//! let count = writes.iter().find(|w| w.name == names::TAP_COUNT).unwrap();
//! assert_eq!(count.value, "3");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod message;
mod variables;

pub use message::format_event;
pub use variables::{
    NAMESPACE, NAMESPACE_SLOTS, ProjectionBatch, VariableWrite, names, project_event,
};
