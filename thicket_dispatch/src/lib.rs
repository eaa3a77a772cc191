// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Dispatch: sink traits and the notification router.
//!
//! ## Overview
//!
//! This crate is where the pure pipeline meets the host. The host delivers
//! raw gesture [`Notification`]s (screen name, optional element name, and
//! the positional payload); the [`Router`] filters them, decodes them with
//! `thicket_event`, and projects the result with `thicket_project` into two
//! injected sinks:
//!
//! - an [`EventLog`] that takes one formatted line per event, and
//! - a [`VariableStore`] that takes a full rewrite of the variable
//!   namespace.
//!
//! Sinks are passed in at construction — there is no ambient state — and the
//! traits are implemented for `&mut T`, so the host keeps ownership.
//!
//! ## Failure containment
//!
//! A malformed payload costs one diagnostic log line and nothing else; an
//! unavailable log sink costs one note on the [`DiagnosticLog`] channel. The
//! caller never sees a fault, and the variable namespace is never left
//! partially updated.
//!
//! ```
//! use thicket_context::Value;
//! use thicket_dispatch::{Filter, MemoryStore, Notification, Router, VecLog};
//! use thicket_project::NAMESPACE;
//!
//! let mut log = VecLog::new();
//! let mut store = MemoryStore::with_namespace(NAMESPACE);
//! let mut router = Router::new(Filter::for_screen("Main"), &mut log, &mut store);
//!
//! let payload = [
//!     Value::Uint(2),
//!     Value::Uint(1),
//!     Value::Uint(4),
//!     Value::Float(100.7),
//!     Value::Float(50.2),
//!     Value::Uint(3),
//! ];
//! router.handle(&Notification {
//!     screen: "Main",
//!     element: None,
//!     payload: &payload,
//! });
//! drop(router);
//!
//! assert_eq!(log.lines().len(), 1);
//! assert_eq!(store.get("GestureLastTapCount"), Some("3"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod memory;
mod router;
mod sink;

pub use memory::{MemoryStore, VecLog};
pub use router::{Filter, LOG_UNAVAILABLE_NOTE, Notification, Router};
pub use sink::{DiagnosticLog, EventLog, NoDiagnostics, SinkUnavailable, VariableStore};
