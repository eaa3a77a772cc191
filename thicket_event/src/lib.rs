// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Event: typed interaction events decoded from positional host payloads.
//!
//! ## Overview
//!
//! Hosts report gestures (tap, hold, drag, manipulation, cross-slide) as a
//! six-slot, weakly-typed array — see `thicket_context` for the value model.
//! This crate owns the schema for that array and turns it into an
//! [`InteractionEvent`]: a small immutable value carrying the gesture
//! [`InteractionKind`], its [`InteractionFlags`] phase mask, the
//! [`PointerType`] that produced it, a floored pixel [`PixelPosition`], and
//! the kind-specific [`InteractionArgs`].
//!
//! ## Decoding
//!
//! [`decode()`] is a pure function from slots to event. It either produces a
//! fully-populated event or a [`DecodeError`] — never a partial result. An
//! *unrecognized* gesture or pointer code is not an error: it decodes to the
//! explicit `Unknown` variant, because hosts grow new codes faster than
//! consumers learn them. Malformed *shape* (missing slots, wrong slot types,
//! a manipulation argument tree that does not nest as documented) is an
//! error.
//!
//! ```
//! use thicket_context::Value;
//! use thicket_event::{decode, InteractionFlags, InteractionKind, PointerType};
//!
//! let payload = [
//!     Value::Uint(2),      // tap
//!     Value::Uint(1),      // begin
//!     Value::Uint(4),      // mouse
//!     Value::Float(100.7),
//!     Value::Float(50.2),
//!     Value::Uint(3),      // tap count
//! ];
//! let event = decode(&payload).unwrap();
//! assert_eq!(event.kind, InteractionKind::Tap);
//! assert_eq!(event.flags, InteractionFlags::BEGIN);
//! assert_eq!(event.pointer, PointerType::Mouse);
//! assert_eq!((event.position.x, event.position.y), (100, 50));
//! ```
//!
//! ## Where this fits
//!
//! Decoding is the only place runtime type inspection happens; everything
//! downstream (`thicket_project` renders log lines and variable writes,
//! `thicket_dispatch` routes to sinks) works on the typed event alone.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod decode;
mod types;
mod util;

pub use decode::{DecodeError, PAYLOAD_SLOTS, decode};
pub use types::{
    CrossSlideFlags, InteractionArgs, InteractionEvent, InteractionFlags, InteractionKind,
    Manipulation, ManipulationTransform, ManipulationVelocity, PixelPosition, PointerType,
    RailsState,
};
