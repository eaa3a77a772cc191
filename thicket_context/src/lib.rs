// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Context: the weakly-typed value model for host interaction payloads.
//!
//! ## Overview
//!
//! Runtime hosts deliver gesture notifications as a positionally-encoded,
//! heterogeneously-typed array: each slot is "some value" whose meaning is
//! fixed by its position, and whose concrete type is whatever the host's
//! marshalling layer produced. [`Value`] models exactly that surface — a
//! small sum of the shapes that actually occur on the wire (nothing, an
//! unsigned code, a float, or a nested array) — so that schema knowledge
//! stays out of this crate entirely.
//!
//! Downstream decoders (see `thicket_event`) read slots through the
//! [`Value::as_uint`], [`Value::as_float`], and [`Value::as_list`] accessors
//! and turn a `None` into a typed decode error with positional context.
//!
//! ## Conversion leniency
//!
//! Host marshalling is sloppy about numeric width: a count may arrive as a
//! float with an integral value, and a coordinate may arrive as an unsigned
//! integer. The accessors mirror that leniency:
//!
//! - [`Value::as_uint`] accepts [`Value::Uint`] directly, and a
//!   [`Value::Float`] whose value is a non-negative integer representable in
//!   `u32`.
//! - [`Value::as_float`] accepts [`Value::Float`] directly and widens
//!   [`Value::Uint`].
//! - [`Value::as_list`] accepts only [`Value::List`].
//!
//! Everything else — including [`Value::Null`] everywhere — is a mismatch,
//! surfaced as `None`.
//!
//! ```
//! use thicket_context::Value;
//!
//! assert_eq!(Value::Uint(3).as_uint(), Some(3));
//! assert_eq!(Value::Float(3.0).as_uint(), Some(3));
//! assert_eq!(Value::Float(3.5).as_uint(), None);
//! assert_eq!(Value::Uint(7).as_float(), Some(7.0));
//! assert_eq!(Value::Null.as_float(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// One weakly-typed slot of a host interaction payload.
///
/// The set of variants is the set of shapes the host wire format produces;
/// it is deliberately closed. Position, not type, determines what a slot
/// means — that mapping belongs to the decoder, not to this type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The host supplied nothing for this slot.
    Null,
    /// An unsigned integer code or bitmask.
    Uint(u32),
    /// A floating-point quantity (positions, transform components).
    Float(f64),
    /// A nested positional array.
    List(Vec<Value>),
}

/// The shape of a [`Value`], without its contents.
///
/// Used by decoders to report what was found where something else was
/// expected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Uint`].
    Uint,
    /// [`Value::Float`].
    Float,
    /// [`Value::List`].
    List,
}

impl Value {
    /// The shape of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Uint(_) => ValueKind::Uint,
            Self::Float(_) => ValueKind::Float,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Read this slot as an unsigned integer.
    ///
    /// Accepts [`Value::Uint`], and a [`Value::Float`] whose value is a
    /// non-negative integer representable in `u32`. Returns `None` for
    /// anything else (including `NaN` and fractional floats).
    pub fn as_uint(&self) -> Option<u32> {
        match *self {
            Self::Uint(u) => Some(u),
            Self::Float(f) => {
                // Saturating cast, then round-trip to reject fractions,
                // negatives, out-of-range values, and NaN in one comparison.
                let t = f as u32;
                if f64::from(t) == f { Some(t) } else { None }
            }
            _ => None,
        }
    }

    /// Read this slot as a float, widening an unsigned integer if needed.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Self::Float(f) => Some(f),
            Self::Uint(u) => Some(f64::from(u)),
            _ => None,
        }
    }

    /// Read this slot as a nested positional array.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Self::Uint(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Uint => "unsigned integer",
            Self::Float => "float",
            Self::List => "list",
        };
        f.write_str(name)
    }
}
