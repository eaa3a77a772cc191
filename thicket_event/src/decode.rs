// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload schema and the decoder.
//!
//! ## Payload layout
//!
//! A gesture payload carries at least [`PAYLOAD_SLOTS`] positional slots:
//!
//! | slot | meaning | shape |
//! |---|---|---|
//! | 0 | interaction identifier | uint code |
//! | 1 | interaction flags | uint bitmask |
//! | 2 | pointer input type | uint code |
//! | 3 | x position | float, screen-relative pixels |
//! | 4 | y position | float, screen-relative pixels |
//! | 5 | variant argument | depends on slot 0 |
//!
//! The variant argument is a tap count (uint) for taps, a cross-slide
//! bitmask (uint) for cross-slides, and for manipulations a nested list
//! `[delta, cumulative, velocity, rails]` where delta and cumulative are
//! five-float lists (translation x/y, scale, expansion, rotation), velocity
//! is a list whose first four entries are floats, and rails is a uint code.
//!
//! Trailing elements beyond the documented length — at the top level and in
//! every nested list — are ignored; slots are addressed positionally and
//! surplus entries are never observed. Anything *shorter*, or a slot of the
//! wrong type, fails the whole decode: there is no partial event.
//!
//! ## Velocity
//!
//! The decoded [`ManipulationVelocity`] mirrors the first four components of
//! the *cumulative* transform list. The velocity entry at `arguments[2]` is
//! shape-checked but its values are not read. Tests pin this mapping.

use thicket_context::{Value, ValueKind};

use crate::types::{
    CrossSlideFlags, InteractionArgs, InteractionEvent, InteractionFlags, InteractionKind,
    Manipulation, ManipulationTransform, ManipulationVelocity, PixelPosition, PointerType,
    RailsState,
};
use crate::util::floor_to_i64;

/// Number of top-level slots a payload must carry.
pub const PAYLOAD_SLOTS: usize = 6;

const SLOT_ID: usize = 0;
const SLOT_FLAGS: usize = 1;
const SLOT_POINTER: usize = 2;
const SLOT_X: usize = 3;
const SLOT_Y: usize = 4;
const SLOT_ARGS: usize = 5;

const ARG_DELTA: usize = 0;
const ARG_CUMULATIVE: usize = 1;
const ARG_VELOCITY: usize = 2;
const ARG_RAILS: usize = 3;
const ARG_SLOTS: usize = 4;

const TRANSFORM_SLOTS: usize = 5;
const VELOCITY_SLOTS: usize = 4;

/// Why a payload could not be decoded.
///
/// Field paths are dotted positional names (`"arguments.delta"`), stable
/// enough to appear in diagnostic log lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload has fewer than [`PAYLOAD_SLOTS`] slots.
    TooShort {
        /// Number of slots actually present.
        len: usize,
    },
    /// A slot held a value of the wrong shape.
    Mismatch {
        /// Dotted path of the offending slot.
        field: &'static str,
        /// Shape the schema requires.
        expected: ValueKind,
        /// Shape the host delivered.
        found: ValueKind,
    },
    /// A nested list had fewer elements than the schema requires.
    ShortList {
        /// Dotted path of the offending list.
        field: &'static str,
        /// Minimum number of elements required.
        expected: usize,
        /// Number of elements actually present.
        found: usize,
    },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "payload has {len} slots, expected at least {PAYLOAD_SLOTS}")
            }
            Self::Mismatch {
                field,
                expected,
                found,
            } => write!(f, "{field}: expected {expected}, found {found}"),
            Self::ShortList {
                field,
                expected,
                found,
            } => write!(f, "{field}: expected at least {expected} elements, found {found}"),
        }
    }
}

impl core::error::Error for DecodeError {}

/// Decode one positional gesture payload into a typed event.
///
/// Pure and side-effect free. Unrecognized interaction or pointer codes
/// decode to the `Unknown` variants; malformed shape is a [`DecodeError`]
/// and produces no event at all.
pub fn decode(payload: &[Value]) -> Result<InteractionEvent, DecodeError> {
    if payload.len() < PAYLOAD_SLOTS {
        return Err(DecodeError::TooShort { len: payload.len() });
    }

    let kind = InteractionKind::from_code(uint(&payload[SLOT_ID], "interaction id")?);
    let flags = InteractionFlags::from_bits_retain(uint(&payload[SLOT_FLAGS], "interaction flags")?);
    let pointer = PointerType::from_code(uint(&payload[SLOT_POINTER], "pointer type")?);
    let x = floor_to_i64(float(&payload[SLOT_X], "x position")?);
    let y = floor_to_i64(float(&payload[SLOT_Y], "y position")?);

    let args = match kind {
        InteractionKind::Tap => InteractionArgs::Tap {
            count: uint(&payload[SLOT_ARGS], "tap count")?,
        },
        InteractionKind::Manipulation => {
            InteractionArgs::Manipulation(manipulation(&payload[SLOT_ARGS])?)
        }
        InteractionKind::CrossSlide => InteractionArgs::CrossSlide {
            flags: CrossSlideFlags::from_bits_retain(uint(
                &payload[SLOT_ARGS],
                "cross-slide flags",
            )?),
        },
        _ => InteractionArgs::None,
    };

    Ok(InteractionEvent {
        kind,
        flags,
        pointer,
        position: PixelPosition::new(x, y),
        args,
    })
}

fn manipulation(slot: &Value) -> Result<Manipulation, DecodeError> {
    let args = list(slot, "arguments")?;
    if args.len() < ARG_SLOTS {
        return Err(DecodeError::ShortList {
            field: "arguments",
            expected: ARG_SLOTS,
            found: args.len(),
        });
    }

    let delta = transform(&args[ARG_DELTA], "arguments.delta")?;
    let cumulative = transform(&args[ARG_CUMULATIVE], "arguments.cumulative")?;

    // The velocity entry is shape-checked only; the velocity fields mirror
    // the first four cumulative components (see the module docs).
    check_velocity_shape(&args[ARG_VELOCITY], "arguments.velocity")?;
    let velocity = ManipulationVelocity {
        x: cumulative.translation_x,
        y: cumulative.translation_y,
        expansion: cumulative.scale,
        angular: cumulative.expansion,
    };

    let rails = RailsState::from_code(uint(&args[ARG_RAILS], "arguments.rails")?);

    Ok(Manipulation {
        delta,
        cumulative,
        velocity,
        rails,
    })
}

fn transform(slot: &Value, field: &'static str) -> Result<ManipulationTransform, DecodeError> {
    let items = list(slot, field)?;
    if items.len() < TRANSFORM_SLOTS {
        return Err(DecodeError::ShortList {
            field,
            expected: TRANSFORM_SLOTS,
            found: items.len(),
        });
    }
    Ok(ManipulationTransform {
        translation_x: float(&items[0], field)?,
        translation_y: float(&items[1], field)?,
        scale: float(&items[2], field)?,
        expansion: float(&items[3], field)?,
        rotation: float(&items[4], field)?,
    })
}

fn check_velocity_shape(slot: &Value, field: &'static str) -> Result<(), DecodeError> {
    let items = list(slot, field)?;
    if items.len() < VELOCITY_SLOTS {
        return Err(DecodeError::ShortList {
            field,
            expected: VELOCITY_SLOTS,
            found: items.len(),
        });
    }
    for item in &items[..VELOCITY_SLOTS] {
        float(item, field)?;
    }
    Ok(())
}

fn uint(slot: &Value, field: &'static str) -> Result<u32, DecodeError> {
    slot.as_uint().ok_or(DecodeError::Mismatch {
        field,
        expected: ValueKind::Uint,
        found: slot.kind(),
    })
}

fn float(slot: &Value, field: &'static str) -> Result<f64, DecodeError> {
    slot.as_float().ok_or(DecodeError::Mismatch {
        field,
        expected: ValueKind::Float,
        found: slot.kind(),
    })
}

fn list<'a>(slot: &'a Value, field: &'static str) -> Result<&'a [Value], DecodeError> {
    slot.as_list().ok_or(DecodeError::Mismatch {
        field,
        expected: ValueKind::List,
        found: slot.kind(),
    })
}
