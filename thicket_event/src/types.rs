// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event types: gesture kinds, phase flags, pointer types, and payloads.

use core::fmt;

/// The gesture classification reported in the payload's first slot.
///
/// Codes 0–6 map to the named variants; any other code maps to
/// [`InteractionKind::Unknown`] rather than failing, so that new host codes
/// degrade to a flags/pointer/position-only event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Code 0: the host reported no classification.
    None,
    /// A multi-finger transform gesture (pan/zoom/rotate), code 1.
    Manipulation,
    /// A tap, code 2. Carries a tap count.
    Tap,
    /// A secondary (context) tap, code 3.
    SecondaryTap,
    /// A press-and-hold, code 4.
    Hold,
    /// A drag, code 5.
    Drag,
    /// A cross-slide (swipe across a pannable axis), code 6.
    CrossSlide,
    /// Any code outside the documented table.
    Unknown,
}

impl InteractionKind {
    /// Map a raw interaction identifier code to a kind.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Manipulation,
            2 => Self::Tap,
            3 => Self::SecondaryTap,
            4 => Self::Hold,
            5 => Self::Drag,
            6 => Self::CrossSlide,
            _ => Self::Unknown,
        }
    }

    /// The host-visible name of this kind.
    ///
    /// `None` and `Unknown` have no name; log lines and variable values for
    /// them carry an empty kind token.
    pub fn label(self) -> &'static str {
        match self {
            Self::Manipulation => "MANIPULATION",
            Self::Tap => "TAP",
            Self::SecondaryTap => "SECONDARY TAP",
            Self::Hold => "HOLD",
            Self::Drag => "DRAG",
            Self::CrossSlide => "CROSS SLIDE",
            Self::None | Self::Unknown => "",
        }
    }
}

/// The input device class reported in the payload's third slot.
///
/// Code 0 and unrecognized codes both map to [`PointerType::Unknown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    /// No device class, or a code outside the documented table.
    Unknown,
    /// A generic pointer, code 1.
    Pointer,
    /// A touch contact, code 2.
    Touch,
    /// A pen, code 3.
    Pen,
    /// A mouse, code 4.
    Mouse,
}

impl PointerType {
    /// Map a raw pointer input type code to a device class.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Pointer,
            2 => Self::Touch,
            3 => Self::Pen,
            4 => Self::Mouse,
            _ => Self::Unknown,
        }
    }

    /// The host-visible name of this device class; empty for `Unknown`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pointer => "POINTER",
            Self::Touch => "TOUCH",
            Self::Pen => "PEN",
            Self::Mouse => "MOUSE",
            Self::Unknown => "",
        }
    }
}

/// Whether a manipulation is locked to a single movement axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RailsState {
    /// The host has not yet decided, code 0. Unrecognized codes also land
    /// here.
    Undecided,
    /// Movement is free in all axes, code 1.
    Free,
    /// Movement is constrained to one axis, code 2.
    Railed,
}

impl RailsState {
    /// Map a raw rails-state code.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Free,
            2 => Self::Railed,
            _ => Self::Undecided,
        }
    }

    /// The host-visible name of this state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Undecided => "UNDECIDED",
            Self::Free => "FREE",
            Self::Railed => "RAILED",
        }
    }
}

bitflags::bitflags! {
    /// Phase flags for an interaction: zero or more of begin/end/cancel/inertia.
    ///
    /// An empty mask is the explicit "no phase" state, not absence. Bits
    /// outside the documented four are retained, so a mask carrying only
    /// unknown bits is non-empty — it renders as empty text rather than
    /// `NONE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionFlags: u32 {
        /// The interaction started.
        const BEGIN   = 0x0000_0001;
        /// The interaction ended.
        const END     = 0x0000_0002;
        /// The interaction was canceled.
        const CANCEL  = 0x0000_0004;
        /// The values are inertia-generated after contact lift.
        const INERTIA = 0x0000_0008;
    }
}

impl fmt::Display for InteractionFlags {
    /// Flag names in fixed order (BEGIN, END, CANCEL, INERTIA), each with a
    /// trailing comma; `NONE` for the empty mask.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        if self.contains(Self::BEGIN) {
            f.write_str("BEGIN,")?;
        }
        if self.contains(Self::END) {
            f.write_str("END,")?;
        }
        if self.contains(Self::CANCEL) {
            f.write_str("CANCEL,")?;
        }
        if self.contains(Self::INERTIA) {
            f.write_str("INERTIA,")?;
        }
        Ok(())
    }
}

bitflags::bitflags! {
    /// Behavior flags carried by a cross-slide gesture.
    ///
    /// Unknown bits are retained, as for [`InteractionFlags`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CrossSlideFlags: u32 {
        /// The slide selects the underlying item.
        const SELECT     = 0x0000_0001;
        /// The slide crossed the speed-bump zone.
        const SPEED_BUMP = 0x0000_0002;
        /// The slide entered rearrange mode.
        const REARRANGE  = 0x0000_0004;
    }
}

/// A screen-relative position floored to integer pixel granularity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelPosition {
    /// Horizontal pixel coordinate.
    pub x: i64,
    /// Vertical pixel coordinate.
    pub y: i64,
}

impl PixelPosition {
    /// Create a position from already-floored coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// One transform snapshot of a manipulation: translation, scale, expansion,
/// rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ManipulationTransform {
    /// Translation along x, in pixels.
    pub translation_x: f64,
    /// Translation along y, in pixels.
    pub translation_y: f64,
    /// Scale factor.
    pub scale: f64,
    /// Expansion, in pixels.
    pub expansion: f64,
    /// Rotation, in radians.
    pub rotation: f64,
}

/// Velocity components of a manipulation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ManipulationVelocity {
    /// Velocity along x.
    pub x: f64,
    /// Velocity along y.
    pub y: f64,
    /// Expansion velocity.
    pub expansion: f64,
    /// Angular velocity.
    pub angular: f64,
}

/// The full argument payload of a manipulation gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Manipulation {
    /// Transform since the previous notification.
    pub delta: ManipulationTransform,
    /// Transform accumulated since the gesture began.
    pub cumulative: ManipulationTransform,
    /// Velocity components. These mirror the first four cumulative
    /// components; see [`crate::decode()`].
    pub velocity: ManipulationVelocity,
    /// Axis-rail lock state.
    pub rails: RailsState,
}

/// Kind-specific arguments, present only for the matching
/// [`InteractionKind`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InteractionArgs {
    /// No variant-specific arguments.
    None,
    /// Tap arguments.
    Tap {
        /// Number of taps (1 for single, 2 for double, ...).
        count: u32,
    },
    /// Manipulation arguments.
    Manipulation(Manipulation),
    /// Cross-slide arguments.
    CrossSlide {
        /// Behavior flags of the slide.
        flags: CrossSlideFlags,
    },
}

/// One decoded interaction notification.
///
/// Constructed fresh by [`crate::decode()`] for every raw payload, consumed
/// once by downstream projections, never mutated or cached.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InteractionEvent {
    /// Gesture classification.
    pub kind: InteractionKind,
    /// Phase flags.
    pub flags: InteractionFlags,
    /// Input device class.
    pub pointer: PointerType,
    /// Floored screen-relative position.
    pub position: PixelPosition,
    /// Kind-specific arguments.
    pub args: InteractionArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn kind_code_table_is_exhaustive() {
        assert_eq!(InteractionKind::from_code(0), InteractionKind::None);
        assert_eq!(InteractionKind::from_code(1), InteractionKind::Manipulation);
        assert_eq!(InteractionKind::from_code(2), InteractionKind::Tap);
        assert_eq!(InteractionKind::from_code(3), InteractionKind::SecondaryTap);
        assert_eq!(InteractionKind::from_code(4), InteractionKind::Hold);
        assert_eq!(InteractionKind::from_code(5), InteractionKind::Drag);
        assert_eq!(InteractionKind::from_code(6), InteractionKind::CrossSlide);
        assert_eq!(InteractionKind::from_code(7), InteractionKind::Unknown);
        assert_eq!(InteractionKind::from_code(u32::MAX), InteractionKind::Unknown);
    }

    #[test]
    fn kind_labels_match_host_names() {
        assert_eq!(InteractionKind::SecondaryTap.label(), "SECONDARY TAP");
        assert_eq!(InteractionKind::CrossSlide.label(), "CROSS SLIDE");
        assert_eq!(InteractionKind::None.label(), "");
        assert_eq!(InteractionKind::Unknown.label(), "");
    }

    #[test]
    fn pointer_code_zero_and_unrecognized_are_unknown() {
        assert_eq!(PointerType::from_code(0), PointerType::Unknown);
        assert_eq!(PointerType::from_code(4), PointerType::Mouse);
        assert_eq!(PointerType::from_code(5), PointerType::Unknown);
        assert_eq!(PointerType::Unknown.label(), "");
    }

    #[test]
    fn rails_unrecognized_code_is_undecided() {
        assert_eq!(RailsState::from_code(0), RailsState::Undecided);
        assert_eq!(RailsState::from_code(1), RailsState::Free);
        assert_eq!(RailsState::from_code(2), RailsState::Railed);
        assert_eq!(RailsState::from_code(3), RailsState::Undecided);
    }

    #[test]
    fn flags_display_uses_fixed_order_with_trailing_commas() {
        assert_eq!(InteractionFlags::empty().to_string(), "NONE");
        assert_eq!(InteractionFlags::BEGIN.to_string(), "BEGIN,");
        assert_eq!(
            (InteractionFlags::BEGIN | InteractionFlags::END).to_string(),
            "BEGIN,END,"
        );
        assert_eq!(
            (InteractionFlags::INERTIA | InteractionFlags::CANCEL).to_string(),
            "CANCEL,INERTIA,"
        );
        assert_eq!(InteractionFlags::all().to_string(), "BEGIN,END,CANCEL,INERTIA,");
    }

    #[test]
    fn unknown_flag_bits_are_retained_and_render_empty() {
        let mask = InteractionFlags::from_bits_retain(0x10);
        assert!(!mask.is_empty());
        assert_eq!(mask.to_string(), "");
    }
}
