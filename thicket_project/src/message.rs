// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-line log projection.

use alloc::string::String;
use core::fmt::Write as _;

use thicket_event::{CrossSlideFlags, InteractionArgs, InteractionEvent};

/// Render one event as a single log line.
///
/// Total; never fails. The line carries the kind label, the phase flags in
/// fixed enumeration order, the pointer type, and the floored position.
/// Taps append their count. Manipulations append only a compact placeholder
/// — the numeric detail belongs to the variable projection, not the log.
/// Cross-slides append one fragment per set flag.
///
/// Events with an unrecognized kind have an empty kind label, so their line
/// begins with a space but still reports flags, pointer, and position.
pub fn format_event(event: &InteractionEvent) -> String {
    let mut line = String::new();
    line.push_str(event.kind.label());
    let _ = write!(line, " Flag(s): {}", event.flags);
    line.push_str(" using: ");
    line.push_str(event.pointer.label());
    let _ = write!(
        line,
        " X-Position: {} Y-Position: {}",
        event.position.x, event.position.y
    );
    match event.args {
        InteractionArgs::None => {}
        InteractionArgs::Tap { count } => {
            let _ = write!(line, " Count: {count}");
        }
        InteractionArgs::Manipulation(_) => line.push_str(" args omitted"),
        InteractionArgs::CrossSlide { flags } => push_cross_slide(&mut line, flags),
    }
    line
}

/// Append the cross-slide fragments, one per matching test.
///
/// Unlike the variable projection this accumulates: every set flag
/// contributes its fragment, in the order REARRANGE, SELECT, SPEED BUMP,
/// with the historical spacing kept as-is.
fn push_cross_slide(line: &mut String, flags: CrossSlideFlags) {
    if flags.is_empty() {
        line.push_str(" NONE");
    }
    if flags.contains(CrossSlideFlags::REARRANGE) {
        line.push_str(" REARRANGE,");
    }
    if flags.contains(CrossSlideFlags::SELECT) {
        line.push_str(", SELECT");
    }
    if flags.contains(CrossSlideFlags::SPEED_BUMP) {
        line.push_str(", SPEED BUMP");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thicket_event::{
        InteractionFlags, InteractionKind, Manipulation, ManipulationTransform,
        ManipulationVelocity, PixelPosition, PointerType, RailsState,
    };

    fn event(
        kind: InteractionKind,
        flags: InteractionFlags,
        pointer: PointerType,
        args: InteractionArgs,
    ) -> InteractionEvent {
        InteractionEvent {
            kind,
            flags,
            pointer,
            position: PixelPosition::new(100, 50),
            args,
        }
    }

    fn manipulation_args() -> InteractionArgs {
        let transform = ManipulationTransform {
            translation_x: 123.456,
            translation_y: 2.0,
            scale: 3.0,
            expansion: 4.0,
            rotation: 5.0,
        };
        InteractionArgs::Manipulation(Manipulation {
            delta: transform,
            cumulative: transform,
            velocity: ManipulationVelocity {
                x: 1.0,
                y: 2.0,
                expansion: 3.0,
                angular: 4.0,
            },
            rails: RailsState::Free,
        })
    }

    #[test]
    fn tap_line_matches_host_format() {
        let event = event(
            InteractionKind::Tap,
            InteractionFlags::BEGIN,
            PointerType::Mouse,
            InteractionArgs::Tap { count: 3 },
        );
        assert_eq!(
            format_event(&event),
            "TAP Flag(s): BEGIN, using: MOUSE X-Position: 100 Y-Position: 50 Count: 3"
        );
    }

    #[test]
    fn unknown_kind_omits_name_but_reports_the_rest() {
        let event = event(
            InteractionKind::Unknown,
            InteractionFlags::empty(),
            PointerType::Touch,
            InteractionArgs::None,
        );
        assert_eq!(
            format_event(&event),
            " Flag(s): NONE using: TOUCH X-Position: 100 Y-Position: 50"
        );
    }

    #[test]
    fn flags_render_in_fixed_order() {
        let event = event(
            InteractionKind::Hold,
            InteractionFlags::END | InteractionFlags::BEGIN,
            PointerType::Pen,
            InteractionArgs::None,
        );
        assert_eq!(
            format_event(&event),
            "HOLD Flag(s): BEGIN,END, using: PEN X-Position: 100 Y-Position: 50"
        );
    }

    #[test]
    fn manipulation_line_stays_compact() {
        let event = event(
            InteractionKind::Manipulation,
            InteractionFlags::INERTIA,
            PointerType::Touch,
            manipulation_args(),
        );
        let line = format_event(&event);
        assert_eq!(
            line,
            "MANIPULATION Flag(s): INERTIA, using: TOUCH X-Position: 100 Y-Position: 50 args omitted"
        );
        // No numeric detail leaks into the log line.
        assert!(!line.contains("123.456"), "line was: {line}");
    }

    #[test]
    fn cross_slide_fragments_accumulate() {
        let all = CrossSlideFlags::SELECT | CrossSlideFlags::SPEED_BUMP | CrossSlideFlags::REARRANGE;
        let event = event(
            InteractionKind::CrossSlide,
            InteractionFlags::END,
            PointerType::Touch,
            InteractionArgs::CrossSlide { flags: all },
        );
        assert_eq!(
            format_event(&event),
            "CROSS SLIDE Flag(s): END, using: TOUCH X-Position: 100 Y-Position: 50 REARRANGE,, SELECT, SPEED BUMP"
        );
    }

    #[test]
    fn cross_slide_empty_mask_reports_none() {
        let event = event(
            InteractionKind::CrossSlide,
            InteractionFlags::BEGIN,
            PointerType::Touch,
            InteractionArgs::CrossSlide {
                flags: CrossSlideFlags::empty(),
            },
        );
        assert!(format_event(&event).ends_with(" NONE"));
    }
}
