// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The variable-namespace projection.
//!
//! Every event projects to one write per slot of [`NAMESPACE`], in namespace
//! order. Slots that do not apply to the event's kind are written empty —
//! the namespace never carries values left over from an earlier event.

use alloc::string::{String, ToString};
use smallvec::SmallVec;

use thicket_event::{CrossSlideFlags, InteractionArgs, InteractionEvent, ManipulationTransform};

/// Variable names of the projection namespace.
pub mod names {
    /// Kind label of the last interaction.
    pub const INTERACTION: &str = "GestureLastInteraction";
    /// Phase flag text of the last interaction.
    pub const INTERACTION_FLAG: &str = "GestureLastInteractionFlag";
    /// Pointer type label of the last interaction.
    pub const POINTER_TYPE: &str = "GestureLastPointerType";
    /// Floored x position of the last interaction.
    pub const X_POSITION: &str = "GestureLastXPosition";
    /// Floored y position of the last interaction.
    pub const Y_POSITION: &str = "GestureLastYPosition";
    /// Tap count of the last tap; empty otherwise.
    pub const TAP_COUNT: &str = "GestureLastTapCount";
    /// Delta translation x of the last manipulation.
    pub const DELTA_TRANSLATION_X: &str = "GestureLastManipulationDeltaTranslationX";
    /// Delta translation y of the last manipulation.
    pub const DELTA_TRANSLATION_Y: &str = "GestureLastManipulationDeltaTranslationY";
    /// Delta scale of the last manipulation.
    pub const DELTA_SCALE: &str = "GestureLastManipulationDeltaScale";
    /// Delta expansion of the last manipulation.
    pub const DELTA_EXPANSION: &str = "GestureLastManipulationDeltaExpansion";
    /// Delta rotation of the last manipulation.
    pub const DELTA_ROTATION: &str = "GestureLastManipulationDeltaRotation";
    /// Cumulative translation x of the last manipulation.
    pub const CUMULATIVE_TRANSLATION_X: &str = "GestureLastManipulationCumulativeTranslationX";
    /// Cumulative translation y of the last manipulation.
    pub const CUMULATIVE_TRANSLATION_Y: &str = "GestureLastManipulationCumulativeTranslationY";
    /// Cumulative scale of the last manipulation.
    pub const CUMULATIVE_SCALE: &str = "GestureLastManipulationCumulativeScale";
    /// Cumulative expansion of the last manipulation.
    pub const CUMULATIVE_EXPANSION: &str = "GestureLastManipulationCumulativeExpansion";
    /// Cumulative rotation of the last manipulation.
    pub const CUMULATIVE_ROTATION: &str = "GestureLastManipulationCumulativeRotation";
    /// Rails state label of the last manipulation.
    pub const RAILS_STATE: &str = "GestureLastManipulationRailsState";
    /// Cross-slide flag text of the last cross-slide.
    pub const CROSS_SLIDE_FLAGS: &str = "GestureLastCrossSlideFlags";
}

/// Number of slots in the variable namespace.
pub const NAMESPACE_SLOTS: usize = 18;

/// Every variable name, in the order [`project_event`] writes them.
pub const NAMESPACE: [&str; NAMESPACE_SLOTS] = [
    names::INTERACTION,
    names::INTERACTION_FLAG,
    names::POINTER_TYPE,
    names::X_POSITION,
    names::Y_POSITION,
    names::TAP_COUNT,
    names::DELTA_TRANSLATION_X,
    names::DELTA_TRANSLATION_Y,
    names::DELTA_SCALE,
    names::DELTA_EXPANSION,
    names::DELTA_ROTATION,
    names::CUMULATIVE_TRANSLATION_X,
    names::CUMULATIVE_TRANSLATION_Y,
    names::CUMULATIVE_SCALE,
    names::CUMULATIVE_EXPANSION,
    names::CUMULATIVE_ROTATION,
    names::RAILS_STATE,
    names::CROSS_SLIDE_FLAGS,
];

/// One variable write of a projection batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableWrite {
    /// Name of the slot, one of [`NAMESPACE`].
    pub name: &'static str,
    /// Rendered value. The empty string clears the slot.
    pub value: String,
}

/// A full-namespace write batch, inline-allocated to the namespace size.
pub type ProjectionBatch = SmallVec<[VariableWrite; NAMESPACE_SLOTS]>;

/// Project one event into a full rewrite of the variable namespace.
///
/// Total; never fails. Returns exactly [`NAMESPACE_SLOTS`] writes in
/// [`NAMESPACE`] order. Float values use shortest round-trip formatting, so
/// a projected manipulation component parses back to the exact input bits.
pub fn project_event(event: &InteractionEvent) -> ProjectionBatch {
    let mut writes = ProjectionBatch::new();
    let mut set = |name: &'static str, value: String| {
        writes.push(VariableWrite { name, value });
    };

    set(names::INTERACTION, event.kind.label().into());
    set(names::INTERACTION_FLAG, event.flags.to_string());
    set(names::POINTER_TYPE, event.pointer.label().into());
    set(names::X_POSITION, event.position.x.to_string());
    set(names::Y_POSITION, event.position.y.to_string());

    let tap_count = match event.args {
        InteractionArgs::Tap { count } => count.to_string(),
        _ => String::new(),
    };
    set(names::TAP_COUNT, tap_count);

    match event.args {
        InteractionArgs::Manipulation(m) => {
            set_transform(&mut set, &m.delta, Transform::Delta);
            set_transform(&mut set, &m.cumulative, Transform::Cumulative);
            set(names::RAILS_STATE, m.rails.label().into());
        }
        _ => {
            set_empty_transform(&mut set, Transform::Delta);
            set_empty_transform(&mut set, Transform::Cumulative);
            set(names::RAILS_STATE, String::new());
        }
    }

    let cross_slide = match event.args {
        InteractionArgs::CrossSlide { flags } => cross_slide_value(flags),
        _ => "",
    };
    set(names::CROSS_SLIDE_FLAGS, cross_slide.into());

    writes
}

enum Transform {
    Delta,
    Cumulative,
}

impl Transform {
    fn slots(&self) -> [&'static str; 5] {
        match self {
            Self::Delta => [
                names::DELTA_TRANSLATION_X,
                names::DELTA_TRANSLATION_Y,
                names::DELTA_SCALE,
                names::DELTA_EXPANSION,
                names::DELTA_ROTATION,
            ],
            Self::Cumulative => [
                names::CUMULATIVE_TRANSLATION_X,
                names::CUMULATIVE_TRANSLATION_Y,
                names::CUMULATIVE_SCALE,
                names::CUMULATIVE_EXPANSION,
                names::CUMULATIVE_ROTATION,
            ],
        }
    }
}

fn set_transform(
    set: &mut impl FnMut(&'static str, String),
    transform: &ManipulationTransform,
    which: Transform,
) {
    let [tx, ty, scale, expansion, rotation] = which.slots();
    set(tx, transform.translation_x.to_string());
    set(ty, transform.translation_y.to_string());
    set(scale, transform.scale.to_string());
    set(expansion, transform.expansion.to_string());
    set(rotation, transform.rotation.to_string());
}

fn set_empty_transform(set: &mut impl FnMut(&'static str, String), which: Transform) {
    for name in which.slots() {
        set(name, String::new());
    }
}

/// Render cross-slide flags for the variable slot.
///
/// Assignment, not accumulation: each matching test replaces the value, so
/// when several flags are set only the last one (in the order REARRANGE,
/// SELECT, SPEED BUMP) is reported. A mask of only-unknown bits renders
/// empty. The historical spacing is kept as-is.
fn cross_slide_value(flags: CrossSlideFlags) -> &'static str {
    let mut value = "";
    if flags.is_empty() {
        value = " NONE";
    }
    if flags.contains(CrossSlideFlags::REARRANGE) {
        value = " REARRANGE,";
    }
    if flags.contains(CrossSlideFlags::SELECT) {
        value = ", SELECT";
    }
    if flags.contains(CrossSlideFlags::SPEED_BUMP) {
        value = ", SPEED BUMP";
    }
    value
}
