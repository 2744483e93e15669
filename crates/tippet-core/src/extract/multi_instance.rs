//! Multi-instance configuration, cross-cutting over all activity types.

use crate::lookup::find_extension_of;
use crate::model::{Element, body_of, get, get_bool, get_str};
use crate::platform::PlatformSchema;
use crate::section::{Section, push_text};

/// Empty for plain (standard-loop) characteristics: a standard loop has no
/// multi-instance facts worth surfacing.
pub fn multi_instance(element: &Element, schema: &PlatformSchema) -> Section {
    let mut lines = Vec::new();

    if let Some(lc) = get(&element.business_object, "loopCharacteristics") {
        if get_str(lc, "$type") != Some("bpmn:StandardLoopCharacteristics") {
            let mode = if get_bool(lc, "isSequential") {
                "sequential"
            } else {
                "parallel"
            };
            push_text(&mut lines, "Multi Instance", Some(mode));
            push_text(&mut lines, "Loop Cardinality", body_of(lc, "loopCardinality"));

            match schema.loop_extension {
                // Classic: collection and element variable are direct fields.
                None => {
                    push_text(&mut lines, "Collection", get_str(lc, "collection"));
                    push_text(&mut lines, "Element Variable", get_str(lc, "elementVariable"));
                }
                // Cloud: they live in a zeebe:LoopCharacteristics extension,
                // with an optional output side.
                Some(discriminator) => {
                    if let Some(ext) = find_extension_of(lc, discriminator) {
                        push_text(&mut lines, "Collection", get_str(ext, "inputCollection"));
                        push_text(&mut lines, "Element Variable", get_str(ext, "inputElement"));
                        push_text(&mut lines, "Output Collection", get_str(ext, "outputCollection"));
                        push_text(&mut lines, "Output Element", get_str(ext, "outputElement"));
                    }
                }
            }

            push_text(
                &mut lines,
                "Completion Condition",
                body_of(lc, "completionCondition"),
            );

            if let Some(discriminator) = schema.retry_cycle {
                if let Some(ext) = find_extension_of(lc, discriminator) {
                    push_text(&mut lines, "MI Retry Time Cycle", get_str(ext, "body"));
                }
            }
        }
    }

    Section::with_lines("Multi Instance", lines)
}
