//! Per-element-type property extraction for the two execution platforms.
//!
//! Each section builder is a flat decision table over the business object:
//! every applicable branch group runs, and every branch only emits lines for
//! fields that are actually present. Branch groups the platforms share are
//! written once and parameterized by [`PlatformSchema`]; groups with
//! genuinely different shapes live in [`classic`] and [`cloud`].

mod classic;
mod cloud;
mod events;
mod flows;
mod mappings;
mod multi_instance;

pub use flows::conditional_flows;
pub use multi_instance::multi_instance;

use crate::model::{Element, get, get_display, get_str};
use crate::platform::{Platform, PlatformSchema};
use crate::section::{Section, push_code, push_marker, push_text};
use serde_json::Value;

const EVENT_TYPES: &[&str] = &[
    "bpmn:StartEvent",
    "bpmn:EndEvent",
    "bpmn:IntermediateCatchEvent",
    "bpmn:IntermediateThrowEvent",
    "bpmn:BoundaryEvent",
];

fn is_event_type(element_type: &str) -> bool {
    EVENT_TYPES.contains(&element_type)
}

/// All tooltip sections for an element, in display order. Empty sections are
/// kept in the result; the assembler drops them.
pub fn extract_sections(element: &Element, platform: Platform) -> Vec<Section> {
    let schema = platform.schema();
    let bo = &element.business_object;

    let mut sections = vec![details(element, platform), multi_instance(element, schema)];

    if platform == Platform::Platform {
        sections.push(classic::external_task_configuration(bo));
        sections.push(classic::job_configuration(bo));
    }

    sections.push(conditional_flows(element, platform));

    match platform {
        Platform::Platform => {
            sections.push(mappings::classic_inputs(bo));
            sections.push(mappings::classic_outputs(bo));
        }
        Platform::Cloud => {
            sections.push(mappings::cloud_inputs(bo));
            sections.push(mappings::cloud_outputs(bo));
            sections.push(mappings::cloud_headers(bo));
        }
    }

    sections
}

/// The "Details" section: element-type specific facts (implementation kind,
/// referenced message/decision, event-definition details, ...).
pub fn details(element: &Element, platform: Platform) -> Section {
    let bo = &element.business_object;

    // Some branch groups emit unconditional lines (script type, Cloud
    // implementation kind); without a business object there is nothing to
    // describe at all.
    if bo.is_null() {
        return Section::new("Details");
    }

    let mut lines = Vec::new();
    let ty = get_str(bo, "$type").unwrap_or(element.element_type.as_str());

    match platform {
        Platform::Platform => classic::details(element, ty, &mut lines),
        Platform::Cloud => cloud::details(element, ty, &mut lines),
    }

    if is_event_type(ty) {
        events::evaluate(element, &mut lines);
    }

    Section::with_lines("Details", lines)
}

/// Call activities look the same on both platforms: a BPMN call (by process
/// id) or a CMMN call (by case id), plus an optional business-key extension.
fn call_activity(bo: &Value, schema: &PlatformSchema, lines: &mut Vec<crate::section::Line>) {
    if let Some(called) = get_str(bo, "calledElement") {
        push_text(lines, "CallActivity Type", Some("BPMN"));
        push_text(lines, "Called Element", Some(called));
        push_text(lines, "Binding", get_str(bo, "calledElementBinding"));
        push_text(lines, "Version", get_display(bo, "calledElementVersion"));
        push_text(lines, "Version Tag", get_str(bo, "calledElementVersionTag"));
        push_text(lines, "Tenant Id", get_str(bo, "calledElementTenantId"));

        if let Some(expr) = get_str(bo, "variableMappingDelegateExpression") {
            push_text(lines, "Delegate Variable Mapping", Some("DelegateExpression"));
            push_code(lines, "Delegate Expression", Some(expr));
        }
        if let Some(class) = get_str(bo, "variableMappingClass") {
            push_text(lines, "Delegate Variable Mapping", Some("Class"));
            push_code(lines, "Class", Some(class));
        }
    } else if let Some(case_ref) = get_str(bo, "caseRef") {
        push_text(lines, "CallActivity Type", Some("CMMN"));
        push_text(lines, "Case Ref", Some(case_ref));
        push_text(lines, "Binding", get_str(bo, "caseBinding"));
        push_text(lines, "Version", get_display(bo, "caseVersion"));
        push_text(lines, "Tenant Id", get_str(bo, "caseTenantId"));
    }

    if let Some(discriminator) = schema.business_key {
        if let Some(ext) = crate::lookup::find_extension_of(bo, discriminator) {
            push_marker(lines, "Business Key", true);
            push_code(lines, "Business Key Expression", get_str(ext, "businessKey"));
        }
    }
}

/// Whether `business_object.default` names this flow. Moddle hands the
/// default flow over either as an object reference or as a bare id string.
fn default_flow_id(bo: &Value) -> Option<&str> {
    let default = get(bo, "default")?;
    default.as_str().or_else(|| get_str(default, "id"))
}
