//! Whole-tooltip assembly.

use crate::html::render_section;
use std::borrow::Cow;
use tippet_core::extract::extract_sections;
use tippet_core::model::{Element, local_type};
use tippet_core::platform::Platform;

const NO_PROPERTIES: &str = "no relevant properties found";

pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    htmlize::escape_text(text)
}

/// DOM id of an element's tooltip node, used by the hover show/hide wiring.
pub fn tooltip_id(element_id: &str) -> String {
    format!("{element_id}_tooltip_info")
}

/// Header fragment: the element's type without its namespace prefix.
pub fn tooltip_header(element: &Element) -> String {
    format!(
        "<div class=\"tooltip-header\"><div class=\"tooltip-container\">{}</div></div>",
        escape(local_type(&element.element_type))
    )
}

/// Builds the complete tooltip fragment for an element.
///
/// Pure given (element, platform): header plus every non-empty section, or a
/// fixed placeholder when no section has anything to show.
pub fn build_tooltip(element: &Element, platform: Platform) -> String {
    let mut body = String::new();
    for section in extract_sections(element, platform) {
        body.push_str(&render_section(&section));
    }

    if body.is_empty() {
        body = format!("<div class=\"tooltip-no-properties\">{NO_PROPERTIES}</div>");
    }

    format!(
        "<div id=\"{id}\" class=\"tooltip\"><div class=\"tooltip-content\">{header}{body}</div></div>",
        id = tooltip_id(&element.id),
        header = tooltip_header(element),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_strips_namespace_prefix() {
        let element = Element::new("Task_1", "bpmn:ServiceTask", json!({}));
        assert_eq!(
            tooltip_header(&element),
            "<div class=\"tooltip-header\"><div class=\"tooltip-container\">ServiceTask</div></div>"
        );
    }

    #[test]
    fn missing_business_object_yields_placeholder() {
        let element = Element::new("Task_1", "bpmn:ManualTask", serde_json::Value::Null);
        let html = build_tooltip(&element, Platform::Platform);

        assert!(html.starts_with("<div id=\"Task_1_tooltip_info\" class=\"tooltip\">"));
        assert!(html.contains("ManualTask"));
        assert!(html.contains("<div class=\"tooltip-no-properties\">no relevant properties found</div>"));
    }

    #[test]
    fn missing_business_object_yields_placeholder_for_unconditional_branches() {
        // These element types emit lines even for an empty business object;
        // a null one must still produce the placeholder, on both platforms.
        let script = Element::new("Script_1", "bpmn:ScriptTask", serde_json::Value::Null);
        let html = build_tooltip(&script, Platform::Platform);
        assert!(html.contains("tooltip-no-properties"));
        assert!(!html.contains("Inline Script"));

        let service = Element::new("Service_1", "bpmn:ServiceTask", serde_json::Value::Null);
        let html = build_tooltip(&service, Platform::Cloud);
        assert!(html.contains("tooltip-no-properties"));
        assert!(!html.contains("Implementation"));
    }

    #[test]
    fn external_service_task_renders_details_section() {
        let element = Element::new(
            "Service_1",
            "bpmn:ServiceTask",
            json!({
                "$type": "bpmn:ServiceTask",
                "type": "external",
                "topic": "order-handling"
            }),
        );
        let html = build_tooltip(&element, Platform::Platform);

        assert!(html.contains("<div class=\"tooltip-subheader\">Details</div>"));
        assert!(html.contains("Implementation"));
        assert!(html.contains("order-handling"));
        assert!(!html.contains("tooltip-no-properties"));
    }

    #[test]
    fn tooltip_is_pure_per_element_and_platform() {
        let element = Element::new(
            "Service_1",
            "bpmn:ServiceTask",
            json!({
                "$type": "bpmn:ServiceTask",
                "expression": "${order.handle()}"
            }),
        );

        let first = build_tooltip(&element, Platform::Platform);
        let second = build_tooltip(&element, Platform::Platform);
        assert_eq!(first, second);
        assert_ne!(first, build_tooltip(&element, Platform::Cloud));
    }
}
