//! Conditional outgoing sequence flows.

use crate::model::{Element, get, get_str};
use crate::platform::Platform;
use crate::section::{Section, push_code, push_text};

const NA: &str = "n/a";

/// Gateway types whose outgoing flows carry conditions on Cloud.
const CLOUD_CONDITIONAL_GATEWAYS: &[&str] = &[
    "bpmn:ExclusiveGateway",
    "bpmn:InclusiveGateway",
    "bpmn:EventBasedGateway",
];

/// One line per outgoing flow, in the host's flow order. The declared default
/// flow always renders as "default", even when it also carries a condition.
///
/// The two platforms gate this section differently, and both policies are
/// intentional: classic skips single-outgoing elements, Cloud renders only
/// for its conditional gateway types.
pub fn conditional_flows(element: &Element, platform: Platform) -> Section {
    let mut section = Section::new("Conditional Sequence-Flows");

    let applies = match platform {
        Platform::Platform => element.outgoing.len() > 1,
        Platform::Cloud => CLOUD_CONDITIONAL_GATEWAYS.contains(&element.element_type.as_str()),
    };
    if !applies {
        return section;
    }

    let with_language = platform.schema().condition_language;
    let default_id = super::default_flow_id(&element.business_object);

    for flow in &element.outgoing {
        let fbo = &flow.business_object;
        let key = get_str(fbo, "name").unwrap_or(NA);

        if Some(flow.id.as_str()) == default_id {
            push_text(&mut section.lines, key, Some("default"));
            continue;
        }

        let Some(condition) = get(fbo, "conditionExpression") else {
            push_text(&mut section.lines, key, Some(NA));
            continue;
        };

        let body = get_str(condition, "body").filter(|b| !b.is_empty());
        let language = if with_language {
            get_str(condition, "language")
                .map(str::trim)
                .filter(|l| !l.is_empty())
        } else {
            None
        };

        match language {
            Some(language) => {
                let mut value = format!("Script Format: {language}\n");
                value.push_str(body.unwrap_or(NA));
                push_code(&mut section.lines, key, Some(value));
            }
            None => push_code(&mut section.lines, key, Some(body.unwrap_or(NA))),
        }
    }

    section
}
