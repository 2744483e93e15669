//! Read-only mirrors of the host editor's diagram objects.
//!
//! The host hands elements over as moddle-style JSON: a shape with an `id`, a
//! namespaced `type` tag and a `businessObject` value tree whose nested
//! objects carry `$type` discriminators. We keep the business object as a raw
//! [`serde_json::Value`] — the set of fields varies per element type and per
//! execution platform, and the extractors only ever probe for presence.

use serde::Deserialize;
use serde_json::Value;

/// A diagram element as reported by the host's element registry.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub id: String,
    /// Namespaced type tag, e.g. `"bpmn:ServiceTask"`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// The underlying process-definition node. `Value::Null` when the host
    /// has no business object attached.
    #[serde(rename = "businessObject", default)]
    pub business_object: Value,
    /// Outgoing sequence-flow connections, in the host's order.
    #[serde(default)]
    pub outgoing: Vec<SequenceFlow>,
}

/// An outgoing sequence-flow connection of an element.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceFlow {
    pub id: String,
    #[serde(rename = "businessObject", default)]
    pub business_object: Value,
}

impl Element {
    pub fn new(
        id: impl Into<String>,
        element_type: impl Into<String>,
        business_object: Value,
    ) -> Self {
        Self {
            id: id.into(),
            element_type: element_type.into(),
            business_object,
            outgoing: Vec::new(),
        }
    }

    pub fn with_outgoing(mut self, outgoing: Vec<SequenceFlow>) -> Self {
        self.outgoing = outgoing;
        self
    }
}

impl SequenceFlow {
    pub fn new(id: impl Into<String>, business_object: Value) -> Self {
        Self {
            id: id.into(),
            business_object,
        }
    }
}

/// Strips the namespace prefix from a type tag (`"bpmn:ServiceTask"` ->
/// `"ServiceTask"`).
pub fn local_type(tag: &str) -> &str {
    tag.split_once(':').map_or(tag, |(_, local)| local)
}

/// Element types the tooltip plugin attaches overlays to.
pub const SUPPORTED_TYPES: &[&str] = &[
    "bpmn:CallActivity",
    "bpmn:BusinessRuleTask",
    "bpmn:ComplexGateway",
    "bpmn:EventBasedGateway",
    "bpmn:ExclusiveGateway",
    "bpmn:ParallelGateway",
    "bpmn:InclusiveGateway",
    "bpmn:ManualTask",
    "bpmn:ReceiveTask",
    "bpmn:ScriptTask",
    "bpmn:SendTask",
    "bpmn:ServiceTask",
    "bpmn:SubProcess",
    "bpmn:Task",
    "bpmn:UserTask",
    "bpmn:StartEvent",
    "bpmn:EndEvent",
    "bpmn:IntermediateCatchEvent",
    "bpmn:IntermediateThrowEvent",
    "bpmn:BoundaryEvent",
];

pub fn is_supported(element_type: &str) -> bool {
    SUPPORTED_TYPES.contains(&element_type)
}

/// Returns the value under `key` unless it is absent or `null`.
pub fn get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

pub fn get_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    get(value, key)?.as_str()
}

pub fn get_bool(value: &Value, key: &str) -> bool {
    get(value, key).and_then(Value::as_bool).unwrap_or(false)
}

/// Renders a scalar field for display. Numbers show up in several host models
/// where the XML carries strings (`retries`, `priority`), so both are
/// accepted.
pub fn get_display(value: &Value, key: &str) -> Option<String> {
    match get(value, key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Unwraps a `{ "body": ... }` expression wrapper under `key`.
pub fn body_of<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    get_str(get(value, key)?, "body")
}
