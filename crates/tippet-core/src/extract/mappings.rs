//! Input/output parameter mappings and task headers.

use crate::lookup::find_extension_of;
use crate::model::{get, get_display, get_str};
use crate::section::{Section, push_code, push_code_or};
use serde_json::Value;

pub(super) fn classic_inputs(bo: &Value) -> Section {
    classic_parameters(bo, "inputParameters", "Inputs")
}

pub(super) fn classic_outputs(bo: &Value) -> Section {
    classic_parameters(bo, "outputParameters", "Outputs")
}

/// `camunda:InputOutput` parameters. Plain string/expression parameters show
/// their value; complex definitions (list, map, script) show a type label
/// instead.
fn classic_parameters(bo: &Value, list_key: &str, header: &'static str) -> Section {
    let mut lines = Vec::new();

    if let Some(io) = find_extension_of(bo, "camunda:InputOutput") {
        for param in parameters(io, list_key) {
            let Some(name) = get_str(param, "name") else {
                continue;
            };
            match get(param, "definition") {
                None => push_code_or(&mut lines, name, get_display(param, "value"), ""),
                Some(definition) => {
                    let kind = match get_str(definition, "$type") {
                        Some("camunda:List") => "List",
                        Some("camunda:Map") => "Map",
                        Some("camunda:Script") => "Script",
                        _ => "unknown Type",
                    };
                    push_code(&mut lines, name, Some(format!("Type: {kind}")));
                }
            }
        }
    }

    Section::with_lines(header, lines)
}

pub(super) fn cloud_inputs(bo: &Value) -> Section {
    cloud_io(bo, "inputs", "Inputs")
}

pub(super) fn cloud_outputs(bo: &Value) -> Section {
    cloud_io(bo, "outputs", "Outputs")
}

/// `zeebe:IoMapping` parameters: each line is keyed by the mapping target and
/// shows the source expression.
fn cloud_io(bo: &Value, list_key: &str, header: &'static str) -> Section {
    let mut lines = Vec::new();

    if let Some(io) = find_extension_of(bo, "zeebe:IoMapping") {
        for param in parameters(io, list_key) {
            let Some(target) = get_str(param, "target") else {
                continue;
            };
            push_code_or(&mut lines, target, get_str(param, "source"), "");
        }
    }

    Section::with_lines(header, lines)
}

/// `zeebe:TaskHeaders` key/value entries.
pub(super) fn cloud_headers(bo: &Value) -> Section {
    let mut lines = Vec::new();

    if let Some(headers) = find_extension_of(bo, "zeebe:TaskHeaders") {
        for entry in parameters(headers, "values") {
            let Some(key) = get_str(entry, "key") else {
                continue;
            };
            push_code_or(&mut lines, key, get_display(entry, "value"), "");
        }
    }

    Section::with_lines("Headers", lines)
}

fn parameters<'a>(container: &'a Value, list_key: &str) -> impl Iterator<Item = &'a Value> {
    get(container, list_key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
        .iter()
}
