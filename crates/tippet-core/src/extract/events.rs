//! Event-definition details, shared by both platforms.
//!
//! Up to nine independent groups are probed; all applicable groups run, in a
//! fixed order. As with tasks, a group only emits lines for the fields its
//! definition actually carries.

use crate::lookup::{extension_values, find_event_definition, find_extension};
use crate::model::{Element, get, get_bool, get_str};
use crate::section::{Line, push_code, push_marker, push_text};
use serde_json::Value;

pub(super) fn evaluate(element: &Element, lines: &mut Vec<Line>) {
    let bo = &element.business_object;

    if let Some(def) = find_event_definition(bo, "bpmn:MessageEventDefinition") {
        message(def, lines);
    }

    if let Some(def) = find_event_definition(bo, "bpmn:LinkEventDefinition") {
        push_text(lines, "Name", get_str(def, "name"));
    }

    if let Some(def) = find_event_definition(bo, "bpmn:EscalationEventDefinition") {
        escalation(def, lines);
    }

    if let Some(def) = find_event_definition(bo, "bpmn:ErrorEventDefinition") {
        error(def, lines);
    }

    if let Some(def) = find_event_definition(bo, "bpmn:CompensateEventDefinition") {
        // Boundary compensate handlers do not surface completion-wait
        // semantics; the whole group is suppressed there.
        if element.element_type != "bpmn:BoundaryEvent" {
            compensate(def, lines);
        }
    }

    if let Some(def) = find_event_definition(bo, "bpmn:SignalEventDefinition") {
        if let Some(signal) = get(def, "signalRef") {
            push_text(lines, "Signal Name", get_str(signal, "name"));
        }
    }

    if let Some(def) = find_event_definition(bo, "bpmn:TimerEventDefinition") {
        timer(def, lines);
    }

    if let Some(def) = find_event_definition(bo, "bpmn:ConditionalEventDefinition") {
        conditional(def, lines);
    }

    push_text(lines, "Initiator", get_str(bo, "initiator"));
}

/// Message events carry the same implementation kinds as service tasks
/// (classic models only; the fields are simply absent elsewhere), plus the
/// referenced message.
fn message(def: &Value, lines: &mut Vec<Line>) {
    if let Some(class) = get_str(def, "class") {
        push_text(lines, "Implementation", Some("Java Class"));
        push_code(lines, "Class", Some(class));
    }

    if let Some(expression) = get_str(def, "expression") {
        push_text(lines, "Implementation", Some("Expression"));
        push_code(lines, "Expression", Some(expression));
        push_text(lines, "Result Variable", get_str(def, "resultVariable"));
    }

    if let Some(delegate) = get_str(def, "delegateExpression") {
        push_text(lines, "Implementation", Some("Delegate Expression"));
        push_code(lines, "Delegate Expression", Some(delegate));
    }

    if get(def, "type").is_some() {
        push_text(lines, "Implementation", Some("External"));
        push_code(lines, "Topic", get_str(def, "topic"));
    }

    let connector = extension_values(def)
        .and_then(|values| find_extension(values, "camunda:Connector"));
    if connector.is_some() {
        push_text(lines, "Implementation", Some("Connector"));
    }

    if let Some(message) = get(def, "messageRef") {
        push_text(lines, "Message Name", get_str(message, "name"));
    }
}

fn escalation(def: &Value, lines: &mut Vec<Line>) {
    if let Some(escalation) = get(def, "escalationRef") {
        push_text(lines, "Escalation Name", get_str(escalation, "name"));
        push_text(lines, "Escalation Code", get_str(escalation, "escalationCode"));
        push_text(lines, "Escalation Code Variable", get_str(def, "escalationCodeVariable"));
    }
}

fn error(def: &Value, lines: &mut Vec<Line>) {
    if let Some(error) = get(def, "errorRef") {
        push_text(lines, "Error Name", get_str(error, "name"));
        push_text(lines, "Error Code", get_str(error, "errorCode"));
        push_text(lines, "Error Message", get_str(error, "errorMessage"));
        push_text(lines, "Error Code Variable", get_str(def, "errorCodeVariable"));
        push_text(lines, "Error Message Variable", get_str(def, "errorMessageVariable"));
    }
}

fn compensate(def: &Value, lines: &mut Vec<Line>) {
    push_marker(lines, "Wait for Completion", get_bool(def, "waitForCompletion"));
    if let Some(activity) = get(def, "activityRef") {
        push_text(lines, "Activity Ref", get_str(activity, "id"));
    }
}

/// Date, duration and cycle are not mutually exclusive in the model; each
/// present field emits its pair of lines, even though only one is meaningful.
fn timer(def: &Value, lines: &mut Vec<Line>) {
    for (label, key) in [
        ("Date", "timeDate"),
        ("Duration", "timeDuration"),
        ("Cycle", "timeCycle"),
    ] {
        if let Some(timer) = get(def, key) {
            push_text(lines, "Timer", Some(label));
            push_text(lines, "Timer Definition", get_str(timer, "body"));
        }
    }
}

fn conditional(def: &Value, lines: &mut Vec<Line>) {
    push_text(lines, "Variable Name", get_str(def, "variableName"));
    push_text(lines, "Variable Event", get_str(def, "variableEvent"));

    let Some(condition) = get(def, "condition") else {
        return;
    };

    if let Some(language) = get_str(condition, "language") {
        push_text(lines, "Condition Type", Some("Script"));
        push_text(lines, "Script Format", Some(language));
        if let Some(resource) = get_str(condition, "resource") {
            push_text(lines, "Script Type", Some("External Resource"));
            push_text(lines, "Resource", Some(resource));
        } else {
            push_text(lines, "Script Type", Some("Inline Script"));
            push_code(lines, "Script", get_str(condition, "body"));
        }
    } else {
        push_text(lines, "Condition Type", Some("Expression"));
        push_code(lines, "Expression", get_str(condition, "body"));
    }
}
