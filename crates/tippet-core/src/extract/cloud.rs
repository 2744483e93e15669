//! Camunda Cloud (Zeebe) branch groups: job-worker and FEEL style
//! implementations, `zeebe:*` extensions.

use crate::lookup::find_extension_of;
use crate::model::{Element, get, get_display, get_str};
use crate::platform::Platform;
use crate::section::{Line, push_code, push_text};
use serde_json::Value;

pub(super) fn details(element: &Element, ty: &str, lines: &mut Vec<Line>) {
    let bo = &element.business_object;

    if matches!(ty, "bpmn:ServiceTask" | "bpmn:SendTask") {
        service_send_task(bo, lines);
    }
    if ty == "bpmn:BusinessRuleTask" {
        business_rule_task(bo, lines);
    }
    if ty == "bpmn:ReceiveTask" {
        receive_task(bo, lines);
    }
    if ty == "bpmn:ScriptTask" {
        script_task(bo, lines);
    }
    if ty == "bpmn:CallActivity" {
        super::call_activity(bo, Platform::Cloud.schema(), lines);
    }
    if ty == "bpmn:UserTask" {
        user_task(bo, lines);
    }
}

/// Service and send tasks are job workers; a modeler template marks the task
/// as connector-backed instead.
fn service_send_task(bo: &Value, lines: &mut Vec<Line>) {
    let implementation = if get(bo, "modelerTemplate").is_some() {
        "Connector"
    } else {
        "External"
    };
    push_text(lines, "Implementation", Some(implementation));

    if let Some(definition) = find_extension_of(bo, "zeebe:TaskDefinition") {
        push_text(lines, "Type", get_str(definition, "type"));
        push_text(lines, "Retries", get_display(definition, "retries"));
    }
}

/// Both the DMN-decision and the job-worker extension emit when both are
/// present; the modeler only ever writes one.
fn business_rule_task(bo: &Value, lines: &mut Vec<Line>) {
    if let Some(decision) = find_extension_of(bo, "zeebe:CalledDecision") {
        push_text(lines, "Implementation", Some("DMN Decision"));
        push_text(lines, "Decision ID", get_str(decision, "decisionId"));
        push_text(lines, "Result Variable", get_str(decision, "resultVariable"));
    }
    if let Some(definition) = find_extension_of(bo, "zeebe:TaskDefinition") {
        push_text(lines, "Implementation", Some("Job Worker"));
        push_text(lines, "Type", get_str(definition, "type"));
        push_text(lines, "Retries", get_display(definition, "retries"));
    }
}

fn receive_task(bo: &Value, lines: &mut Vec<Line>) {
    if let Some(message) = get(bo, "messageRef") {
        push_text(lines, "Message Name", get_str(message, "name"));
        if let Some(subscription) = find_extension_of(message, "zeebe:Subscription") {
            push_text(lines, "Subscription Key", get_str(subscription, "correlationKey"));
        }
    }
}

fn script_task(bo: &Value, lines: &mut Vec<Line>) {
    if let Some(script) = find_extension_of(bo, "zeebe:Script") {
        push_text(lines, "Implementation", Some("FEEL Expression"));
        push_code(lines, "Expression", get_str(script, "expression"));
        push_text(lines, "Result Variable", get_str(script, "resultVariable"));
    } else if let Some(definition) = find_extension_of(bo, "zeebe:TaskDefinition") {
        push_text(lines, "Implementation", Some("Job Worker"));
        push_text(lines, "Type", get_str(definition, "type"));
        push_text(lines, "Retries", get_display(definition, "retries"));
    }
}

/// Assignment and scheduling live in dedicated extensions here, not on the
/// task itself, and there is no priority.
fn user_task(bo: &Value, lines: &mut Vec<Line>) {
    if let Some(assignment) = find_extension_of(bo, "zeebe:AssignmentDefinition") {
        push_text(lines, "Assignee", get_str(assignment, "assignee"));
        push_text(lines, "Candidate Users", get_str(assignment, "candidateUsers"));
        push_text(lines, "Candidate Groups", get_str(assignment, "candidateGroups"));
    }
    if let Some(schedule) = find_extension_of(bo, "zeebe:TaskSchedule") {
        push_text(lines, "Due Date", get_str(schedule, "dueDate"));
        push_text(lines, "Follow Up Date", get_str(schedule, "followUpDate"));
    }
}
