//! Camunda Platform (classic) branch groups: delegate/Java-class style
//! implementations, `camunda:*` extensions.

use crate::lookup::find_extension_of;
use crate::model::{Element, get, get_display, get_str};
use crate::platform::Platform;
use crate::section::{Line, Section, push_code, push_text};
use serde_json::Value;

pub(super) fn details(element: &Element, ty: &str, lines: &mut Vec<Line>) {
    let bo = &element.business_object;

    if matches!(ty, "bpmn:ServiceTask" | "bpmn:SendTask" | "bpmn:BusinessRuleTask") {
        service_send_rule_task(bo, lines);
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
        super::call_activity(bo, Platform::Platform.schema(), lines);
    }
    if ty == "bpmn:UserTask" {
        user_task(bo, lines);
    }
}

/// Implementation kinds are mutually exclusive in valid models, but that is
/// not enforced here: whichever fields are present emit their lines.
fn service_send_rule_task(bo: &Value, lines: &mut Vec<Line>) {
    if let Some(class) = get_str(bo, "class") {
        push_text(lines, "Implementation", Some("Java Class"));
        push_code(lines, "Class", Some(class));
    }

    if let Some(expression) = get_str(bo, "expression") {
        push_text(lines, "Implementation", Some("Expression"));
        push_code(lines, "Expression", Some(expression));
        push_text(lines, "Result Variable", get_str(bo, "resultVariable"));
    }

    if let Some(delegate) = get_str(bo, "delegateExpression") {
        push_text(lines, "Implementation", Some("Delegate Expression"));
        push_code(lines, "Delegate Expression", Some(delegate));
    }

    if get(bo, "type").is_some() {
        push_text(lines, "Implementation", Some("External"));
        push_code(lines, "Topic", get_str(bo, "topic"));
    }

    if find_extension_of(bo, "camunda:Connector").is_some() {
        push_text(lines, "Implementation", Some("Connector"));
    }
}

fn business_rule_task(bo: &Value, lines: &mut Vec<Line>) {
    if let Some(decision_ref) = get_str(bo, "decisionRef") {
        push_text(lines, "Implementation", Some("DMN"));
        push_text(lines, "Decision Ref", Some(decision_ref));
        push_text(lines, "Binding", get_str(bo, "decisionRefBinding"));
        push_text(lines, "Tenant Id", get_str(bo, "decisionRefTenantId"));
        if let Some(result_variable) = get_str(bo, "resultVariable") {
            push_text(lines, "Result Variable", Some(result_variable));
            push_text(lines, "Map Decision Result", get_str(bo, "mapDecisionResult"));
        }
    }
}

fn receive_task(bo: &Value, lines: &mut Vec<Line>) {
    if let Some(message) = get(bo, "messageRef") {
        push_text(lines, "Message Name", get_str(message, "name"));
    }
}

/// Resource-vs-inline is the one mutually exclusive branch pair: a resource
/// path wins over an inline script body.
fn script_task(bo: &Value, lines: &mut Vec<Line>) {
    push_text(lines, "Script Format", get_str(bo, "scriptFormat"));
    if let Some(resource) = get_str(bo, "resource") {
        push_text(lines, "Script Type", Some("External Resource"));
        push_text(lines, "Resource", Some(resource));
    } else {
        push_text(lines, "Script Type", Some("Inline Script"));
        push_code(lines, "Script", get_str(bo, "script"));
    }
    push_text(lines, "Result Variable", get_str(bo, "resultVariable"));
}

fn user_task(bo: &Value, lines: &mut Vec<Line>) {
    push_text(lines, "Assignee", get_str(bo, "assignee"));
    push_text(lines, "Candidate Users", get_str(bo, "candidateUsers"));
    push_text(lines, "Candidate Groups", get_str(bo, "candidateGroups"));
    push_text(lines, "Due Date", get_str(bo, "dueDate"));
    push_text(lines, "Follow Up Date", get_str(bo, "followUpDate"));
    push_text(lines, "Priority", get_display(bo, "priority"));
}

/// External-task priority, a direct attribute on the element.
pub(super) fn external_task_configuration(bo: &Value) -> Section {
    let mut lines = Vec::new();
    push_text(&mut lines, "Task Priority", get_display(bo, "taskPriority"));
    Section::with_lines("External Task Configuration", lines)
}

/// Job priority plus the failed-job retry cycle extension.
pub(super) fn job_configuration(bo: &Value) -> Section {
    let mut lines = Vec::new();
    push_text(&mut lines, "Job Priority", get_display(bo, "jobPriority"));
    if let Some(retry_cycle) = find_extension_of(bo, "camunda:FailedJobRetryTimeCycle") {
        push_text(&mut lines, "Retry Time Cycle", get_str(retry_cycle, "body"));
    }
    Section::with_lines("Job Configuration", lines)
}
