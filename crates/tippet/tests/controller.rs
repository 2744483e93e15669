//! Controller behavior against mock host collaborators.

use serde_json::json;
use tippet::host::{
    EditorActions, ElementRegistry, HoverBinding, OverlayHandle, OverlaySpec, Overlays,
};
use tippet::{ACTION_TOGGLE_TOOLTIPS, Element, OVERLAY_KIND, TooltipController};

#[derive(Default)]
struct MockRegistry {
    root: Option<Element>,
    elements: Vec<Element>,
}

impl ElementRegistry for MockRegistry {
    fn all(&self) -> Vec<Element> {
        self.elements.clone()
    }

    fn root(&self) -> Option<Element> {
        self.root.clone()
    }
}

#[derive(Default)]
struct MockOverlays {
    next_handle: u64,
    /// Currently attached overlays: (handle, element id, kind, spec).
    live: Vec<(OverlayHandle, String, String, OverlaySpec)>,
    removed_kinds: Vec<String>,
}

impl Overlays for MockOverlays {
    fn add(&mut self, element_id: &str, kind: &str, spec: OverlaySpec) -> OverlayHandle {
        self.next_handle += 1;
        let handle = OverlayHandle(self.next_handle);
        self.live
            .push((handle, element_id.to_string(), kind.to_string(), spec));
        handle
    }

    fn remove(&mut self, handle: OverlayHandle) {
        self.live.retain(|(h, ..)| *h != handle);
    }

    fn remove_kind(&mut self, kind: &str) {
        self.live.retain(|(_, _, k, _)| k != kind);
        self.removed_kinds.push(kind.to_string());
    }
}

#[derive(Default)]
struct MockHover {
    bound: Vec<(String, String)>,
    unbound: Vec<String>,
}

impl HoverBinding for MockHover {
    fn bind(&mut self, element_id: &str, tooltip_id: &str) {
        self.bound
            .push((element_id.to_string(), tooltip_id.to_string()));
    }

    fn unbind(&mut self, element_id: &str) {
        self.unbound.push(element_id.to_string());
    }
}

#[derive(Default)]
struct MockActions {
    registered: Vec<&'static str>,
}

impl EditorActions for MockActions {
    fn register(&mut self, action: &'static str) {
        self.registered.push(action);
    }
}

fn classic_root() -> Element {
    Element::new(
        "Process_1",
        "bpmn:Process",
        json!({ "modeler:executionPlatform": "Camunda Platform" }),
    )
}

fn cloud_root() -> Element {
    Element::new(
        "Process_1",
        "bpmn:Process",
        json!({ "modeler:executionPlatform": "Camunda Cloud" }),
    )
}

fn service_task() -> Element {
    Element::new(
        "ServiceTask_1",
        "bpmn:ServiceTask",
        json!({ "$type": "bpmn:ServiceTask", "class": "com.acme.Worker" }),
    )
}

#[test]
fn registers_the_toggle_action() {
    let controller = TooltipController::new();
    let mut actions = MockActions::default();

    controller.register_actions(&mut actions);

    assert_eq!(actions.registered, vec![ACTION_TOGGLE_TOOLTIPS]);
}

#[test]
fn notifications_coalesce_into_a_single_refresh() {
    let mut controller = TooltipController::new();
    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: vec![service_task()],
    };
    let mut overlays = MockOverlays::default();
    let mut hover = MockHover::default();

    assert!(!controller.pending());
    controller.on_element_added();
    controller.on_element_changed();
    controller.on_element_removed();
    assert!(controller.pending());

    // Nothing happened yet: the refresh waits for the tick.
    assert!(overlays.live.is_empty());

    controller.run_pending(&registry, &mut overlays, &mut hover);
    assert!(!controller.pending());
    assert_eq!(overlays.live.len(), 1);
    assert_eq!(hover.bound.len(), 1);

    // The flag was drained; another tick is a no-op.
    controller.run_pending(&registry, &mut overlays, &mut hover);
    assert_eq!(overlays.live.len(), 1);
    assert_eq!(hover.bound.len(), 1);
}

#[test]
fn refresh_attaches_tooltip_overlays_for_supported_elements() {
    let mut controller = TooltipController::new();
    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: vec![
            service_task(),
            Element::new("Flow_1", "bpmn:SequenceFlow", json!({})),
            Element::new("Label_1", "bpmn:Label", json!({})),
        ],
    };
    let mut overlays = MockOverlays::default();
    let mut hover = MockHover::default();

    controller.refresh(&registry, &mut overlays, &mut hover);

    let [(_, element_id, kind, spec)] = overlays.live.as_slice() else {
        panic!("expected exactly one overlay, got {}", overlays.live.len());
    };
    assert_eq!(element_id, "ServiceTask_1");
    assert_eq!(kind, OVERLAY_KIND);
    assert_eq!(spec.position.top, -30);
    assert_eq!(spec.position.left, 0);
    assert!(!spec.scale);
    assert_eq!(spec.show_max_zoom, 2.0);
    assert!(spec.html.contains(r#"id="ServiceTask_1_tooltip_info""#));

    assert_eq!(
        hover.bound,
        vec![(
            "ServiceTask_1".to_string(),
            "ServiceTask_1_tooltip_info".to_string()
        )]
    );
}

#[test]
fn repeated_refreshes_replace_stale_overlays() {
    let mut controller = TooltipController::new();
    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: vec![service_task()],
    };
    let mut overlays = MockOverlays::default();
    let mut hover = MockHover::default();

    controller.refresh(&registry, &mut overlays, &mut hover);
    let first_handle = overlays.live[0].0;

    controller.refresh(&registry, &mut overlays, &mut hover);
    assert_eq!(overlays.live.len(), 1);
    assert_ne!(overlays.live[0].0, first_handle);
}

#[test]
fn toggle_off_removes_overlays_immediately_and_ignores_pending_work() {
    let mut controller = TooltipController::new();
    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: vec![service_task()],
    };
    let mut overlays = MockOverlays::default();
    let mut hover = MockHover::default();

    controller.refresh(&registry, &mut overlays, &mut hover);
    assert_eq!(overlays.live.len(), 1);

    controller.on_element_changed();
    controller.toggle(&mut overlays, &mut hover);
    assert!(!controller.is_enabled());
    assert!(!controller.pending());
    assert!(overlays.live.is_empty());
    assert_eq!(overlays.removed_kinds, vec![OVERLAY_KIND.to_string()]);
    assert_eq!(hover.unbound, vec!["ServiceTask_1".to_string()]);

    // The refresh scheduled before the toggle must not resurrect anything.
    controller.run_pending(&registry, &mut overlays, &mut hover);
    assert!(overlays.live.is_empty());
}

#[test]
fn removed_elements_lose_their_overlays_on_the_next_refresh() {
    let mut controller = TooltipController::new();
    let mut overlays = MockOverlays::default();
    let mut hover = MockHover::default();

    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: vec![
            service_task(),
            Element::new("UserTask_1", "bpmn:UserTask", json!({})),
        ],
    };
    controller.refresh(&registry, &mut overlays, &mut hover);
    assert_eq!(overlays.live.len(), 2);

    // The service task is deleted from the diagram.
    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: vec![Element::new("UserTask_1", "bpmn:UserTask", json!({}))],
    };
    controller.on_element_removed();
    controller.run_pending(&registry, &mut overlays, &mut hover);

    assert_eq!(overlays.live.len(), 1);
    assert_eq!(overlays.live[0].1, "UserTask_1");
    assert_eq!(hover.unbound, vec!["ServiceTask_1".to_string()]);

    // Emptying the registry drops the rest.
    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: Vec::new(),
    };
    controller.on_element_removed();
    controller.run_pending(&registry, &mut overlays, &mut hover);
    assert!(overlays.live.is_empty());
}

#[test]
fn toggle_back_on_schedules_a_deferred_refresh() {
    let mut controller = TooltipController::new();
    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: vec![service_task()],
    };
    let mut overlays = MockOverlays::default();
    let mut hover = MockHover::default();

    controller.toggle(&mut overlays, &mut hover);
    controller.toggle(&mut overlays, &mut hover);
    assert!(controller.is_enabled());
    assert!(controller.pending());
    assert!(overlays.live.is_empty());

    controller.run_pending(&registry, &mut overlays, &mut hover);
    assert_eq!(overlays.live.len(), 1);
}

#[test]
fn platform_flows_from_the_root_element_into_the_tooltips() {
    let mut controller = TooltipController::new();
    let mut overlays = MockOverlays::default();
    let mut hover = MockHover::default();

    // Classic resolves `class` as a Java-class implementation.
    let registry = MockRegistry {
        root: Some(classic_root()),
        elements: vec![service_task()],
    };
    controller.refresh(&registry, &mut overlays, &mut hover);
    assert!(overlays.live[0].3.html.contains("Java Class"));

    // The same diagram under a Cloud root ignores that field.
    let registry = MockRegistry {
        root: Some(cloud_root()),
        elements: vec![service_task()],
    };
    controller.refresh(&registry, &mut overlays, &mut hover);
    assert!(!overlays.live[0].3.html.contains("Java Class"));
}

#[test]
fn missing_root_falls_back_to_the_classic_platform() {
    let mut controller = TooltipController::new();
    let registry = MockRegistry {
        root: None,
        elements: vec![service_task()],
    };
    let mut overlays = MockOverlays::default();
    let mut hover = MockHover::default();

    controller.refresh(&registry, &mut overlays, &mut hover);
    assert!(overlays.live[0].3.html.contains("Java Class"));
}
