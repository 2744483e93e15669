//! The refresh controller: reacts to host notifications, rebuilds tooltips.

use crate::host::{EditorActions, ElementRegistry, HoverBinding, OverlayHandle, OverlaySpec, Overlays};
use indexmap::IndexMap;
use tippet_core::model::is_supported;
use tippet_core::{Element, Platform};
use tippet_render::{build_tooltip, tooltip_id};
use tracing::{debug, trace};

/// Overlay kind this module owns in the host overlay system.
pub const OVERLAY_KIND: &str = "tooltip-info";

/// Id of the single editor action this module registers.
pub const ACTION_TOGGLE_TOOLTIPS: &str = "toggleTooltipInfos";

/// Per-element overlay bookkeeping plus the enabled/disabled state machine.
///
/// Refreshes are deferred: a notification only marks the controller dirty,
/// and the host drains the flag on its next tick via [`run_pending`]. Any
/// number of notifications within one tick collapse into a single refresh —
/// the refresh is idempotent and re-derives everything from the registry.
///
/// [`run_pending`]: TooltipController::run_pending
#[derive(Debug)]
pub struct TooltipController {
    enabled: bool,
    pending: bool,
    /// Overlay records by element id; each entry lives exactly one refresh
    /// cycle and is cleared before its element is re-attached.
    records: IndexMap<String, Vec<OverlayHandle>>,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipController {
    /// Starts ENABLED with no refresh pending.
    pub fn new() -> Self {
        Self {
            enabled: true,
            pending: false,
            records: IndexMap::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a deferred refresh is waiting for the next tick.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Registers the toggle action with the host.
    pub fn register_actions(&self, actions: &mut dyn EditorActions) {
        actions.register(ACTION_TOGGLE_TOOLTIPS);
    }

    pub fn on_element_added(&mut self) {
        self.schedule();
    }

    pub fn on_element_changed(&mut self) {
        self.schedule();
    }

    pub fn on_element_removed(&mut self) {
        self.schedule();
    }

    fn schedule(&mut self) {
        if !self.pending {
            trace!("scheduling tooltip refresh");
        }
        self.pending = true;
    }

    /// Runs the refresh scheduled by earlier notifications, if any.
    pub fn run_pending(
        &mut self,
        registry: &dyn ElementRegistry,
        overlays: &mut dyn Overlays,
        hover: &mut dyn HoverBinding,
    ) {
        if !self.pending {
            return;
        }
        self.pending = false;
        self.refresh(registry, overlays, hover);
    }

    /// Enables or disables the feature.
    ///
    /// Disabling removes every overlay of this module's kind immediately, not
    /// deferred, and drops any refresh still pending from before. Enabling
    /// schedules a full deferred refresh.
    pub fn toggle(&mut self, overlays: &mut dyn Overlays, hover: &mut dyn HoverBinding) {
        if self.enabled {
            self.enabled = false;
            self.pending = false;
            debug!("tooltips disabled; removing overlays");
            overlays.remove_kind(OVERLAY_KIND);
            for element_id in self.records.keys() {
                hover.unbind(element_id);
            }
            self.records.clear();
        } else {
            self.enabled = true;
            debug!("tooltips enabled");
            self.schedule();
        }
    }

    /// Full refresh pass: detect the platform once, then rebuild the tooltip
    /// overlay of every supported element from scratch. Records of elements
    /// no longer in the registry are torn down afterwards, so a removal
    /// notification is enough to drop their overlays.
    pub fn refresh(
        &mut self,
        registry: &dyn ElementRegistry,
        overlays: &mut dyn Overlays,
        hover: &mut dyn HoverBinding,
    ) {
        if !self.enabled {
            return;
        }

        let platform = registry
            .root()
            .map(|root| Platform::detect(&root.business_object))
            .unwrap_or_default();
        debug!(?platform, "refreshing tooltips");

        let elements = registry.all();
        for element in &elements {
            if !is_supported(&element.element_type) {
                continue;
            }

            self.clean(&element.id, overlays);
            hover.bind(&element.id, &tooltip_id(&element.id));
            self.attach(element, platform, overlays);
        }

        let stale: Vec<String> = self
            .records
            .keys()
            .filter(|id| !elements.iter().any(|element| &element.id == *id))
            .cloned()
            .collect();
        for element_id in stale {
            trace!(%element_id, "dropping overlays of removed element");
            if let Some(handles) = self.records.shift_remove(&element_id) {
                for handle in handles {
                    overlays.remove(handle);
                }
            }
            hover.unbind(&element_id);
        }
    }

    /// Removes an element's previous overlay records. Correctness of the
    /// bookkeeping relies on always clearing before re-attaching.
    fn clean(&mut self, element_id: &str, overlays: &mut dyn Overlays) {
        if let Some(handles) = self.records.get_mut(element_id) {
            for handle in handles.drain(..) {
                overlays.remove(handle);
            }
        }
    }

    fn attach(&mut self, element: &Element, platform: Platform, overlays: &mut dyn Overlays) {
        let html = build_tooltip(element, platform);
        let handle = overlays.add(&element.id, OVERLAY_KIND, OverlaySpec::tooltip(html));
        self.records
            .entry(element.id.clone())
            .or_default()
            .push(handle);
    }
}
