#![forbid(unsafe_code)]

//! `tippet` renders hover tooltips with the descriptive properties of BPMN
//! diagram elements, for editors targeting Camunda Platform (classic) or
//! Camunda Cloud (Zeebe).
//!
//! The host editor owns the diagram model, the overlay system and the event
//! loop; this crate owns nothing but the tooltip content and the per-element
//! overlay bookkeeping. Wire it up by implementing the [`host`] traits and
//! forwarding model-change notifications to the [`TooltipController`]:
//!
//! ```no_run
//! use tippet::TooltipController;
//! # use tippet::host::{ElementRegistry, HoverBinding, OverlayHandle, OverlaySpec, Overlays};
//! # struct R;
//! # impl ElementRegistry for R {
//! #     fn all(&self) -> Vec<tippet::Element> { unimplemented!() }
//! #     fn root(&self) -> Option<tippet::Element> { unimplemented!() }
//! # }
//! # struct O;
//! # impl Overlays for O {
//! #     fn add(&mut self, _: &str, _: &str, _: OverlaySpec) -> OverlayHandle { unimplemented!() }
//! #     fn remove(&mut self, _: OverlayHandle) { unimplemented!() }
//! #     fn remove_kind(&mut self, _: &str) { unimplemented!() }
//! # }
//! # struct H;
//! # impl HoverBinding for H {
//! #     fn bind(&mut self, _: &str, _: &str) { unimplemented!() }
//! #     fn unbind(&mut self, _: &str) { unimplemented!() }
//! # }
//! # fn registry() -> impl tippet::host::ElementRegistry { R }
//! # fn overlays() -> impl tippet::host::Overlays { O }
//! # fn hover() -> impl tippet::host::HoverBinding { H }
//!
//! let mut controller = TooltipController::new();
//! let (registry, mut overlays, mut hover) = (registry(), overlays(), hover());
//!
//! // on shape.added / element.changed / shape.removed:
//! controller.on_element_changed();
//!
//! // on the host's next tick:
//! controller.run_pending(&registry, &mut overlays, &mut hover);
//! ```

pub mod controller;
pub mod host;

pub use controller::{ACTION_TOGGLE_TOOLTIPS, OVERLAY_KIND, TooltipController};
pub use host::{
    EditorActions, ElementRegistry, HoverBinding, OverlayHandle, OverlayPosition, OverlaySpec,
    Overlays,
};
pub use tippet_core::{Element, Platform, SequenceFlow};
pub use tippet_render::{build_tooltip, tooltip_id};
