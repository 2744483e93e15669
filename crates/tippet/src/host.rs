//! Contracts for the host editor's collaborators.
//!
//! None of these are reimplemented here; the host supplies an element
//! registry, an overlay system keyed by element id, hover wiring for the
//! rendered shapes, and an action registry.

use tippet_core::Element;

/// Opaque reference to an attached overlay, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayPosition {
    pub top: i32,
    pub left: i32,
}

/// What to attach: position relative to the element, zoom behavior and the
/// HTML fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySpec {
    pub position: OverlayPosition,
    pub scale: bool,
    pub show_max_zoom: f64,
    pub html: String,
}

impl OverlaySpec {
    /// The fixed placement every tooltip overlay uses: just above the
    /// element, unscaled, hidden beyond 2x zoom.
    pub fn tooltip(html: String) -> Self {
        Self {
            position: OverlayPosition { top: -30, left: 0 },
            scale: false,
            show_max_zoom: 2.0,
            html,
        }
    }
}

/// The host's element registry.
pub trait ElementRegistry {
    /// All current diagram elements, including unsupported types.
    fn all(&self) -> Vec<Element>;

    /// The root diagram element, carrying the execution-platform attribute.
    fn root(&self) -> Option<Element>;
}

/// The host's overlay system.
pub trait Overlays {
    fn add(&mut self, element_id: &str, kind: &str, spec: OverlaySpec) -> OverlayHandle;

    fn remove(&mut self, handle: OverlayHandle);

    /// Removes every overlay of the given kind, regardless of element.
    fn remove_kind(&mut self, kind: &str);
}

/// Hover show/hide wiring between an element's rendered node and its tooltip
/// DOM id.
pub trait HoverBinding {
    fn bind(&mut self, element_id: &str, tooltip_id: &str);

    fn unbind(&mut self, element_id: &str);
}

/// The host's editor-action registry.
pub trait EditorActions {
    fn register(&mut self, action: &'static str);
}
