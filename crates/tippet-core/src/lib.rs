#![forbid(unsafe_code)]

//! BPMN element model + tooltip property extraction (headless).
//!
//! Design goals:
//! - the tooltip content for an element is a pure function of
//!   (element type, business object, active execution platform)
//! - absence of a field or extension is the common case, never an error
//! - host objects (bpmn-js / moddle) are mirrored as JSON value trees and
//!   only ever read, never mutated

pub mod extract;
pub mod lookup;
pub mod model;
pub mod platform;
pub mod section;

pub use model::{Element, SequenceFlow, local_type};
pub use platform::{Platform, PlatformSchema, UnknownPlatformError};
pub use section::{Line, LineStyle, LineValue, Section};
