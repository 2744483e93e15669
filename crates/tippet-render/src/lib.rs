#![forbid(unsafe_code)]

//! HTML tooltip assembler for BPMN element properties.
//!
//! Turns the typed section model produced by `tippet-core` into the hover
//! overlay fragment the host editor attaches next to an element. The emitted
//! structure and CSS class names are a compatibility surface:
//!
//! ```text
//! <div id="{id}_tooltip_info" class="tooltip">
//!   <div class="tooltip-content">
//!     <div class="tooltip-header">...</div>
//!     <div class="tooltip-container">
//!       <div class="tooltip-subheader">...</div>
//!       <div class="tooltip-line">...</div>
//!     </div>
//!   </div>
//! </div>
//! ```

pub mod html;
pub mod tooltip;

pub use html::{render_line, render_section};
pub use tooltip::{build_tooltip, tooltip_header, tooltip_id};
