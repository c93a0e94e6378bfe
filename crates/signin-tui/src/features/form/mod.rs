//! Credential form slice (state/update/render).
//!
//! ## Module Structure
//!
//! - `field.rs`: single-line editing with a grapheme cursor
//! - `state.rs`: focus ring and per-field cursors
//! - `update.rs`: key, paste and click handling bound to the controller
//! - `render.rs`: the form card (title, fields, submit button)

mod field;
mod render;
mod state;
mod update;

pub use field::{FieldCursor, FieldOutcome};
pub use render::{FORM_HEIGHT, FORM_WIDTH, FormLayout, render_form};
pub use state::{FieldId, Focus, FormState};
pub use update::{dismiss, handle_click, handle_key, handle_paste, submit};
