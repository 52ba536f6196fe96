//! Form Builder Components
//!
//! Drag-and-drop authoring surface for event forms.
//!
//! # Components
//! - `BuilderShell` - Routed page tying palette, canvas and properties together
//! - `FieldPalette` - Grouped field-type tokens, draggable or click-to-append
//! - `BuilderCanvas` - Live field list with hover-midpoint reordering
//! - `FieldPreview` - Disabled per-type widget previews
//! - `PropertiesEditor` - Side panel editing one field behind a debounce
//! - Drag state and debounce plumbing shared by the above

pub mod builder_shell;
pub mod canvas;
pub mod debounce;
pub mod dnd;
pub mod field_preview;
pub mod palette;
pub mod properties_editor;

// Re-exports - Core components
pub use builder_shell::BuilderShell;
pub use canvas::{resolve_drop, BuilderCanvas, DropOutcome};
pub use debounce::{use_debounced_field_push, SaveStatusChip, FIELD_EDIT_DEBOUNCE_MS};
pub use dnd::{
    provide_drag_state, reorder_fields, slot_for_pointer, use_drag_state, DragPayload, DragState,
    NewFieldSpec,
};
pub use field_preview::{FieldPreview, COUNTRIES};
pub use palette::{FieldPalette, FieldTypeIcon, PaletteGroup};
pub use properties_editor::{clamp_label, PropertiesEditor, LABEL_MAX_LEN};
