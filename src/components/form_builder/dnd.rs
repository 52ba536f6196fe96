//! Builder Drag State
//!
//! Shared signals for a drag in progress plus the pure index math behind
//! drop-to-add and reorder. The midpoint test keeps row order from
//! oscillating while the pointer hovers near a boundary.

use leptos::prelude::*;

use crate::bindings::forms::{Field, FieldType};

/// Recipe a palette token drops onto the canvas; pre-configured tokens
/// suggest a label and options
#[derive(Clone, Debug, PartialEq)]
pub struct NewFieldSpec {
    pub field_type: FieldType,
    pub label: Option<String>,
    pub options: Vec<String>,
}

impl NewFieldSpec {
    pub fn build(&self) -> Field {
        let mut field = match &self.label {
            Some(label) => Field::with_label(self.field_type, label.clone()),
            None => Field::new(self.field_type),
        };
        if !self.options.is_empty() {
            field.options = self.options.clone();
        }
        field
    }
}

/// What is being dragged over the canvas
#[derive(Clone, Debug, PartialEq)]
pub enum DragPayload {
    /// A palette token that creates a new field on drop
    New(NewFieldSpec),
    /// An existing canvas row being reordered
    Existing(String),
}

/// One drag at a time; provided as context under the builder shell
#[derive(Clone, Copy)]
pub struct DragState {
    pub payload: RwSignal<Option<DragPayload>>,
    /// Insertion slot the payload would land at if dropped now
    pub hover_slot: RwSignal<Option<usize>>,
    /// Pro type whose drop was refused; drives the upgrade prompt
    pub blocked_type: RwSignal<Option<FieldType>>,
}

impl DragState {
    pub fn new() -> Self {
        Self {
            payload: RwSignal::new(None),
            hover_slot: RwSignal::new(None),
            blocked_type: RwSignal::new(None),
        }
    }

    pub fn begin(&self, payload: DragPayload) {
        self.payload.set(Some(payload));
        self.hover_slot.set(None);
    }

    pub fn clear(&self) {
        self.payload.set(None);
        self.hover_slot.set(None);
    }

    pub fn dragged_field_id(&self) -> Option<String> {
        match self.payload.get_untracked() {
            Some(DragPayload::Existing(id)) => Some(id),
            _ => None,
        }
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_drag_state() -> DragState {
    let state = DragState::new();
    provide_context(state);
    state
}

pub fn use_drag_state() -> DragState {
    expect_context::<DragState>()
}

// ============================================================================
// Index math
// ============================================================================

/// Insertion slot for a pointer inside row `row_index`: above the midpoint
/// targets the row's own slot, below it the next one
pub fn slot_for_pointer(row_index: usize, offset_y: f64, row_height: f64) -> usize {
    if row_height > 0.0 && offset_y >= row_height / 2.0 {
        row_index + 1
    } else {
        row_index
    }
}

/// Splice the dragged field into `to_slot` (an insertion slot in the current
/// list), preserving every other field's relative order. Returns false when
/// nothing moved, which covers dropping a row onto its own slot or the slot
/// right after it.
pub fn reorder_fields(fields: &mut Vec<Field>, field_id: &str, to_slot: usize) -> bool {
    let Some(from) = fields.iter().position(|f| f.id == field_id) else {
        return false;
    };
    let mut target = to_slot.min(fields.len());
    // Removing the row shifts later slots up by one
    if target > from {
        target -= 1;
    }
    if target == from {
        return false;
    }
    let field = fields.remove(from);
    fields.insert(target, field);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(labels: &[&str]) -> Vec<Field> {
        labels
            .iter()
            .map(|l| Field::with_label(FieldType::Text, *l))
            .collect()
    }

    fn order(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(|f| f.label.as_str()).collect()
    }

    #[test]
    fn test_pointer_slot_respects_midpoint() {
        assert_eq!(slot_for_pointer(2, 10.0, 40.0), 2);
        assert_eq!(slot_for_pointer(2, 19.9, 40.0), 2);
        assert_eq!(slot_for_pointer(2, 20.0, 40.0), 3);
        assert_eq!(slot_for_pointer(2, 39.0, 40.0), 3);
        // Degenerate row height falls back to "before"
        assert_eq!(slot_for_pointer(0, 5.0, 0.0), 0);
    }

    #[test]
    fn test_reorder_moves_down() {
        let mut fields = labeled(&["a", "b", "c", "d"]);
        let id = fields[0].id.clone();
        assert!(reorder_fields(&mut fields, &id, 3));
        assert_eq!(order(&fields), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_reorder_moves_up() {
        let mut fields = labeled(&["a", "b", "c", "d"]);
        let id = fields[3].id.clone();
        assert!(reorder_fields(&mut fields, &id, 1));
        assert_eq!(order(&fields), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_reorder_to_own_or_next_slot_is_noop() {
        let mut fields = labeled(&["a", "b", "c"]);
        let id = fields[1].id.clone();

        assert!(!reorder_fields(&mut fields, &id, 1));
        assert_eq!(order(&fields), vec!["a", "b", "c"]);

        assert!(!reorder_fields(&mut fields, &id, 2));
        assert_eq!(order(&fields), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reorder_clamps_past_end() {
        let mut fields = labeled(&["a", "b", "c"]);
        let id = fields[0].id.clone();
        assert!(reorder_fields(&mut fields, &id, 99));
        assert_eq!(order(&fields), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_unknown_id_is_noop() {
        let mut fields = labeled(&["a", "b"]);
        assert!(!reorder_fields(&mut fields, "missing", 0));
        assert_eq!(order(&fields), vec!["a", "b"]);
    }

    #[test]
    fn test_every_slot_yields_expected_permutation() {
        // Dragging "b" (index 1) across all slots of a 3-row list
        let expected: [&[&str]; 4] = [
            &["b", "a", "c"],
            &["a", "b", "c"],
            &["a", "b", "c"],
            &["a", "c", "b"],
        ];
        for (slot, want) in expected.iter().enumerate() {
            let mut fields = labeled(&["a", "b", "c"]);
            let id = fields[1].id.clone();
            reorder_fields(&mut fields, &id, slot);
            assert_eq!(&order(&fields), want, "slot {}", slot);
        }
    }

    #[test]
    fn test_spec_builds_preset_fields() {
        let spec = NewFieldSpec {
            field_type: FieldType::Dropdown,
            label: Some("T-shirt size".to_string()),
            options: vec!["S".to_string(), "M".to_string(), "L".to_string()],
        };
        let field = spec.build();
        assert_eq!(field.label, "T-shirt size");
        assert_eq!(field.options, vec!["S", "M", "L"]);

        let plain = NewFieldSpec {
            field_type: FieldType::Dropdown,
            label: None,
            options: Vec::new(),
        };
        let field = plain.build();
        assert_eq!(field.label, "Dropdown");
        assert_eq!(field.options.len(), 3);
        // Fresh ids every build
        assert_ne!(plain.build().id, plain.build().id);
    }
}
