//! Builder Canvas
//!
//! Center column of the builder: the ordered field rows, rendered as the
//! respondent will see them. Accepts palette drops (plan-gated) and splices
//! row order live while an existing row drags across midpoints.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, DOTS_SIX_VERTICAL, SQUARES_FOUR, TRASH};
use wasm_bindgen::JsCast;

use crate::bindings::forms::{Field, FieldType};
use crate::components::design_system::{Badge, BadgeVariant};
use crate::services::entitlements::Entitlements;
use crate::services::form_store::FormStore;
use super::dnd::{reorder_fields, slot_for_pointer, use_drag_state, DragPayload};
use super::field_preview::FieldPreview;
use super::palette::FieldTypeIcon;

/// What a completed drop does
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Insert(Field),
    Blocked(FieldType),
    Move(String),
}

/// The entitlement gate, in one place. A blocked drop adds nothing; the
/// caller surfaces the upgrade prompt.
pub fn resolve_drop(payload: &DragPayload, entitlements: Entitlements) -> DropOutcome {
    match payload {
        DragPayload::New(spec) => {
            if entitlements.allows_field(spec.field_type) {
                DropOutcome::Insert(spec.build())
            } else {
                DropOutcome::Blocked(spec.field_type)
            }
        }
        DragPayload::Existing(id) => DropOutcome::Move(id.clone()),
    }
}

#[component]
pub fn BuilderCanvas(store: FormStore, entitlements: Entitlements) -> impl IntoView {
    let drag = use_drag_state();

    let complete_drop = move |slot: usize| {
        let Some(payload) = drag.payload.get_untracked() else {
            return;
        };
        match resolve_drop(&payload, entitlements) {
            DropOutcome::Insert(field) => {
                let field_id = field.id.clone();
                let mut fields = store.editor.fields.get_untracked();
                let at = slot.min(fields.len());
                fields.insert(at, field);
                store.set_fields(fields);
                store.editor.selected_field.set(Some(field_id));
            }
            DropOutcome::Blocked(field_type) => {
                drag.blocked_type.set(Some(field_type));
            }
            // Row order was already spliced during hover
            DropOutcome::Move(_) => {}
        }
        drag.clear();
    };

    let handle_drop = move |evt: ev::DragEvent| {
        evt.prevent_default();
        let slot = drag
            .hover_slot
            .get_untracked()
            .unwrap_or_else(|| store.editor.fields.get_untracked().len());
        complete_drop(slot);
    };

    view! {
        <div
            class="flex-1 overflow-y-auto p-6"
            on:dragover=move |evt: ev::DragEvent| evt.prevent_default()
            on:drop=handle_drop
        >
            <div class="max-w-xl mx-auto flex flex-col">
                {move || {
                    let fields = store.editor.fields.get();
                    let count = fields.len();
                    if count == 0 {
                        view! { <EmptyCanvas /> }.into_any()
                    } else {
                        view! {
                            <div>
                                {fields
                                    .into_iter()
                                    .enumerate()
                                    .map(|(row_index, field)| view! {
                                        <CanvasRow store row_index field />
                                    })
                                    .collect_view()}
                                {move || {
                                    let adding = matches!(drag.payload.get(), Some(DragPayload::New(_)));
                                    (adding && drag.hover_slot.get() == Some(count))
                                        .then(|| view! { <DropLine /> })
                                }}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn CanvasRow(store: FormStore, row_index: usize, field: Field) -> impl IntoView {
    let drag = use_drag_state();

    let label = field.label.clone();
    let help_text = field.help_text.clone().filter(|t| !t.is_empty());
    let required = field.required;
    let is_system = field.is_system;
    let pro_badge = field.is_pro && !field.is_system;
    let field_type = field.field_type;

    let select_id = field.id.clone();
    let drag_id = field.id.clone();
    let delete_id = field.id.clone();
    let selected_id = field.id.clone();

    let is_selected = Signal::derive(move || {
        store.editor.selected_field.get().as_deref() == Some(selected_id.as_str())
    });

    let handle_dragstart = move |evt: ev::DragEvent| {
        // Firefox refuses to start a drag without data attached
        if let Some(dt) = evt.data_transfer() {
            let _ = dt.set_data("text/plain", &drag_id);
            dt.set_effect_allowed("move");
        }
        drag.begin(DragPayload::Existing(drag_id.clone()));
    };

    let handle_dragover = move |evt: ev::DragEvent| {
        evt.prevent_default();
        let Some(target) = evt.current_target() else {
            return;
        };
        let Ok(el) = target.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let offset_y = evt.client_y() as f64 - rect.top();
        let slot = slot_for_pointer(row_index, offset_y, rect.height());
        drag.hover_slot.set(Some(slot));

        // Splice live once the pointer crosses a midpoint; the no-op slots
        // in reorder_fields keep the order from oscillating at boundaries
        if let Some(dragged) = drag.dragged_field_id() {
            let mut fields = store.editor.fields.get_untracked();
            if reorder_fields(&mut fields, &dragged, slot) {
                store.set_fields(fields);
            }
        }
    };

    view! {
        <div>
            {move || {
                let adding = matches!(drag.payload.get(), Some(DragPayload::New(_)));
                (adding && drag.hover_slot.get() == Some(row_index)).then(|| view! { <DropLine /> })
            }}
            <div
                class=move || format!(
                    "group relative rounded-lg border p-4 mb-3 bg-zinc-900 transition-colors cursor-pointer {}",
                    if is_selected.get() {
                        "border-purple-500 ring-1 ring-purple-500/40"
                    } else {
                        "border-zinc-800 hover:border-zinc-600"
                    }
                )
                draggable="true"
                on:dragstart=handle_dragstart
                on:dragend=move |_| drag.clear()
                on:dragover=handle_dragover
                on:click=move |_| store.editor.selected_field.set(Some(select_id.clone()))
            >
                <div class="flex items-start gap-3">
                    <span class="mt-1 text-zinc-600 cursor-grab active:cursor-grabbing">
                        <Icon icon=DOTS_SIX_VERTICAL size="16px" />
                    </span>
                    <div class="flex-1 min-w-0">
                        <div class="flex items-center gap-2 mb-2">
                            <span class="text-zinc-500">
                                <FieldTypeIcon field_type=field_type size="14px" />
                            </span>
                            <span class="text-sm font-medium text-white truncate">{label}</span>
                            {required.then(|| view! { <span class="text-red-400">"*"</span> })}
                            {is_system.then(|| view! {
                                <Badge>"System"</Badge>
                            })}
                            {pro_badge.then(|| view! {
                                <Badge variant=BadgeVariant::Warning>"Pro"</Badge>
                            })}
                        </div>
                        {help_text.map(|t| view! { <p class="text-xs text-zinc-500 mb-2">{t}</p> })}
                        <FieldPreview field />
                    </div>
                    {(!is_system).then(|| view! {
                        <button
                            class="opacity-0 group-hover:opacity-100 p-1.5 rounded text-zinc-500 hover:text-red-400 hover:bg-red-900/30 transition-all"
                            on:click=move |evt: ev::MouseEvent| {
                                evt.stop_propagation();
                                store.remove_field(&delete_id);
                            }
                            aria-label="Delete field"
                        >
                            <Icon icon=TRASH size="14px" />
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Insertion indicator for palette drops
#[component]
fn DropLine() -> impl IntoView {
    view! {
        <div class="h-0.5 bg-purple-500 rounded-full mb-3"></div>
    }
}

#[component]
fn EmptyCanvas() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3 p-12 rounded-lg border-2 border-dashed border-zinc-800 text-zinc-600">
            <Icon icon=SQUARES_FOUR size="32px" />
            <p class="text-sm">"Drag a field from the palette, or click one to add it"</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form_builder::dnd::NewFieldSpec;

    fn new_payload(field_type: FieldType) -> DragPayload {
        DragPayload::New(NewFieldSpec {
            field_type,
            label: None,
            options: Vec::new(),
        })
    }

    #[test]
    fn test_gated_drop_blocked_without_entitlement() {
        let outcome = resolve_drop(&new_payload(FieldType::Country), Entitlements::free());
        assert_eq!(outcome, DropOutcome::Blocked(FieldType::Country));
    }

    #[test]
    fn test_gated_drop_inserts_with_entitlement() {
        match resolve_drop(&new_payload(FieldType::Country), Entitlements::pro()) {
            DropOutcome::Insert(field) => {
                assert_eq!(field.field_type, FieldType::Country);
                assert!(field.is_pro);
            }
            other => panic!("expected insert, got {:?}", other),
        }
    }

    #[test]
    fn test_free_types_insert_on_free_plan() {
        match resolve_drop(&new_payload(FieldType::Text), Entitlements::free()) {
            DropOutcome::Insert(field) => assert_eq!(field.label, "Short text"),
            other => panic!("expected insert, got {:?}", other),
        }
    }

    #[test]
    fn test_existing_rows_always_move() {
        let payload = DragPayload::Existing("field-1".to_string());
        assert_eq!(
            resolve_drop(&payload, Entitlements::free()),
            DropOutcome::Move("field-1".to_string())
        );
    }
}
