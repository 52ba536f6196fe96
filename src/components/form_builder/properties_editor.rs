//! Field Properties Editor
//!
//! Right-hand panel of the builder. Edits one field's metadata locally and
//! pushes the updated value into the schema store behind a short debounce,
//! so closing the panel never discards work. System fields render a locked
//! notice instead of controls.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, GEAR, LOCK_SIMPLE, PLUS, TRASH, X};

use crate::bindings::forms::Field;
use crate::components::design_system::{Button, ButtonVariant, Input, TextArea};
use crate::components::form_builder::debounce::{use_debounced_field_push, FIELD_EDIT_DEBOUNCE_MS};
use crate::components::form_builder::palette::FieldTypeIcon;
use crate::services::form_store::FormStore;

// ============================================================================
// Label Cap
// ============================================================================

/// Labels longer than this are cut, never rejected
pub const LABEL_MAX_LEN: usize = 100;

/// Truncate a label to the cap on a character boundary
pub fn clamp_label(raw: &str) -> String {
    raw.chars().take(LABEL_MAX_LEN).collect()
}

/// Blank strings collapse to `None` so they drop out of the saved schema
fn filled(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

// ============================================================================
// Panel Shell
// ============================================================================

/// Properties panel for the currently selected field
///
/// The inner editor is re-created when the selection changes; the field value
/// itself is read untracked so the panel's own pushes do not remount it
/// mid-keystroke.
#[component]
pub fn PropertiesEditor(store: FormStore) -> impl IntoView {
    // Lives at panel scope so a trailing debounce still lands after the
    // inner editor for one field is swapped out for another
    let push = use_debounced_field_push(
        Callback::new(move |updated: Field| store.update_field(updated)),
        FIELD_EDIT_DEBOUNCE_MS,
    );

    view! {
        <aside class="w-80 shrink-0 border-l border-zinc-800 bg-zinc-950 overflow-y-auto">
            {move || {
                let Some(field_id) = store.editor.selected_field.get() else {
                    return view! { <EmptyPanel /> }.into_any();
                };
                match store.editor.field(&field_id) {
                    Some(field) if field.can_edit() => {
                        view! { <FieldPanel store field push /> }.into_any()
                    }
                    Some(field) => view! { <LockedPanel store field /> }.into_any(),
                    None => view! { <EmptyPanel /> }.into_any(),
                }
            }}
        </aside>
    }
}

#[component]
fn EmptyPanel() -> impl IntoView {
    view! {
        <div class="h-full flex flex-col items-center justify-center gap-3 p-8 text-center text-zinc-600">
            <Icon icon=GEAR size="32px" />
            <p class="text-sm text-zinc-500">"Select a field to edit its settings"</p>
        </div>
    }
}

/// Shown for system fields, which never expose edit affordances
#[component]
fn LockedPanel(store: FormStore, field: Field) -> impl IntoView {
    view! {
        <div class="p-4 space-y-4">
            <PanelHeader store label="Field settings" />
            <div class="p-4 rounded-lg bg-zinc-900 border border-zinc-800 space-y-3">
                <div class="flex items-center gap-2 text-zinc-300">
                    <FieldTypeIcon field_type=field.field_type />
                    <span class="font-medium">{field.label.clone()}</span>
                </div>
                <div class="flex items-start gap-2 text-xs text-zinc-500">
                    <span class="text-zinc-400 mt-0.5"><Icon icon=LOCK_SIMPLE size="14px" /></span>
                    <span>
                        "This field is part of every registration form and cannot be edited or removed."
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PanelHeader(store: FormStore, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <h3 class="text-sm font-semibold text-white uppercase tracking-wide">{label}</h3>
            <button
                type="button"
                class="p-1 rounded text-zinc-500 hover:text-white hover:bg-white/10 transition-colors"
                title="Close"
                on:click=move |_| store.editor.selected_field.set(None)
            >
                <Icon icon=X size="16px" />
            </button>
        </div>
    }
}

// ============================================================================
// Field Editor
// ============================================================================

const OPTION_INPUT_CLASS: &str = "flex-1 min-w-0 p-2 rounded bg-zinc-900 text-white text-sm border border-zinc-700 focus:border-purple-500 focus:ring-1 focus:ring-purple-500 outline-none transition-colors";

#[component]
fn FieldPanel(store: FormStore, field: Field, push: Callback<Field>) -> impl IntoView {
    let field_type = field.field_type;

    // Local editing state, seeded once per selection
    let label = RwSignal::new(field.label.clone());
    let placeholder = RwSignal::new(field.placeholder.clone().unwrap_or_default());
    let help_text = RwSignal::new(field.help_text.clone().unwrap_or_default());
    let required = RwSignal::new(field.required);
    let options = RwSignal::new(field.options.clone());

    let field_id = field.id.clone();
    let seed = StoredValue::new(field);

    let build_update = move || {
        let mut updated = seed.get_value();
        updated.label = clamp_label(&label.get_untracked());
        updated.placeholder = filled(placeholder.get_untracked());
        updated.help_text = filled(help_text.get_untracked());
        updated.required = required.get_untracked();
        if field_type.is_choice() {
            updated.options = options.get_untracked();
        }
        updated
    };
    let queue_changes = move || push.run(build_update());

    // Closing or switching selection flushes whatever the debounce still
    // holds; an unchanged field is a no-op in the store
    on_cleanup(move || {
        if seed.try_get_value().is_some() {
            store.update_field(build_update());
        }
    });

    view! {
        <div class="p-4 space-y-5">
            <PanelHeader store label="Field settings" />

            <div class="flex items-center gap-2 text-xs text-zinc-500">
                <FieldTypeIcon field_type />
                <span>{field_type.label()}</span>
            </div>

            // Label
            <div class="space-y-2">
                <label class="block text-sm font-medium text-zinc-300">
                    "Label"
                    <span class="text-red-400 ml-1">"*"</span>
                </label>
                <Input
                    value=label
                    maxlength=LABEL_MAX_LEN
                    on_input=Callback::new(move |_: String| queue_changes())
                />
            </div>

            // Placeholder, text-entry types only
            {field_type.supports_placeholder().then(|| view! {
                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Placeholder"</label>
                    <Input
                        value=placeholder
                        placeholder="Shown while the answer is empty"
                        on_input=Callback::new(move |_: String| queue_changes())
                    />
                </div>
            })}

            // Help text
            <div class="space-y-2">
                <label class="block text-sm font-medium text-zinc-300">"Help text"</label>
                <TextArea
                    value=help_text
                    rows=2
                    placeholder="Extra guidance under the field"
                    on_input=Callback::new(move |_: String| queue_changes())
                />
            </div>

            // Required toggle
            <label class="flex items-center gap-2 cursor-pointer">
                <input
                    type="checkbox"
                    class="w-4 h-4 rounded border-zinc-600 bg-zinc-800 text-purple-600 focus:ring-purple-500 focus:ring-offset-0"
                    prop:checked=move || required.get()
                    on:change=move |evt| {
                        required.set(event_target_checked(&evt));
                        queue_changes();
                    }
                />
                <span class="text-sm text-zinc-300">"Required"</span>
            </label>

            // Options, choice types only
            {field_type.is_choice().then(|| view! {
                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Options"</label>
                    <div class="space-y-2">
                        {move || {
                            options
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, option)| {
                                    view! {
                                        <div class="flex items-center gap-2">
                                            <input
                                                type="text"
                                                class=OPTION_INPUT_CLASS
                                                prop:value=option
                                                on:input=move |evt: ev::Event| {
                                                    // In-place edit without re-rendering the
                                                    // list, so the input keeps focus
                                                    options.update_untracked(|list| {
                                                        if let Some(slot) = list.get_mut(idx) {
                                                            *slot = event_target_value(&evt);
                                                        }
                                                    });
                                                    queue_changes();
                                                }
                                            />
                                            <button
                                                type="button"
                                                class="p-1.5 rounded text-zinc-500 hover:text-red-400 hover:bg-red-500/10 transition-colors"
                                                title="Remove option"
                                                on:click=move |_| {
                                                    options.update(|list| {
                                                        if idx < list.len() {
                                                            list.remove(idx);
                                                        }
                                                    });
                                                    queue_changes();
                                                }
                                            >
                                                <Icon icon=X size="14px" />
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <Button
                        variant=ButtonVariant::Outline
                        class="w-full text-sm"
                        on_click=move |_: ev::MouseEvent| {
                            options.update(|list| {
                                list.push(format!("Option {}", list.len() + 1));
                            });
                            queue_changes();
                        }
                    >
                        <Icon icon=PLUS size="14px" />
                        "Add option"
                    </Button>
                    <p class="text-xs text-zinc-500">
                        "With no options left, the form falls back to a default list."
                    </p>
                </div>
            })}

            // Danger zone
            <div class="pt-4 border-t border-zinc-800">
                <Button
                    variant=ButtonVariant::Danger
                    class="w-full text-sm"
                    on_click=move |_: ev::MouseEvent| {
                        store.remove_field(&field_id);
                    }
                >
                    <Icon icon=TRASH size="14px" />
                    "Delete field"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_label_under_cap_is_unchanged() {
        assert_eq!(clamp_label("Dietary requirements"), "Dietary requirements");
        assert_eq!(clamp_label(""), "");
    }

    #[test]
    fn test_clamp_label_cuts_at_cap() {
        let long = "x".repeat(240);
        let clamped = clamp_label(&long);
        assert_eq!(clamped.chars().count(), LABEL_MAX_LEN);
    }

    #[test]
    fn test_clamp_label_counts_characters_not_bytes() {
        let long: String = "é".repeat(150);
        let clamped = clamp_label(&long);
        assert_eq!(clamped.chars().count(), LABEL_MAX_LEN);
        assert!(clamped.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_filled_drops_blank_strings() {
        assert_eq!(filled(String::new()), None);
        assert_eq!(filled("   ".to_string()), None);
        assert_eq!(filled("ok".to_string()), Some("ok".to_string()));
    }
}
