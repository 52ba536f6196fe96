//! Form Builder Shell
//!
//! The authoring surface for one form: field palette on the left, canvas in
//! the middle, properties panel on the right, with inline title editing and
//! the save-status chip in the header. Binds the schema store to the routed
//! form on mount and flushes pending edits when the author leaves.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use phosphor_leptos::{Icon, IconWeight, ARROW_LEFT, CROWN};

use crate::bindings::viewer::get_viewer_profile;
use crate::components::design_system::{Button, ButtonVariant, LoadingSpinner, Modal};
use crate::components::form_builder::canvas::{resolve_drop, BuilderCanvas, DropOutcome};
use crate::components::form_builder::debounce::SaveStatusChip;
use crate::components::form_builder::dnd::{provide_drag_state, use_drag_state, DragPayload};
use crate::components::form_builder::palette::FieldPalette;
use crate::components::form_builder::properties_editor::PropertiesEditor;
use crate::services::entitlements::Entitlements;
use crate::services::form_store::{use_form_store, FormStore};

/// Route params for the builder page
#[derive(Params, PartialEq, Clone, Default)]
pub struct BuilderParams {
    pub event_id: Option<String>,
    pub form_id: Option<String>,
}

/// Form builder page, routed as `/event/:event_id/forms/:form_id`
#[component]
pub fn BuilderShell() -> impl IntoView {
    let params = use_params::<BuilderParams>();
    let event_id = Memo::new(move |_| {
        params.get().ok().and_then(|p| p.event_id).unwrap_or_default()
    });
    let form_id = Memo::new(move |_| {
        params.get().ok().and_then(|p| p.form_id).unwrap_or_default()
    });

    let store = use_form_store();
    provide_drag_state();

    let entitlements = RwSignal::new(Entitlements::free());
    let is_loading = RwSignal::new(true);
    let load_error = RwSignal::new(Option::<String>::None);

    // Bind the store to the routed form. The form list is fetched first so a
    // deep link straight into the builder works too.
    Effect::new(move |_| {
        let eid = event_id.get();
        let fid = form_id.get();
        if eid.is_empty() || fid.is_empty() {
            return;
        }

        let bound = store.editor.form_id.get_untracked();
        if bound.is_some() && bound.as_deref() != Some(fid.as_str()) {
            store.close();
        }

        is_loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            if let Ok(profile) = get_viewer_profile().await {
                entitlements.set(Entitlements::for_viewer(&profile));
            }

            match store.load_forms(eid, false).await {
                Ok(()) => {
                    let found = store
                        .forms
                        .get_untracked()
                        .iter()
                        .find(|f| f.id == fid)
                        .cloned();
                    match found {
                        Some(form) => store.open(&form),
                        None => load_error.set(Some("This form no longer exists".to_string())),
                    }
                }
                Err(e) => load_error.set(Some(e)),
            }
            is_loading.set(false);
        });
    });

    // Leaving the builder flushes whatever the autosave debounce still holds
    on_cleanup(move || store.close());

    view! {
        <div class="h-full flex flex-col bg-zinc-950">
            {move || {
                if is_loading.get() {
                    view! {
                        <div class="flex-1 flex items-center justify-center">
                            <LoadingSpinner size="lg" />
                        </div>
                    }
                    .into_any()
                } else if let Some(message) = load_error.get() {
                    view! { <BuilderError message event_id=event_id.get_untracked() /> }.into_any()
                } else {
                    view! {
                        <BuilderBody
                            store
                            entitlements=entitlements.get_untracked()
                            event_id=event_id.get_untracked()
                        />
                    }
                    .into_any()
                }
            }}
            <UpgradePrompt />
        </div>
    }
}

#[component]
fn BuilderError(message: String, event_id: String) -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <div class="flex-1 flex flex-col items-center justify-center gap-4 p-8 text-center">
            <p class="text-zinc-400">{message}</p>
            <Button
                variant=ButtonVariant::Secondary
                on_click=move |_| navigate(&format!("/event/{event_id}/forms"), Default::default())
            >
                "Back to forms"
            </Button>
        </div>
    }
}

/// Header plus the three builder panes
#[component]
fn BuilderBody(store: FormStore, entitlements: Entitlements, event_id: String) -> impl IntoView {
    let drag = use_drag_state();
    let navigate = use_navigate();

    // Clicking a palette entry appends through the same gate a drop uses
    let on_add = Callback::new(move |payload: DragPayload| {
        match resolve_drop(&payload, entitlements) {
            DropOutcome::Insert(field) => {
                let field_id = field.id.clone();
                store.add_field(field);
                store.editor.selected_field.set(Some(field_id));
            }
            DropOutcome::Blocked(field_type) => drag.blocked_type.set(Some(field_type)),
            DropOutcome::Move(_) => {}
        }
    });

    view! {
        <header class="flex items-center gap-4 px-4 py-3 border-b border-zinc-800 bg-zinc-950">
            <button
                type="button"
                class="p-2 rounded-lg text-zinc-400 hover:text-white hover:bg-white/10 transition-colors"
                title="Back to forms"
                on:click=move |_| {
                    navigate(&format!("/event/{event_id}/forms"), Default::default())
                }
            >
                <Icon icon=ARROW_LEFT size="18px" />
            </button>
            <div class="flex-1 min-w-0">
                <input
                    type="text"
                    class="w-full bg-transparent text-lg font-semibold text-white placeholder-zinc-600 focus:outline-none"
                    placeholder="Untitled form"
                    prop:value=move || store.editor.title.get()
                    on:input=move |evt| {
                        store.editor.title.set(event_target_value(&evt));
                        store.schedule_autosave();
                    }
                />
                <input
                    type="text"
                    class="w-full bg-transparent text-xs text-zinc-400 placeholder-zinc-600 focus:outline-none"
                    placeholder="Add a description"
                    prop:value=move || store.editor.description.get()
                    on:input=move |evt| {
                        store.editor.description.set(event_target_value(&evt));
                        store.schedule_autosave();
                    }
                />
            </div>
            <SaveStatusChip store />
        </header>
        <div class="flex-1 flex min-h-0">
            <FieldPalette entitlements on_add />
            <BuilderCanvas store entitlements />
            <PropertiesEditor store />
        </div>
    }
}

/// Shown when a plan-gated field type was refused; dismissing it clears the
/// refusal so the next attempt can prompt again
#[component]
fn UpgradePrompt() -> impl IntoView {
    let drag = use_drag_state();
    let is_open = RwSignal::new(false);

    Effect::new(move |_| {
        if drag.blocked_type.get().is_some() {
            is_open.set(true);
        }
    });
    Effect::new(move |_| {
        if !is_open.get() {
            drag.blocked_type.set(None);
        }
    });

    view! {
        <Modal is_open title="Upgrade to Pro" class="w-full max-w-md">
            <div class="p-6 space-y-4">
                <div class="flex items-center gap-3">
                    <span class="p-2 rounded-lg bg-amber-500/15 text-amber-400">
                        <Icon icon=CROWN size="22px" weight=IconWeight::Fill />
                    </span>
                    <p class="text-sm text-zinc-300">
                        {move || {
                            drag.blocked_type
                                .get()
                                .map(|t| format!("{} fields are part of the Pro plan.", t.label()))
                                .unwrap_or_else(|| {
                                    "This field type is part of the Pro plan.".to_string()
                                })
                        }}
                    </p>
                </div>
                <p class="text-xs text-zinc-500">
                    "Upgrade your workspace to collect files, addresses and more with advanced field types."
                </p>
                <div class="flex justify-end">
                    <Button on_click=move |_| is_open.set(false)>"Got it"</Button>
                </div>
            </div>
        </Modal>
    }
}
