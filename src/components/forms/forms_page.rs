//! Forms Dashboard
//!
//! Lists the forms of one event: the default registration card (shown even
//! before its row exists) plus every created form. Opening a card ensures the
//! backing row and navigates into the builder.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use phosphor_leptos::{Icon, PLUS};

use crate::bindings::FormRecord;
use crate::components::design_system::{Button, ButtonVariant, LoadingSpinner};
use crate::components::forms::create_form_modal::CreateFormModal;
use crate::components::forms::form_card::FormCard;
use crate::services::form_store::{use_form_store, FormDescriptor};
use crate::services::notification_service::{show_error, show_success, ToastAction};

#[derive(Params, PartialEq, Clone, Default)]
pub struct FormsParams {
    pub event_id: Option<String>,
}

/// Forms dashboard page, routed as `/event/:event_id/forms`
#[component]
pub fn FormsPage() -> impl IntoView {
    let params = use_params::<FormsParams>();
    let event_id = Memo::new(move |_| {
        params.get().ok().and_then(|p| p.event_id).unwrap_or_default()
    });

    let store = use_form_store();
    let navigate = use_navigate();

    let show_create_modal = RwSignal::new(false);
    let delete_confirm = RwSignal::new(Option::<FormRecord>::None);

    // Load the form list on mount and on retry
    let refresh = Trigger::new();
    Effect::new(move |_| {
        refresh.track();
        let eid = event_id.get();
        if eid.is_empty() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = store.load_forms(eid, false).await {
                let retry = Some(ToastAction {
                    label: "Retry".to_string(),
                    handler: Arc::new(move || refresh.notify()),
                });
                show_error("Failed to load forms", Some(&e), retry);
            }
        });
    });

    // Opening a card materializes the backing row first; a card the viewer has
    // opened before resolves to the cached row without a network call
    let nav_open = navigate.clone();
    let on_open = Callback::new(move |descriptor: FormDescriptor| {
        let eid = event_id.get_untracked();
        let nav = nav_open.clone();
        spawn_local(async move {
            match store.ensure_form(eid.clone(), descriptor).await {
                Ok(form) => {
                    nav(&format!("/event/{}/forms/{}", eid, form.id), Default::default());
                }
                Err(e) => show_error("Failed to open form", Some(&e), None),
            }
        });
    });

    let nav_create = navigate.clone();
    let handle_create = Callback::new(move |descriptor: FormDescriptor| {
        let eid = event_id.get_untracked();
        let nav = nav_create.clone();
        spawn_local(async move {
            match store.ensure_form(eid.clone(), descriptor).await {
                Ok(form) => {
                    show_success("Form created", Some(&form.title));
                    nav(&format!("/event/{}/forms/{}", eid, form.id), Default::default());
                }
                Err(e) => show_error("Failed to create form", Some(&e), None),
            }
        });
    });

    // The store refuses (and toasts) for the protected registration form;
    // everything else goes through the confirm dialog
    let on_delete = Callback::new(move |form: FormRecord| {
        if store.can_request_delete(&form) {
            delete_confirm.set(Some(form));
        }
    });

    let handle_confirm_delete = move |_: ev::MouseEvent| {
        if let Some(form) = delete_confirm.get() {
            spawn_local(async move {
                match store.delete_form(form.id.clone()).await {
                    Ok(()) => {
                        show_success("Form deleted", Some(&form.title));
                        delete_confirm.set(None);
                    }
                    Err(e) => {
                        show_error("Failed to delete form", Some(&e), None);
                        // Dialog stays open so the user can retry
                    }
                }
            });
        }
    };

    let handle_cancel_delete = move |_: ev::MouseEvent| {
        delete_confirm.set(None);
    };

    let open_create_modal = move |_: ev::MouseEvent| {
        show_create_modal.set(true);
    };

    let refresh_forms = move |_: ev::MouseEvent| {
        let eid = event_id.get_untracked();
        if eid.is_empty() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = store.load_forms(eid, true).await {
                show_error("Failed to load forms", Some(&e), None);
            }
        });
    };

    let nav_back = navigate.clone();
    let nav_to_event = move |_: ev::MouseEvent| {
        nav_back(&format!("/event/{}", event_id.get_untracked()), Default::default());
    };

    view! {
        <div class="p-8 bg-zinc-950 text-zinc-100 min-h-screen font-sans selection:bg-purple-500/30">
            <div class="max-w-7xl mx-auto space-y-8">
                // Header
                <div class="flex flex-col md:flex-row md:items-end justify-between gap-4 pb-6 border-b border-zinc-900">
                    <div class="space-y-1">
                        <button
                            class="text-zinc-500 hover:text-white transition-colors text-sm font-medium"
                            on:click=nav_to_event
                        >
                            "< Back to event"
                        </button>
                        <h1 class="text-4xl font-extrabold tracking-tight bg-clip-text text-transparent bg-gradient-to-r from-white to-zinc-500">
                            "Forms"
                        </h1>
                        <p class="text-zinc-400">"Registration and custom forms attendees fill in."</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <Button variant=ButtonVariant::Secondary on_click=refresh_forms>
                            "Refresh"
                        </Button>
                        <Button variant=ButtonVariant::Primary on_click=open_create_modal>
                            <Icon icon=PLUS size="16px" />
                            "New form"
                        </Button>
                    </div>
                </div>

                // Card grid
                {move || {
                    if store.is_loading.get() {
                        return view! {
                            <div class="flex justify-center py-20">
                                <LoadingSpinner size="lg" />
                            </div>
                        }
                        .into_any();
                    }

                    let forms = store.forms.get();
                    let default_record = forms.iter().find(|f| f.is_protected()).cloned();
                    let mut default_descriptor = FormDescriptor::default_registration();
                    if let Some(row) = &default_record {
                        default_descriptor.db_id = Some(row.id.clone());
                        default_descriptor.title = row.title.clone();
                        default_descriptor.description = row.description.clone();
                    }
                    let created: Vec<FormRecord> =
                        forms.into_iter().filter(|f| !f.is_protected()).collect();

                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                            <FormCard
                                descriptor=default_descriptor
                                record=default_record
                                on_open=on_open
                                on_delete=on_delete
                            />
                            {created
                                .into_iter()
                                .map(|form| {
                                    let descriptor = FormDescriptor::for_record(&form);
                                    view! {
                                        <FormCard
                                            descriptor=descriptor
                                            record=Some(form)
                                            on_open=on_open
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>

            <CreateFormModal is_open=show_create_modal on_create=handle_create />

            // Delete confirmation
            <Show when=move || delete_confirm.get().is_some()>
                <div class="fixed inset-0 bg-black/60 backdrop-blur-sm z-50 flex items-center justify-center">
                    <div class="bg-zinc-900 border border-zinc-800 rounded-xl shadow-2xl w-full max-w-sm mx-4 p-6">
                        <h3 class="text-lg font-bold text-white mb-2">"Delete form?"</h3>
                        <p class="text-zinc-400 mb-6">
                            "Are you sure you want to delete "
                            <span class="text-white font-medium">
                                {move || delete_confirm.get().map(|f| f.title).unwrap_or_default()}
                            </span>
                            "? This action cannot be undone."
                        </p>
                        <div class="flex justify-end gap-3">
                            <Button variant=ButtonVariant::Secondary on_click=handle_cancel_delete>
                                "Cancel"
                            </Button>
                            <Button variant=ButtonVariant::Danger on_click=handle_confirm_delete>
                                "Delete"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
