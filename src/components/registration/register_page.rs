//! Public Registration Page
//!
//! The attendee-facing route. Loads the event, its published registration
//! schema, the session catalogue, and the viewer profile, then walks the
//! visitor through the three steps. Unlike the authoring wizard, the step
//! rail here is display-only; backward travel goes through the explicit
//! Back button and stops existing once the registration is submitted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::bindings::events::{
    get_event, list_event_sessions, EventRecord, EventSession,
};
use crate::bindings::forms::{list_event_forms, DEFAULT_REGISTRATION_KEY};
use crate::bindings::viewer::{get_viewer_profile, ViewerProfile};
use crate::components::design_system::LoadingSpinner;
use crate::services::form_store::seeded_fields;
use crate::services::registration::{
    submit_registration_action, RegistrationContext, RegistrationStep,
};

use super::confirmation_step::ConfirmationStep;
use super::details_step::DetailsStep;
use super::sessions_step::SessionsStep;

#[derive(Params, PartialEq, Clone, Default)]
struct RegisterParams {
    event_id: Option<String>,
}

fn check_icon() -> impl IntoView {
    view! {
        <svg
            class="w-4 h-4"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="3"
                d="M5 13l4 4L19 7"
            />
        </svg>
    }
}

/// One circle on the rail. Purely presentational; steps advance through
/// the buttons inside each step body.
#[component]
fn StepDot(step: RegistrationStep, current: RwSignal<RegistrationStep>) -> impl IntoView {
    let is_current = Signal::derive(move || current.get() == step);
    let is_completed = Signal::derive(move || step.index() < current.get().index());

    let circle_class = Signal::derive(move || {
        if is_current.get() {
            "bg-purple-600 text-white ring-2 ring-purple-400 ring-offset-2 ring-offset-zinc-900"
        } else if is_completed.get() {
            "bg-purple-900 text-purple-300"
        } else {
            "bg-zinc-800 text-zinc-500"
        }
    });

    let label_class = Signal::derive(move || {
        if is_current.get() {
            "text-white font-medium"
        } else if is_completed.get() {
            "text-zinc-400"
        } else {
            "text-zinc-500"
        }
    });

    view! {
        <div class="flex flex-col items-center gap-2">
            <div class=move || format!(
                "w-10 h-10 rounded-full flex items-center justify-center text-sm font-medium transition-all duration-200 {}",
                circle_class.get()
            )>
                {move || {
                    if is_completed.get() {
                        check_icon().into_any()
                    } else {
                        view! { <span>{step.index() + 1}</span> }.into_any()
                    }
                }}
            </div>
            <div class="flex flex-col items-center">
                <span class=move || format!("text-xs transition-colors {}", label_class.get())>
                    {step.label()}
                </span>
                {move || is_current.get().then(|| view! {
                    <span class="text-[10px] text-zinc-500 mt-0.5">
                        {step.description()}
                    </span>
                })}
            </div>
        </div>
    }
}

#[component]
fn StepConnector(is_completed: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || format!(
            "flex-1 h-0.5 mx-2 mt-5 transition-colors duration-200 {}",
            if is_completed.get() { "bg-purple-600" } else { "bg-zinc-700" }
        ) />
    }
}

#[component]
fn StepRail(current: RwSignal<RegistrationStep>) -> impl IntoView {
    let steps = RegistrationStep::all();

    view! {
        <div class="w-full px-4 py-6">
            <div class="flex items-start justify-center gap-1">
                {steps.iter().enumerate().map(|(i, step)| {
                    let step = *step;
                    view! {
                        <>
                            {(i > 0).then(|| {
                                let prev = steps[i - 1];
                                let connector_completed = Signal::derive(move || {
                                    prev.index() < current.get().index()
                                });
                                view! { <StepConnector is_completed=connector_completed /> }
                            })}
                            <StepDot step current />
                        </>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let params = use_params::<RegisterParams>();
    let event_id = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|p| p.event_id)
            .unwrap_or_default()
    });

    let ctx = RegistrationContext::new();
    let event = RwSignal::new(None::<EventRecord>);
    let sessions = RwSignal::new(Vec::<EventSession>::new());
    let viewer = RwSignal::new(ViewerProfile::default());
    let is_loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let eid = event_id.get();
        if eid.is_empty() {
            return;
        }
        is_loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            match get_event(eid.clone()).await {
                Ok(Some(record)) => event.set(Some(record)),
                Ok(None) => {
                    load_error.set(Some("This event could not be found.".to_string()));
                    is_loading.set(false);
                    return;
                }
                Err(e) => {
                    load_error.set(Some(e));
                    is_loading.set(false);
                    return;
                }
            }

            // The registration row may not have been materialized yet; the
            // seeded schema keeps the public flow working regardless.
            let fields = match list_event_forms(eid.clone()).await {
                Ok(forms) => forms
                    .iter()
                    .find(|form| form.is_protected())
                    .map(|form| form.schema.fields.clone())
                    .filter(|fields| !fields.is_empty())
                    .unwrap_or_else(|| seeded_fields(Some(DEFAULT_REGISTRATION_KEY))),
                Err(_) => seeded_fields(Some(DEFAULT_REGISTRATION_KEY)),
            };

            match list_event_sessions(eid).await {
                Ok(list) => sessions.set(list),
                Err(e) => log::warn!("Failed to load sessions: {e}"),
            }

            let profile = get_viewer_profile().await.unwrap_or_default();
            ctx.load_fields(fields, &profile);
            viewer.set(profile);
            is_loading.set(false);
        });
    });

    let submit = submit_registration_action(ctx, event, sessions, viewer);
    let on_submit = Callback::new(move |_: ()| submit());

    view! {
        <div class="min-h-screen bg-zinc-950 text-zinc-100 font-sans selection:bg-purple-500/30 py-12 px-4">
            <div class="max-w-2xl mx-auto">
                {move || {
                    if is_loading.get() {
                        view! {
                            <div class="flex justify-center py-24">
                                <LoadingSpinner size="lg" />
                            </div>
                        }
                        .into_any()
                    } else if let Some(error) = load_error.get() {
                        view! {
                            <div class="p-4 bg-red-900/30 border border-red-700/50 rounded-lg text-red-400 text-sm text-center">
                                {error}
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="space-y-4">
                                <header class="text-center space-y-1">
                                    <p class="text-xs font-bold uppercase tracking-wider text-purple-400">
                                        "Registration"
                                    </p>
                                    <h1 class="text-3xl font-extrabold tracking-tight text-white">
                                        {move || event.get().map(|e| e.name).unwrap_or_default()}
                                    </h1>
                                </header>

                                <StepRail current=ctx.current_step />

                                <div class="bg-zinc-900/50 border border-zinc-800 rounded-xl p-6">
                                    {move || match ctx.current_step.get() {
                                        RegistrationStep::Details => {
                                            view! { <DetailsStep ctx /> }.into_any()
                                        }
                                        RegistrationStep::Sessions => {
                                            view! { <SessionsStep ctx sessions on_submit /> }
                                                .into_any()
                                        }
                                        RegistrationStep::Confirmation => {
                                            view! { <ConfirmationStep ctx event sessions /> }
                                                .into_any()
                                        }
                                    }}
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
