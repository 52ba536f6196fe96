//! Confirmation Step
//!
//! Terminal step: confirmation code, check-in QR, and the picked agenda.
//! There is deliberately no way back from here.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, IconWeight, CHECK, CHECK_CIRCLE, COPY};

use crate::bindings::comms::qr_checkin_url;
use crate::bindings::events::{EventRecord, EventSession};
use crate::services::registration::{selected_agenda, RegistrationContext};

use super::sessions_step::session_time_range;

#[component]
pub fn ConfirmationStep(
    ctx: RegistrationContext,
    event: RwSignal<Option<EventRecord>>,
    sessions: RwSignal<Vec<EventSession>>,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    let handle_copy = move |_: ev::MouseEvent| {
        let Some(code) = ctx.confirmation_code.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&code))
                    .await
                    .is_ok()
                {
                    copied.set(true);
                }
            }
        });
    };

    view! {
        <div class="space-y-6">
            // Success header
            <div class="text-center space-y-2">
                <span class="inline-flex text-green-400">
                    <Icon icon=CHECK_CIRCLE size="48px" weight=IconWeight::Fill />
                </span>
                <h2 class="text-2xl font-bold text-white">"You're registered!"</h2>
                {move || event.get().map(|e| view! {
                    <p class="text-zinc-400">{format!("See you at {}.", e.name)}</p>
                })}
            </div>

            // Confirmation code
            <div class="bg-zinc-900 border border-zinc-800 rounded-xl p-6 text-center space-y-3">
                <div class="text-xs font-bold uppercase tracking-wider text-zinc-500">
                    "Confirmation code"
                </div>
                <div class="text-3xl font-mono font-bold tracking-widest text-white">
                    {move || ctx.confirmation_code.get().unwrap_or_default()}
                </div>
                <button
                    class="inline-flex items-center gap-1.5 text-sm text-zinc-400 hover:text-white transition-colors"
                    on:click=handle_copy
                >
                    {move || {
                        if copied.get() {
                            view! {
                                <Icon icon=CHECK size="14px" />
                                <span>"Copied"</span>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Icon icon=COPY size="14px" />
                                <span>"Copy code"</span>
                            }
                            .into_any()
                        }
                    }}
                </button>
            </div>

            // Check-in QR
            {move || ctx.attendee.get().map(|attendee| view! {
                <div class="bg-zinc-900 border border-zinc-800 rounded-xl p-6 flex flex-col items-center gap-3">
                    <img
                        src=qr_checkin_url(&attendee.id)
                        alt="Check-in QR code"
                        class="w-48 h-48 rounded-lg bg-white p-2"
                    />
                    <p class="text-sm text-zinc-400">"Show this QR code at check-in."</p>
                    <p class="text-xs text-zinc-500">
                        {format!("A copy was emailed to {}.", attendee.email)}
                    </p>
                </div>
            })}

            // Picked agenda
            {move || {
                let agenda = selected_agenda(
                    &sessions.get(),
                    &ctx.selected_sessions.get(),
                );
                (!agenda.is_empty()).then(|| view! {
                    <div class="bg-zinc-900 border border-zinc-800 rounded-xl p-6 space-y-3">
                        <div class="text-xs font-bold uppercase tracking-wider text-zinc-500">
                            "Your agenda"
                        </div>
                        <ul class="space-y-2">
                            {agenda
                                .into_iter()
                                .map(|session| {
                                    let time = session_time_range(
                                        &session.starts_at,
                                        session.ends_at.as_deref(),
                                    );
                                    view! {
                                        <li class="flex items-baseline gap-3 text-sm">
                                            <span class="text-zinc-500 font-mono whitespace-nowrap">
                                                {time}
                                            </span>
                                            <span class="text-zinc-200">{session.title}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                })
            }}
        </div>
    }
}
