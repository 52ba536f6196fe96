//! Sessions Step
//!
//! Optional multi-select over the event's scheduled sessions. Submitting
//! from here performs the actual registration.

use chrono::DateTime;
use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, IconWeight, CHECK_CIRCLE, CIRCLE, MAP_PIN, USER};

use crate::bindings::events::EventSession;
use crate::components::design_system::{Button, ButtonVariant};
use crate::services::registration::RegistrationContext;

/// "09:00 to 10:30" when both ends parse; the raw start string otherwise
pub fn session_time_range(starts_at: &str, ends_at: Option<&str>) -> String {
    let Ok(start) = DateTime::parse_from_rfc3339(starts_at) else {
        return starts_at.to_string();
    };
    let start_txt = start.format("%H:%M").to_string();
    match ends_at.and_then(|raw| DateTime::parse_from_rfc3339(raw).ok()) {
        Some(end) => format!("{} to {}", start_txt, end.format("%H:%M")),
        None => start_txt,
    }
}

#[component]
pub fn SessionsStep(
    ctx: RegistrationContext,
    sessions: RwSignal<Vec<EventSession>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_back = move |_: ev::MouseEvent| {
        ctx.go_back();
    };

    let handle_submit = move |_: ev::MouseEvent| {
        on_submit.run(());
    };

    view! {
        <div class="space-y-6">
            {move || ctx.error.get().map(|message| view! {
                <div class="p-4 bg-red-900/30 border border-red-700/50 rounded-lg text-red-400 text-sm">
                    {message}
                </div>
            })}

            {move || {
                let mut list = sessions.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 bg-zinc-900/50 rounded-xl border border-dashed border-zinc-800">
                            <p class="text-zinc-400">"No sessions have been scheduled yet."</p>
                            <p class="text-zinc-500 text-sm mt-1">
                                "You can still complete your registration."
                            </p>
                        </div>
                    }
                    .into_any();
                }
                // RFC 3339 strings sort chronologically as-is
                list.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));

                view! {
                    <div class="space-y-3">
                        // The whole schedule lives under one day header for now
                        <div class="text-xs font-bold uppercase tracking-wider text-zinc-500">
                            "Day 1"
                        </div>
                        {list
                            .into_iter()
                            .map(|session| view! { <SessionRow ctx session /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}

            <div class="flex justify-between pt-2">
                <Button variant=ButtonVariant::Secondary on_click=handle_back>
                    "Back"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    on_click=handle_submit
                    loading=Signal::derive(move || ctx.is_submitting.get())
                >
                    "Complete registration"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn SessionRow(ctx: RegistrationContext, session: EventSession) -> impl IntoView {
    let session_id = session.id.clone();
    let selected = {
        let id = session_id.clone();
        Signal::derive(move || ctx.selected_sessions.get().iter().any(|s| s == &id))
    };

    let handle_toggle = move |_: ev::MouseEvent| {
        ctx.toggle_session(&session_id);
    };

    let time = session_time_range(&session.starts_at, session.ends_at.as_deref());
    let title = session.title.clone();
    let speaker = session.speaker.clone().filter(|s| !s.is_empty());
    let location = session.location.clone().filter(|l| !l.is_empty());
    let description = session.description.clone().filter(|d| !d.is_empty());

    view! {
        <button
            type="button"
            class=move || format!(
                "w-full text-left p-4 rounded-lg border transition-colors {}",
                if selected.get() {
                    "bg-purple-900/20 border-purple-500/60"
                } else {
                    "bg-zinc-900 border-zinc-800 hover:border-zinc-600"
                }
            )
            on:click=handle_toggle
        >
            <div class="flex items-start gap-3">
                <span class=move || {
                    if selected.get() { "text-purple-400 mt-0.5" } else { "text-zinc-600 mt-0.5" }
                }>
                    {move || {
                        if selected.get() {
                            view! { <Icon icon=CHECK_CIRCLE size="20px" weight=IconWeight::Fill /> }
                                .into_any()
                        } else {
                            view! { <Icon icon=CIRCLE size="20px" /> }.into_any()
                        }
                    }}
                </span>
                <div class="flex-1 min-w-0">
                    <div class="flex items-baseline justify-between gap-3">
                        <span class="font-medium text-white">{title}</span>
                        <span class="text-xs text-zinc-500 whitespace-nowrap">{time}</span>
                    </div>
                    {description.map(|text| view! {
                        <p class="text-sm text-zinc-400 mt-1 line-clamp-2">{text}</p>
                    })}
                    <div class="flex items-center gap-4 mt-2 text-xs text-zinc-500">
                        {speaker.map(|name| view! {
                            <span class="flex items-center gap-1">
                                <Icon icon=USER size="12px" />
                                {name}
                            </span>
                        })}
                        {location.map(|place| view! {
                            <span class="flex items-center gap-1">
                                <Icon icon=MAP_PIN size="12px" />
                                {place}
                            </span>
                        })}
                    </div>
                </div>
            </div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_formats_both_ends() {
        assert_eq!(
            session_time_range("2026-09-01T09:00:00Z", Some("2026-09-01T10:30:00Z")),
            "09:00 to 10:30"
        );
    }

    #[test]
    fn time_range_without_end_shows_start_only() {
        assert_eq!(session_time_range("2026-09-01T14:15:00Z", None), "14:15");
        // A malformed end falls back to start-only as well
        assert_eq!(
            session_time_range("2026-09-01T14:15:00Z", Some("later")),
            "14:15"
        );
    }

    #[test]
    fn unparseable_start_passes_through() {
        assert_eq!(session_time_range("soon", None), "soon");
    }
}
