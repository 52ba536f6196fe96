//! Events Dashboard
//!
//! The home page: every event the viewer manages, with quick links into the
//! landing page, forms, and sponsors, plus the design controls.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, CALENDAR_BLANK, MAP_PIN, PAINT_BRUSH};

use crate::bindings::events::{list_events, EventRecord};
use crate::components::design_system::{
    Badge, BadgeVariant, Button, ButtonVariant, LoadingSpinner,
};
use crate::components::events::design_modal::DesignModal;
use crate::components::landing::landing_page::{format_event_dates, parse_day};
use crate::services::notification_service::{show_error, show_success, ToastAction};

/// Events starting today or later
pub fn upcoming_count(events: &[EventRecord], today: chrono::NaiveDate) -> usize {
    events
        .iter()
        .filter(|e| {
            e.start_date
                .as_deref()
                .and_then(parse_day)
                .map(|day| day >= today)
                .unwrap_or(false)
        })
        .count()
}

pub fn draft_count(events: &[EventRecord]) -> usize {
    events
        .iter()
        .filter(|e| e.status.eq_ignore_ascii_case("draft"))
        .count()
}

fn status_variant(status: &str) -> BadgeVariant {
    if status.eq_ignore_ascii_case("draft") {
        BadgeVariant::Default
    } else if status.eq_ignore_ascii_case("published") || status.eq_ignore_ascii_case("live") {
        BadgeVariant::Success
    } else {
        BadgeVariant::Info
    }
}

#[component]
fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="p-4 bg-zinc-900 border border-zinc-800 rounded-xl">
            <div class="text-xs font-bold uppercase tracking-wider text-zinc-500">{label}</div>
            <div class="text-3xl font-extrabold text-white mt-1">{value}</div>
        </div>
    }
}

#[component]
fn EventCard(
    event: EventRecord,
    on_open: Callback<String>,
    on_forms: Callback<String>,
    on_sponsors: Callback<String>,
    on_design: Callback<EventRecord>,
) -> impl IntoView {
    let dates = format_event_dates(event.start_date.as_deref(), event.end_date.as_deref());
    let status = event.status.clone();
    let badge = status_variant(&status);
    let name = event.name.clone();
    let location = event.location.clone();
    let hero = event.hero_image_url.clone();
    // The accent tints the cover fallback when no hero image is set
    let cover_style = event
        .theme_color
        .clone()
        .map(|color| format!("background: linear-gradient(135deg, {color}, #18181b)"));

    let open_id = event.id.clone();
    let handle_open = move |_: ev::MouseEvent| {
        on_open.run(open_id.clone());
    };
    let forms_id = event.id.clone();
    let handle_forms = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        on_forms.run(forms_id.clone());
    };
    let sponsors_id = event.id.clone();
    let handle_sponsors = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        on_sponsors.run(sponsors_id.clone());
    };
    let design_record = event.clone();
    let handle_design = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        on_design.run(design_record.clone());
    };

    view! {
        <div
            class="group bg-zinc-900 rounded-xl overflow-hidden border border-zinc-800 hover:border-zinc-600 transition-all hover:-translate-y-1 cursor-pointer shadow-xl"
            on:click=handle_open
        >
            // Cover
            <div class="relative aspect-video bg-gradient-to-br from-zinc-800 to-zinc-950">
                {match hero {
                    Some(url) => view! {
                        <img
                            src=url
                            alt=""
                            class="absolute inset-0 w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                        />
                    }
                    .into_any(),
                    None => view! {
                        <div
                            class="absolute inset-0 flex items-center justify-center"
                            style=cover_style.unwrap_or_default()
                        >
                            <span class="text-6xl font-black text-white/20 select-none">
                                {name.chars().next().unwrap_or('?').to_string()}
                            </span>
                        </div>
                    }
                    .into_any(),
                }}
                <div class="absolute top-3 right-3">
                    <Badge variant=badge>{status}</Badge>
                </div>
            </div>

            // Body
            <div class="p-5 space-y-3">
                <h3 class="text-lg font-bold text-white leading-tight group-hover:text-purple-300 transition-colors">
                    {name.clone()}
                </h3>
                <div class="space-y-1 text-sm text-zinc-400">
                    {dates.map(|range| view! {
                        <div class="flex items-center gap-2">
                            <Icon icon=CALENDAR_BLANK size="14px" />
                            {range}
                        </div>
                    })}
                    {location.map(|place| view! {
                        <div class="flex items-center gap-2">
                            <Icon icon=MAP_PIN size="14px" />
                            {place}
                        </div>
                    })}
                </div>

                // Quick links
                <div class="pt-3 flex items-center gap-2 border-t border-zinc-800">
                    <button
                        class="px-3 py-1.5 rounded-lg text-xs font-medium text-zinc-300 bg-zinc-800 hover:bg-zinc-700 transition-colors"
                        on:click=handle_forms
                    >
                        "Forms"
                    </button>
                    <button
                        class="px-3 py-1.5 rounded-lg text-xs font-medium text-zinc-300 bg-zinc-800 hover:bg-zinc-700 transition-colors"
                        on:click=handle_sponsors
                    >
                        "Sponsors"
                    </button>
                    <button
                        class="ml-auto px-3 py-1.5 rounded-lg text-xs font-medium text-purple-300 bg-purple-900/30 hover:bg-purple-900/50 transition-colors inline-flex items-center gap-1.5"
                        on:click=handle_design
                        title="Edit the landing page look"
                    >
                        <Icon icon=PAINT_BRUSH size="12px" />
                        "Design"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Events dashboard, routed as `/`
#[component]
pub fn EventsPage() -> impl IntoView {
    let navigate = use_navigate();

    let events = RwSignal::new(Vec::<EventRecord>::new());
    let is_loading = RwSignal::new(true);
    let show_design = RwSignal::new(false);
    let design_target = RwSignal::new(Option::<EventRecord>::None);

    let refresh = Trigger::new();
    Effect::new(move |_| {
        refresh.track();
        spawn_local(async move {
            is_loading.set(true);
            match list_events().await {
                Ok(list) => events.set(list),
                Err(e) => {
                    let retry = Some(ToastAction {
                        label: "Retry".to_string(),
                        handler: Arc::new(move || refresh.notify()),
                    });
                    show_error("Failed to load events", Some(&e), retry);
                }
            }
            is_loading.set(false);
        });
    });

    let nav_open = navigate.clone();
    let on_open = Callback::new(move |id: String| {
        nav_open(&format!("/event/{id}"), Default::default());
    });
    let nav_forms = navigate.clone();
    let on_forms = Callback::new(move |id: String| {
        nav_forms(&format!("/event/{id}/forms"), Default::default());
    });
    let nav_sponsors = navigate.clone();
    let on_sponsors = Callback::new(move |id: String| {
        nav_sponsors(&format!("/event/{id}/sponsors"), Default::default());
    });

    let on_design = Callback::new(move |record: EventRecord| {
        design_target.set(Some(record));
        show_design.set(true);
    });

    let handle_design_save = Callback::new(move |patch: crate::bindings::events::EventPatch| {
        let Some(target) = design_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match crate::bindings::events::update_event(target.id.clone(), patch).await {
                Ok(updated) => {
                    events.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|e| e.id == updated.id) {
                            *slot = updated.clone();
                        }
                    });
                    show_success("Design saved", Some(&updated.name));
                }
                Err(e) => show_error("Failed to save design", Some(&e), None),
            }
        });
    });

    let refresh_events = move |_: ev::MouseEvent| {
        refresh.notify();
    };

    view! {
        <div class="p-8 bg-zinc-950 text-zinc-100 min-h-screen font-sans selection:bg-purple-500/30">
            <div class="max-w-7xl mx-auto space-y-8">
                // Header
                <div class="flex flex-col md:flex-row md:items-end justify-between gap-4 pb-6 border-b border-zinc-900">
                    <div class="space-y-1">
                        <h1 class="text-4xl font-extrabold tracking-tight bg-clip-text text-transparent bg-gradient-to-r from-white to-zinc-500">
                            "Events"
                        </h1>
                        <p class="text-zinc-400">"Everything you're hosting, in one place."</p>
                    </div>
                    <Button variant=ButtonVariant::Secondary on_click=refresh_events>
                        "Refresh"
                    </Button>
                </div>

                // Stat strip
                {move || {
                    let list = events.get();
                    let today = chrono::Utc::now().date_naive();
                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            <StatCard label="Events" value=list.len() />
                            <StatCard label="Upcoming" value=upcoming_count(&list, today) />
                            <StatCard label="Drafts" value=draft_count(&list) />
                        </div>
                    }
                }}

                // Card grid
                {move || {
                    if is_loading.get() {
                        return view! {
                            <div class="flex justify-center py-20">
                                <LoadingSpinner size="lg" />
                            </div>
                        }
                        .into_any();
                    }

                    let list = events.get();
                    if list.is_empty() {
                        return view! {
                            <div class="text-center py-20 space-y-2">
                                <p class="text-zinc-400">"No events yet."</p>
                                <p class="text-sm text-zinc-500">
                                    "Events created for your organization appear here."
                                </p>
                            </div>
                        }
                        .into_any();
                    }

                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                            {list
                                .into_iter()
                                .map(|event| view! {
                                    <EventCard
                                        event
                                        on_open
                                        on_forms
                                        on_sponsors
                                        on_design
                                    />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>

            <DesignModal is_open=show_design editing=design_target on_save=handle_design_save />
        </div>
    }
}
