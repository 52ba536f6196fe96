//! Public Landing Page
//!
//! Renders one event for visitors: hero, markdown description, agenda,
//! sponsor grid, and the register call-to-action. The event's theme color is
//! applied as a CSS custom property on the document root so the markdown
//! styles and accent text pick it up.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use phosphor_leptos::{Icon, CALENDAR_BLANK, MAP_PIN, USER};
use wasm_bindgen::JsCast;

use crate::bindings::events::{
    get_event, list_event_sessions, EventRecord, EventSession,
};
use crate::bindings::sponsors::{list_event_sponsors, SponsorRecord, SponsorTier};
use crate::components::design_system::{Button, ButtonVariant, LoadingSpinner, Markdown};
use crate::components::registration::sessions_step::session_time_range;

#[derive(Params, PartialEq, Clone, Default)]
pub struct LandingParams {
    pub event_id: Option<String>,
}

pub fn parse_day(value: &str) -> Option<chrono::NaiveDate> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

/// Human date range for the hero. Single-day events collapse to one date;
/// unparseable strings pass through as stored.
pub fn format_event_dates(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = start?;
    let Some(first) = parse_day(start) else {
        return Some(start.to_string());
    };
    match end.and_then(parse_day) {
        Some(last) if last != first => Some(format!(
            "{} to {}",
            first.format("%-d %B %Y"),
            last.format("%-d %B %Y")
        )),
        _ => Some(first.format("%-d %B %Y").to_string()),
    }
}

/// Set or clear the accent custom property on the document root
fn set_accent(color: Option<&str>) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    match color {
        Some(color) => {
            let _ = style.set_property("--accent", color);
        }
        None => {
            let _ = style.remove_property("--accent");
        }
    }
}

#[component]
fn AgendaRow(session: EventSession) -> impl IntoView {
    let time = session_time_range(&session.starts_at, session.ends_at.as_deref());

    view! {
        <div class="flex gap-4 p-4 bg-zinc-900/60 border border-zinc-800 rounded-lg">
            <div class="text-sm font-mono text-zinc-400 whitespace-nowrap pt-0.5">{time}</div>
            <div class="flex-1 min-w-0 space-y-1">
                <h3 class="font-semibold text-white">{session.title}</h3>
                {session.description.map(|text| view! {
                    <p class="text-sm text-zinc-400 line-clamp-2">{text}</p>
                })}
                <div class="flex items-center gap-4 text-xs text-zinc-500">
                    {session.speaker.map(|speaker| view! {
                        <span class="inline-flex items-center gap-1">
                            <Icon icon=USER size="12px" />
                            {speaker}
                        </span>
                    })}
                    {session.location.map(|location| view! {
                        <span class="inline-flex items-center gap-1">
                            <Icon icon=MAP_PIN size="12px" />
                            {location}
                        </span>
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SponsorGrid(sponsors: Vec<SponsorRecord>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            {SponsorTier::all()
                .iter()
                .filter_map(|tier| {
                    let of_tier: Vec<SponsorRecord> = sponsors
                        .iter()
                        .filter(|s| s.tier == *tier)
                        .cloned()
                        .collect();
                    if of_tier.is_empty() {
                        return None;
                    }
                    Some(view! {
                        <div class="space-y-4">
                            <h3 class="text-xs font-bold uppercase tracking-wider text-zinc-500 text-center">
                                {tier.label()}
                            </h3>
                            <div class="flex flex-wrap justify-center gap-4">
                                {of_tier
                                    .into_iter()
                                    .map(|sponsor| {
                                        let tile = view! {
                                            <div class="w-40 h-20 bg-zinc-900 border border-zinc-800 rounded-lg flex items-center justify-center p-4 hover:border-zinc-700 transition-colors">
                                                {match sponsor.logo_url {
                                                    Some(url) => view! {
                                                        <img
                                                            src=url
                                                            alt=sponsor.name.clone()
                                                            class="max-w-full max-h-full object-contain"
                                                        />
                                                    }
                                                    .into_any(),
                                                    None => view! {
                                                        <span class="text-sm font-semibold text-zinc-300 text-center">
                                                            {sponsor.name.clone()}
                                                        </span>
                                                    }
                                                    .into_any(),
                                                }}
                                            </div>
                                        };
                                        match sponsor.website_url {
                                            Some(url) => view! {
                                                <a href=url target="_blank" rel="noopener">
                                                    {tile}
                                                </a>
                                            }
                                            .into_any(),
                                            None => tile.into_any(),
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })
                })
                .collect_view()}
        </div>
    }
}

/// Public landing page, routed as `/event/:event_id`
#[component]
pub fn LandingPage() -> impl IntoView {
    let params = use_params::<LandingParams>();
    let event_id = Memo::new(move |_| {
        params.get().ok().and_then(|p| p.event_id).unwrap_or_default()
    });

    let navigate = use_navigate();

    let event = RwSignal::new(None::<EventRecord>);
    let sessions = RwSignal::new(Vec::<EventSession>::new());
    let sponsors = RwSignal::new(Vec::<SponsorRecord>::new());
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

            // Agenda and sponsors are decoration here; the page still renders
            // without them
            match list_event_sessions(eid.clone()).await {
                Ok(mut list) => {
                    list.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
                    sessions.set(list);
                }
                Err(e) => log::warn!("Failed to load sessions: {e}"),
            }
            match list_event_sponsors(eid).await {
                Ok(list) => sponsors.set(list),
                Err(e) => log::warn!("Failed to load sponsors: {e}"),
            }
            is_loading.set(false);
        });
    });

    // Theme the page from the event accent; cleared when the page is left
    Effect::new(move |_| {
        if let Some(color) = event.with(|e| e.as_ref().and_then(|e| e.theme_color.clone())) {
            set_accent(Some(&color));
        }
    });
    on_cleanup(|| set_accent(None));

    let nav_register = navigate.clone();
    let go_register = move |_: ev::MouseEvent| {
        nav_register(
            &format!("/event/{}/register", event_id.get_untracked()),
            Default::default(),
        );
    };
    let nav_register_bottom = navigate.clone();
    let go_register_bottom = move |_: ev::MouseEvent| {
        nav_register_bottom(
            &format!("/event/{}/register", event_id.get_untracked()),
            Default::default(),
        );
    };

    view! {
        <div class="min-h-screen bg-zinc-950 text-zinc-100 font-sans selection:bg-purple-500/30">
            {move || {
                if is_loading.get() {
                    return view! {
                        <div class="flex justify-center py-32">
                            <LoadingSpinner size="lg" />
                        </div>
                    }
                    .into_any();
                }
                if let Some(error) = load_error.get() {
                    return view! {
                        <div class="max-w-xl mx-auto mt-32 p-4 bg-red-900/30 border border-red-700/50 rounded-lg text-red-400 text-sm text-center">
                            {error}
                        </div>
                    }
                    .into_any();
                }
                let Some(record) = event.get() else {
                    return ().into_any();
                };

                let dates = format_event_dates(
                    record.start_date.as_deref(),
                    record.end_date.as_deref(),
                );
                let description = record.description.clone().unwrap_or_default();

                view! {
                    <div>
                        // Hero
                        <div class="relative overflow-hidden border-b border-zinc-900">
                            {record.hero_image_url.clone().map(|url| view! {
                                <>
                                    <img
                                        src=url
                                        alt=""
                                        class="absolute inset-0 w-full h-full object-cover opacity-30"
                                    />
                                    <div class="absolute inset-0 bg-gradient-to-b from-zinc-950/40 to-zinc-950" />
                                </>
                            })}
                            <div class="relative max-w-4xl mx-auto px-4 py-24 text-center space-y-6">
                                <h1 class="text-5xl font-black tracking-tight text-white">
                                    {record.name.clone()}
                                </h1>
                                <div class="flex flex-wrap items-center justify-center gap-6 text-zinc-300">
                                    {dates.map(|range| view! {
                                        <span class="inline-flex items-center gap-2">
                                            <Icon icon=CALENDAR_BLANK size="18px" />
                                            {range}
                                        </span>
                                    })}
                                    {record.location.clone().map(|location| view! {
                                        <span class="inline-flex items-center gap-2">
                                            <Icon icon=MAP_PIN size="18px" />
                                            {location}
                                        </span>
                                    })}
                                </div>
                                <Button
                                    variant=ButtonVariant::Primary
                                    on_click=go_register.clone()
                                    class="px-8 py-3 text-base"
                                >
                                    "Register now"
                                </Button>
                            </div>
                        </div>

                        <div class="max-w-4xl mx-auto px-4 py-16 space-y-16">
                            // About
                            {(!description.trim().is_empty()).then(|| view! {
                                <section class="space-y-6">
                                    <h2 class="text-2xl font-bold text-white">"About"</h2>
                                    <Markdown content=description.clone() />
                                </section>
                            })}

                            // Agenda
                            {move || {
                                let list = sessions.get();
                                (!list.is_empty()).then(|| view! {
                                    <section class="space-y-6">
                                        <h2 class="text-2xl font-bold text-white">"Agenda"</h2>
                                        <div class="space-y-3">
                                            {list
                                                .into_iter()
                                                .map(|session| view! { <AgendaRow session /> })
                                                .collect_view()}
                                        </div>
                                    </section>
                                })
                            }}

                            // Sponsors
                            {move || {
                                let list = sponsors.get();
                                (!list.is_empty()).then(|| view! {
                                    <section class="space-y-6">
                                        <h2 class="text-2xl font-bold text-white text-center">
                                            "Sponsors"
                                        </h2>
                                        <SponsorGrid sponsors=list />
                                    </section>
                                })
                            }}

                            // Closing call-to-action
                            <section class="text-center py-8 space-y-4 border-t border-zinc-900">
                                <p class="text-zinc-400">"Ready to join us?"</p>
                                <Button
                                    variant=ButtonVariant::Primary
                                    on_click=go_register_bottom.clone()
                                    class="px-8 py-3 text-base"
                                >
                                    "Register now"
                                </Button>
                            </section>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_formats_both_days() {
        let range = format_event_dates(Some("2026-03-12"), Some("2026-03-14"));
        assert_eq!(range.as_deref(), Some("12 March 2026 to 14 March 2026"));
    }

    #[test]
    fn single_day_event_collapses_to_one_date() {
        let range = format_event_dates(Some("2026-03-12"), Some("2026-03-12"));
        assert_eq!(range.as_deref(), Some("12 March 2026"));
    }

    #[test]
    fn rfc3339_timestamps_format_as_dates() {
        let range = format_event_dates(Some("2026-03-12T09:00:00+00:00"), None);
        assert_eq!(range.as_deref(), Some("12 March 2026"));
    }

    #[test]
    fn unparseable_start_passes_through() {
        let range = format_event_dates(Some("sometime in spring"), None);
        assert_eq!(range.as_deref(), Some("sometime in spring"));
    }

    #[test]
    fn missing_start_yields_nothing() {
        assert_eq!(format_event_dates(None, Some("2026-03-14")), None);
    }
}
