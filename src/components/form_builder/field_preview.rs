//! Field Previews
//!
//! What the respondent will see, rendered inert. Exactly one preview shape
//! per field type. Choice previews pre-select their first option; phone and
//! country previews carry a searchable flag selector with its own open state
//! per field. A preview never submits a value.

use leptos::prelude::*;
use phosphor_leptos::{Icon, CARET_DOWN, MAGNIFYING_GLASS, UPLOAD_SIMPLE};

use crate::bindings::forms::{Field, FieldType};

// ============================================================================
// Countries
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct Country {
    pub flag: &'static str,
    pub name: &'static str,
    pub dial: &'static str,
}

const fn country(flag: &'static str, name: &'static str, dial: &'static str) -> Country {
    Country { flag, name, dial }
}

pub const COUNTRIES: &[Country] = &[
    country("🇦🇷", "Argentina", "+54"),
    country("🇦🇺", "Australia", "+61"),
    country("🇦🇹", "Austria", "+43"),
    country("🇧🇪", "Belgium", "+32"),
    country("🇧🇷", "Brazil", "+55"),
    country("🇨🇦", "Canada", "+1"),
    country("🇨🇳", "China", "+86"),
    country("🇨🇿", "Czechia", "+420"),
    country("🇩🇰", "Denmark", "+45"),
    country("🇫🇮", "Finland", "+358"),
    country("🇫🇷", "France", "+33"),
    country("🇩🇪", "Germany", "+49"),
    country("🇮🇸", "Iceland", "+354"),
    country("🇮🇳", "India", "+91"),
    country("🇮🇪", "Ireland", "+353"),
    country("🇮🇹", "Italy", "+39"),
    country("🇯🇵", "Japan", "+81"),
    country("🇲🇽", "Mexico", "+52"),
    country("🇳🇱", "Netherlands", "+31"),
    country("🇳🇿", "New Zealand", "+64"),
    country("🇳🇴", "Norway", "+47"),
    country("🇵🇱", "Poland", "+48"),
    country("🇵🇹", "Portugal", "+351"),
    country("🇸🇬", "Singapore", "+65"),
    country("🇿🇦", "South Africa", "+27"),
    country("🇰🇷", "South Korea", "+82"),
    country("🇪🇸", "Spain", "+34"),
    country("🇸🇪", "Sweden", "+46"),
    country("🇨🇭", "Switzerland", "+41"),
    country("🇦🇪", "United Arab Emirates", "+971"),
    country("🇬🇧", "United Kingdom", "+44"),
    country("🇺🇸", "United States", "+1"),
];

/// Case-insensitive name search; an empty query returns the full list
pub fn filter_countries(query: &str) -> Vec<(usize, &'static Country)> {
    let q = query.trim().to_lowercase();
    COUNTRIES
        .iter()
        .enumerate()
        .filter(|(_, c)| q.is_empty() || c.name.to_lowercase().contains(&q))
        .collect()
}

/// The placeholder an input renders when the author set none
pub fn display_placeholder(field: &Field) -> String {
    if let Some(p) = &field.placeholder {
        if !p.is_empty() {
            return p.clone();
        }
    }
    match field.field_type {
        FieldType::Text => "Your answer",
        FieldType::Textarea => "Longer answer",
        FieldType::Number => "0",
        FieldType::Email => "name@example.com",
        FieldType::Phone => "555 000 000",
        FieldType::Url => "https://",
        _ => "",
    }
    .to_string()
}

// ============================================================================
// Preview widgets
// ============================================================================

const PREVIEW_INPUT_CLASS: &str = "w-full p-2 rounded bg-zinc-900/60 text-zinc-500 border border-zinc-800 cursor-default";

#[component]
pub fn FieldPreview(field: Field) -> impl IntoView {
    let placeholder = display_placeholder(&field);
    match field.field_type {
        FieldType::Text | FieldType::Email | FieldType::Url => view! {
            <input class=PREVIEW_INPUT_CLASS type="text" placeholder=placeholder disabled />
        }
        .into_any(),
        FieldType::Number => view! {
            <input class=PREVIEW_INPUT_CLASS type="number" placeholder=placeholder disabled />
        }
        .into_any(),
        FieldType::Date => view! {
            <input class=PREVIEW_INPUT_CLASS type="date" disabled />
        }
        .into_any(),
        FieldType::Textarea => view! {
            <textarea class=PREVIEW_INPUT_CLASS rows=3 placeholder=placeholder disabled></textarea>
        }
        .into_any(),
        FieldType::Dropdown => view! {
            <select class=PREVIEW_INPUT_CLASS disabled>
                {field
                    .display_options()
                    .into_iter()
                    .map(|opt| view! { <option>{opt}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldType::Checkbox | FieldType::Multichoice => view! {
            <OptionListPreview options=field.display_options() multi=true />
        }
        .into_any(),
        FieldType::Radio => view! {
            <OptionListPreview options=field.display_options() multi=false />
        }
        .into_any(),
        FieldType::File => view! {
            <div class="flex flex-col items-center gap-1 p-4 rounded border border-dashed border-zinc-700 text-zinc-500">
                <Icon icon=UPLOAD_SIMPLE size="20px" />
                <span class="text-xs">"Drop a file or browse"</span>
            </div>
        }
        .into_any(),
        FieldType::Phone => view! {
            <div class="flex gap-2">
                <FlagSelector with_dial=true />
                <input class=PREVIEW_INPUT_CLASS type="tel" placeholder=placeholder disabled />
            </div>
        }
        .into_any(),
        FieldType::Country => view! {
            <FlagSelector with_dial=false />
        }
        .into_any(),
        FieldType::Address => view! {
            <div class="flex flex-col gap-2">
                <input class=PREVIEW_INPUT_CLASS type="text" placeholder="Street address" disabled />
                <div class="flex gap-2">
                    <input class=PREVIEW_INPUT_CLASS type="text" placeholder="City" disabled />
                    <input class=PREVIEW_INPUT_CLASS type="text" placeholder="Postal code" disabled />
                </div>
            </div>
        }
        .into_any(),
    }
}

/// Checkbox/radio rows with the first option pre-selected, preview only
#[component]
fn OptionListPreview(options: Vec<String>, multi: bool) -> impl IntoView {
    let marker = move |first: bool| {
        let shape = if multi { "rounded" } else { "rounded-full" };
        let fill = if first {
            "bg-purple-500 border-purple-500"
        } else {
            "border-zinc-600"
        };
        format!("w-4 h-4 border {} {}", shape, fill)
    };

    view! {
        <div class="flex flex-col gap-1.5">
            {options
                .into_iter()
                .enumerate()
                .map(|(i, opt)| {
                    view! {
                        <div class="flex items-center gap-2 text-sm text-zinc-400">
                            <span class=marker(i == 0)></span>
                            <span>{opt}</span>
                        </div>
                    }
                })
                .collect_view()}
            {multi.then(|| view! {
                <span class="text-[10px] text-zinc-600">"Choose all that apply"</span>
            })}
        </div>
    }
}

/// Searchable flag-prefixed selector. Each field instance keeps its own
/// open/closed and search state; picks are visual only.
#[component]
fn FlagSelector(
    /// Show dial codes (phone fields) instead of plain names
    with_dial: bool,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(0usize);

    let summary = move || {
        let c = &COUNTRIES[selected.get().min(COUNTRIES.len() - 1)];
        if with_dial {
            format!("{} {}", c.flag, c.dial)
        } else {
            format!("{} {}", c.flag, c.name)
        }
    };

    view! {
        <div class="relative flex-shrink-0">
            <button
                class="flex items-center gap-1.5 p-2 rounded bg-zinc-900/60 text-zinc-400 border border-zinc-800 hover:border-zinc-600 transition-colors"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="text-sm whitespace-nowrap">{summary}</span>
                <Icon icon=CARET_DOWN size="12px" />
            </button>
            <div
                class="absolute left-0 top-full mt-1 w-56 z-20 bg-zinc-900 border border-zinc-700 rounded shadow-xl"
                style:display=move || if open.get() { "block" } else { "none" }
            >
                <div class="flex items-center gap-2 p-2 border-b border-zinc-800 text-zinc-500">
                    <Icon icon=MAGNIFYING_GLASS size="14px" />
                    <input
                        class="w-full bg-transparent text-sm text-white outline-none placeholder-zinc-600"
                        placeholder="Search countries"
                        prop:value=move || query.get()
                        on:input=move |evt| query.set(event_target_value(&evt))
                    />
                </div>
                <div class="max-h-48 overflow-y-auto py-1">
                    {move || {
                        let matches = filter_countries(&query.get());
                        if matches.is_empty() {
                            view! {
                                <div class="px-3 py-2 text-xs text-zinc-600">"No matches"</div>
                            }
                            .into_any()
                        } else {
                            matches
                                .into_iter()
                                .map(|(idx, c)| {
                                    view! {
                                        <button
                                            class="flex items-center gap-2 w-full px-3 py-1.5 text-left text-sm text-zinc-300 hover:bg-zinc-800"
                                            on:click=move |_| {
                                                selected.set(idx);
                                                open.set(false);
                                                query.set(String::new());
                                            }
                                        >
                                            <span>{c.flag}</span>
                                            <span class="truncate">{c.name}</span>
                                            {with_dial.then(|| view! {
                                                <span class="ml-auto text-zinc-600">{c.dial}</span>
                                            })}
                                        </button>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
