//! Details Step
//!
//! Renders one live input per field of the resolved registration schema.
//! Values prefilled from the viewer profile render locked; advancing is
//! gated on every required field holding a non-blank value.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, LOCK_SIMPLE};

use crate::bindings::forms::{Field, FieldType};
use crate::components::design_system::{Button, ButtonVariant};
use crate::components::form_builder::field_preview::{display_placeholder, COUNTRIES};
use crate::services::registration::RegistrationContext;

const LIVE_INPUT_CLASS: &str = "w-full p-2 rounded bg-zinc-900 text-white border border-zinc-700 focus:border-purple-500 focus:ring-1 focus:ring-purple-500 outline-none transition-colors placeholder-zinc-500 disabled:opacity-60 disabled:cursor-not-allowed";

/// Multi-value answers are stored as one comma-joined string, so the
/// response map stays label -> string for every field type
pub fn split_choices(answer: &str) -> Vec<String> {
    answer
        .split(", ")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

pub fn toggle_choice(answer: &str, option: &str) -> String {
    let mut picked = split_choices(answer);
    if let Some(pos) = picked.iter().position(|p| p == option) {
        picked.remove(pos);
    } else {
        picked.push(option.to_string());
    }
    picked.join(", ")
}

#[component]
pub fn DetailsStep(ctx: RegistrationContext) -> impl IntoView {
    let handle_continue = move |_: ev::MouseEvent| {
        ctx.try_advance();
    };

    view! {
        <div class="space-y-6">
            {move || ctx.error.get().map(|message| view! {
                <div class="p-4 bg-red-900/30 border border-red-700/50 rounded-lg text-red-400 text-sm">
                    {message}
                </div>
            })}

            <div class="space-y-5">
                {move || {
                    ctx.fields
                        .get()
                        .into_iter()
                        .map(|field| view! { <LiveField ctx field /> })
                        .collect_view()
                }}
            </div>

            <div class="flex justify-end pt-2">
                <Button variant=ButtonVariant::Primary on_click=handle_continue>
                    "Continue"
                </Button>
            </div>
        </div>
    }
}

/// One live input, dispatched on the field type
#[component]
fn LiveField(ctx: RegistrationContext, field: Field) -> impl IntoView {
    let id = field.id.clone();
    let locked = ctx.is_locked(&id);

    // Tracks the whole answer map, but the memo only propagates when this
    // field's own value changes
    let value = {
        let id = id.clone();
        Memo::new(move |_| {
            ctx.answers
                .with(|map| map.get(&id).cloned().unwrap_or_default())
        })
    };

    let label = field.label.clone();
    let help_text = field.help_text.clone().filter(|t| !t.is_empty());
    let required = field.required;

    view! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-zinc-300">
                {label}
                {required.then(|| view! { <span class="text-red-400 ml-1">"*"</span> })}
                {locked.then(|| view! {
                    <span class="inline-flex items-center gap-1 ml-2 text-xs text-zinc-500">
                        <Icon icon=LOCK_SIMPLE size="12px" />
                        "From your profile"
                    </span>
                })}
            </label>
            <LiveInput ctx field value locked />
            {help_text.map(|text| view! { <p class="text-xs text-zinc-500">{text}</p> })}
        </div>
    }
}

#[component]
fn LiveInput(
    ctx: RegistrationContext,
    field: Field,
    value: Memo<String>,
    locked: bool,
) -> impl IntoView {
    let id = field.id.clone();
    let placeholder = display_placeholder(&field);

    match field.field_type {
        FieldType::Text | FieldType::Email | FieldType::Phone | FieldType::Url => {
            let input_type = match field.field_type {
                FieldType::Email => "email",
                FieldType::Phone => "tel",
                FieldType::Url => "url",
                _ => "text",
            };
            view! {
                <input
                    class=LIVE_INPUT_CLASS
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    disabled=locked
                    on:input=move |evt| ctx.set_answer(&id, event_target_value(&evt))
                />
            }
            .into_any()
        }
        FieldType::Number => view! {
            <input
                class=LIVE_INPUT_CLASS
                type="number"
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=locked
                on:input=move |evt| ctx.set_answer(&id, event_target_value(&evt))
            />
        }
        .into_any(),
        FieldType::Date => view! {
            <input
                class=LIVE_INPUT_CLASS
                type="date"
                prop:value=move || value.get()
                disabled=locked
                on:input=move |evt| ctx.set_answer(&id, event_target_value(&evt))
            />
        }
        .into_any(),
        FieldType::Textarea => view! {
            <textarea
                class=LIVE_INPUT_CLASS
                rows=3
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=locked
                on:input=move |evt| ctx.set_answer(&id, event_target_value(&evt))
            ></textarea>
        }
        .into_any(),
        FieldType::Address => view! {
            <textarea
                class=LIVE_INPUT_CLASS
                rows=3
                placeholder="Street, city, postcode"
                prop:value=move || value.get()
                disabled=locked
                on:input=move |evt| ctx.set_answer(&id, event_target_value(&evt))
            ></textarea>
        }
        .into_any(),
        FieldType::Dropdown => {
            let options = field.display_options();
            view! {
                <select
                    class=LIVE_INPUT_CLASS
                    prop:value=move || value.get()
                    disabled=locked
                    on:change=move |evt| ctx.set_answer(&id, event_target_value(&evt))
                >
                    <option value="">"Select an option"</option>
                    {options
                        .into_iter()
                        .map(|opt| view! { <option value=opt.clone()>{opt.clone()}</option> })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        FieldType::Country => view! {
            <select
                class=LIVE_INPUT_CLASS
                prop:value=move || value.get()
                disabled=locked
                on:change=move |evt| ctx.set_answer(&id, event_target_value(&evt))
            >
                <option value="">"Select a country"</option>
                {COUNTRIES
                    .iter()
                    .map(|c| view! {
                        <option value=c.name>{format!("{} {}", c.flag, c.name)}</option>
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldType::Radio => {
            let options = field.display_options();
            let group = id.clone();
            view! {
                <div class="space-y-2">
                    {options
                        .into_iter()
                        .map(|opt| {
                            let id = id.clone();
                            let group = group.clone();
                            let picked = opt.clone();
                            let checked = {
                                let opt = opt.clone();
                                move || value.get() == opt
                            };
                            view! {
                                <label class="flex items-center gap-2 cursor-pointer text-sm text-zinc-300">
                                    <input
                                        type="radio"
                                        name=group
                                        class="w-4 h-4 border-zinc-600 bg-zinc-800 text-purple-600 focus:ring-purple-500"
                                        prop:checked=checked
                                        disabled=locked
                                        on:change=move |_| ctx.set_answer(&id, picked.clone())
                                    />
                                    {opt}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        FieldType::Checkbox | FieldType::Multichoice => {
            let options = field.display_options();
            view! {
                <div class="space-y-2">
                    {options
                        .into_iter()
                        .map(|opt| {
                            let id = id.clone();
                            let picked = opt.clone();
                            let checked = {
                                let opt = opt.clone();
                                move || split_choices(&value.get()).iter().any(|p| p == &opt)
                            };
                            view! {
                                <label class="flex items-center gap-2 cursor-pointer text-sm text-zinc-300">
                                    <input
                                        type="checkbox"
                                        class="w-4 h-4 rounded border-zinc-600 bg-zinc-800 text-purple-600 focus:ring-purple-500"
                                        prop:checked=checked
                                        disabled=locked
                                        on:change=move |_| {
                                            let next = toggle_choice(&ctx.answer(&id), &picked);
                                            ctx.set_answer(&id, next);
                                        }
                                    />
                                    {opt}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        FieldType::File => {
            // Only the file name travels with the response
            let handle_file = move |evt: ev::Event| {
                let input = event_target::<web_sys::HtmlInputElement>(&evt);
                let name = input
                    .files()
                    .and_then(|files| files.get(0))
                    .map(|file| file.name())
                    .unwrap_or_default();
                ctx.set_answer(&id, name);
            };
            view! {
                <div class="space-y-1">
                    <input
                        class="block w-full text-sm text-zinc-400 file:mr-3 file:px-3 file:py-1.5 file:rounded file:border-0 file:bg-zinc-700 file:text-zinc-200 hover:file:bg-zinc-600 file:cursor-pointer"
                        type="file"
                        disabled=locked
                        on:change=handle_file
                    />
                    {move || {
                        let name = value.get();
                        (!name.is_empty()).then(|| view! {
                            <p class="text-xs text-zinc-500">{format!("Attached: {}", name)}</p>
                        })
                    }}
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let one = toggle_choice("", "Vegetarian");
        assert_eq!(one, "Vegetarian");

        let two = toggle_choice(&one, "Vegan");
        assert_eq!(two, "Vegetarian, Vegan");

        let back = toggle_choice(&two, "Vegetarian");
        assert_eq!(back, "Vegan");

        assert_eq!(toggle_choice(&back, "Vegan"), "");
    }

    #[test]
    fn split_ignores_blank_parts() {
        assert!(split_choices("").is_empty());
        assert_eq!(split_choices("Solo"), vec!["Solo"]);
        assert_eq!(split_choices("A, B"), vec!["A", "B"]);
    }
}
