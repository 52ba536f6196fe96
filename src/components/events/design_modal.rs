//! Event Design Modal
//!
//! Edits the landing-page-facing fields of an event row: name, description,
//! hero image, and the accent color the landing renderer applies.

use leptos::ev;
use leptos::prelude::*;

use crate::bindings::events::{EventPatch, EventRecord};
use crate::components::design_system::{Button, ButtonVariant, Input, Modal, TextArea};

/// Only fields that differ from the stored row go into the patch; an empty
/// entry clears the stored value
pub fn diff_patch(
    original: &EventRecord,
    name: &str,
    description: &str,
    hero: &str,
    theme: &str,
) -> EventPatch {
    let differs = |entered: &str, stored: &Option<String>| {
        let entered = entered.trim();
        if entered == stored.as_deref().unwrap_or_default() {
            None
        } else {
            Some(entered.to_string())
        }
    };
    EventPatch {
        name: {
            let trimmed = name.trim();
            (trimmed != original.name && !trimmed.is_empty()).then(|| trimmed.to_string())
        },
        description: differs(description, &original.description),
        hero_image_url: differs(hero, &original.hero_image_url),
        theme_color: differs(theme, &original.theme_color),
    }
}

pub fn is_empty_patch(patch: &EventPatch) -> bool {
    patch.name.is_none()
        && patch.description.is_none()
        && patch.hero_image_url.is_none()
        && patch.theme_color.is_none()
}

#[component]
pub fn DesignModal(
    is_open: RwSignal<bool>,
    editing: RwSignal<Option<EventRecord>>,
    on_save: Callback<EventPatch>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let hero = RwSignal::new(String::new());
    let theme = RwSignal::new(String::new());

    // Seed the inputs each time the dialog opens
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        let Some(event) = editing.get_untracked() else {
            return;
        };
        name.set(event.name);
        description.set(event.description.unwrap_or_default());
        hero.set(event.hero_image_url.unwrap_or_default());
        theme.set(event.theme_color.unwrap_or_default());
    });

    let can_save = Signal::derive(move || !name.get().trim().is_empty());

    let handle_save = move |_: ev::MouseEvent| {
        if !can_save.get() {
            return;
        }
        let Some(original) = editing.get_untracked() else {
            return;
        };
        let patch = diff_patch(
            &original,
            &name.get(),
            &description.get(),
            &hero.get(),
            &theme.get(),
        );
        is_open.set(false);
        if is_empty_patch(&patch) {
            return;
        }
        on_save.run(patch);
    };

    let handle_cancel = move |_: ev::MouseEvent| {
        is_open.set(false);
    };

    view! {
        <Modal is_open=is_open title="Event design" class="w-full max-w-lg">
            <div class="p-6 space-y-4">
                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">
                        "Name" <span class="text-red-400 ml-1">"*"</span>
                    </label>
                    <Input value=name placeholder="Event name" />
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Description"</label>
                    <TextArea value=description rows=4 placeholder="What the event is about" />
                    <p class="text-xs text-zinc-500">"Markdown supported."</p>
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Hero image URL"</label>
                    <Input value=hero placeholder="https://example.com/hero.jpg" />
                    {move || {
                        let url = hero.get();
                        (!url.trim().is_empty()).then(|| view! {
                            <img
                                src=url.trim().to_string()
                                alt="Hero preview"
                                class="w-full h-24 object-cover rounded-lg border border-zinc-800"
                            />
                        })
                    }}
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Accent color"</label>
                    <div class="flex items-center gap-3">
                        <input
                            type="color"
                            class="w-10 h-10 rounded-lg border border-zinc-700 bg-zinc-800 cursor-pointer"
                            prop:value=move || theme.get()
                            on:input=move |evt| theme.set(event_target_value(&evt))
                        />
                        <Input value=theme placeholder="#7c3aed" class="flex-1" />
                    </div>
                    <p class="text-xs text-zinc-500">
                        "Used for links and highlights on the event page."
                    </p>
                </div>
            </div>

            <div class="px-6 py-4 border-t border-zinc-800 flex justify-end gap-3">
                <Button variant=ButtonVariant::Secondary on_click=handle_cancel>
                    "Cancel"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    on_click=handle_save
                    disabled=Signal::derive(move || !can_save.get())
                >
                    "Save design"
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EventRecord {
        EventRecord {
            id: "ev-1".to_string(),
            name: "DevConf".to_string(),
            description: Some("A conference.".to_string()),
            start_date: None,
            end_date: None,
            location: None,
            hero_image_url: Some("https://cdn.example.com/hero.jpg".to_string()),
            theme_color: None,
            owner_email: None,
            ticket_id: None,
            status: "published".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn unchanged_inputs_produce_an_empty_patch() {
        let original = record();
        let patch = diff_patch(
            &original,
            "DevConf",
            "A conference.",
            "https://cdn.example.com/hero.jpg",
            "",
        );
        assert!(is_empty_patch(&patch));
    }

    #[test]
    fn only_changed_fields_enter_the_patch() {
        let original = record();
        let patch = diff_patch(
            &original,
            "DevConf",
            "A better conference.",
            "https://cdn.example.com/hero.jpg",
            "#7c3aed",
        );
        assert_eq!(patch.name, None);
        assert_eq!(patch.description.as_deref(), Some("A better conference."));
        assert_eq!(patch.hero_image_url, None);
        assert_eq!(patch.theme_color.as_deref(), Some("#7c3aed"));
    }

    #[test]
    fn clearing_a_stored_value_sends_an_empty_string() {
        let original = record();
        let patch = diff_patch(&original, "DevConf", "A conference.", "", "");
        assert_eq!(patch.hero_image_url.as_deref(), Some(""));
    }

    #[test]
    fn blanking_the_name_is_ignored() {
        let original = record();
        let patch = diff_patch(&original, "  ", "A conference.", "https://cdn.example.com/hero.jpg", "");
        assert_eq!(patch.name, None);
    }
}
