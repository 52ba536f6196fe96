use leptos::ev;
use leptos::prelude::*;

use crate::bindings::FormType;
use crate::components::design_system::{Button, ButtonVariant, Input, Modal, Select, TextArea};
use crate::services::form_store::FormDescriptor;

/// Label back to variant; unrecognized input lands on the default type
fn type_from_label(label: &str) -> FormType {
    FormType::all()
        .iter()
        .copied()
        .find(|t| t.label() == label)
        .unwrap_or_default()
}

/// Dialog for creating a form beyond the default registration one.
///
/// Emits a blank descriptor through `on_create`; the page owns the insert
/// and the navigation into the builder.
#[component]
pub fn CreateFormModal(
    is_open: RwSignal<bool>,
    on_create: Callback<FormDescriptor>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let form_type = RwSignal::new(FormType::Survey);
    let description = RwSignal::new(String::new());

    let reset = move || {
        title.set(String::new());
        form_type.set(FormType::Survey);
        description.set(String::new());
    };

    let can_create = Signal::derive(move || !title.get().trim().is_empty());

    let handle_create = move |_: ev::MouseEvent| {
        if !can_create.get() {
            return;
        }
        let mut descriptor = FormDescriptor::blank(title.get().trim().to_string(), form_type.get());
        let about = description.get();
        if !about.trim().is_empty() {
            descriptor.description = Some(about.trim().to_string());
        }
        reset();
        is_open.set(false);
        on_create.run(descriptor);
    };

    let handle_cancel = move |_: ev::MouseEvent| {
        reset();
        is_open.set(false);
    };

    view! {
        <Modal is_open=is_open title="Create a form" class="w-full max-w-md">
            <div class="p-6 space-y-4">
                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">
                        "Title" <span class="text-red-400 ml-1">"*"</span>
                    </label>
                    <Input value=title placeholder="e.g. Speaker intake" />
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Type"</label>
                    <Select
                        value=Signal::derive(move || form_type.get().label().to_string())
                        on_change=Callback::new(move |picked: String| {
                            form_type.set(type_from_label(&picked));
                        })
                    >
                        {FormType::all()
                            .iter()
                            .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Description"</label>
                    <TextArea value=description rows=2 placeholder="Shown on the dashboard card" />
                    <p class="text-xs text-zinc-500">"Optional."</p>
                </div>
            </div>

            <div class="px-6 py-4 border-t border-zinc-800 flex justify-end gap-3">
                <Button variant=ButtonVariant::Secondary on_click=handle_cancel>
                    "Cancel"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    on_click=handle_create
                    disabled=Signal::derive(move || !can_create.get())
                >
                    "Create form"
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_label_parses_back_to_itself() {
        for form_type in FormType::all() {
            assert_eq!(type_from_label(form_type.label()), *form_type);
        }
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        assert_eq!(type_from_label("Raffle"), FormType::Registration);
    }
}
