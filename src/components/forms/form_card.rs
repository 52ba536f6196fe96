use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, TRASH};

use crate::bindings::{FormRecord, FormStatus, FormType};
use crate::components::design_system::{Badge, BadgeVariant};
use crate::services::form_store::{seeded_fields, FormDescriptor};

/// Accent styling per form type: (cover gradient, accent text). Total over
/// the closed enum; `Custom` doubles as the neutral fallback look.
pub fn color_for(form_type: FormType) -> (&'static str, &'static str) {
    match form_type {
        FormType::Registration => (
            "bg-gradient-to-br from-purple-900 to-indigo-950",
            "text-purple-300",
        ),
        FormType::Survey => (
            "bg-gradient-to-br from-cyan-900 to-blue-950",
            "text-cyan-200",
        ),
        FormType::Assessment => (
            "bg-gradient-to-br from-amber-700 to-amber-950",
            "text-amber-200",
        ),
        FormType::Feedback => (
            "bg-gradient-to-br from-emerald-800 to-teal-950",
            "text-emerald-200",
        ),
        FormType::DataCollection => (
            "bg-gradient-to-br from-sky-800 to-slate-950",
            "text-sky-200",
        ),
        FormType::Application => (
            "bg-gradient-to-br from-rose-900 to-pink-950",
            "text-rose-200",
        ),
        FormType::Submission => (
            "bg-gradient-to-br from-fuchsia-900 to-purple-950",
            "text-fuchsia-300",
        ),
        FormType::Custom => (
            "bg-gradient-to-br from-zinc-700 to-zinc-900",
            "text-zinc-300",
        ),
    }
}

fn status_variant(status: FormStatus) -> BadgeVariant {
    match status {
        FormStatus::Active => BadgeVariant::Success,
        FormStatus::Draft => BadgeVariant::Default,
        FormStatus::Locked => BadgeVariant::Warning,
    }
}

/// One tile on the forms dashboard.
///
/// The default registration card renders from its descriptor alone until the
/// backing row is materialized on first open, so `record` may be absent.
#[component]
pub fn FormCard(
    descriptor: FormDescriptor,
    record: Option<FormRecord>,
    on_open: Callback<FormDescriptor>,
    on_delete: Callback<FormRecord>,
) -> impl IntoView {
    let (bg_class, text_class) = color_for(descriptor.form_type);
    let initial = descriptor.title.chars().next().unwrap_or('?');

    let field_count = record
        .as_ref()
        .map(|f| f.schema.fields.len())
        .unwrap_or_else(|| seeded_fields(descriptor.form_key.as_deref()).len());
    let status = record.as_ref().map(|f| f.status).unwrap_or(descriptor.status);

    let title = descriptor.title.clone();
    let description = descriptor.description.clone().unwrap_or_default();
    let type_label = descriptor.form_type.label();
    let is_default = descriptor.is_default;

    let open_descriptor = descriptor.clone();
    let handle_click = move |_: ev::MouseEvent| {
        on_open.run(open_descriptor.clone());
    };

    let has_record = record.is_some();
    let handle_delete = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        if let Some(form) = record.clone() {
            on_delete.run(form);
        }
    };

    view! {
        <div
            class="group relative aspect-[3/4] bg-zinc-900 rounded-xl overflow-hidden shadow-2xl border border-zinc-800 hover:border-zinc-600 transition-all hover:-translate-y-1 cursor-pointer"
            on:click=handle_click
        >
            // "Cover art" background
            <div class=format!("absolute inset-0 {} opacity-20 group-hover:opacity-30 transition-opacity", bg_class)></div>

            <div class="relative h-full flex flex-col p-6">
                // Top badges
                <div class="flex justify-between items-start">
                    <div class="flex items-center gap-2">
                        <span class=format!("inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-zinc-800 border border-zinc-700 {}", text_class)>
                            {type_label}
                        </span>
                        {is_default.then(|| view! {
                            <Badge variant=BadgeVariant::Info>"Default"</Badge>
                        })}
                    </div>

                    // Delete button (visible on hover); only forms with a
                    // backing row can be deleted
                    {has_record.then(|| view! {
                        <button
                            class="opacity-0 group-hover:opacity-100 p-2 text-zinc-400 hover:text-red-400 transition-all"
                            on:click=handle_delete
                            title="Delete form"
                        >
                            <Icon icon=TRASH size="16px" />
                        </button>
                    })}
                </div>

                // Center initial (placeholder art)
                <div class="flex-1 flex items-center justify-center">
                    <span class=format!("text-8xl font-black {} opacity-20 select-none group-hover:scale-110 transition-transform duration-500", text_class)>
                        {initial.to_string()}
                    </span>
                </div>

                // Bottom info
                <div class="space-y-2">
                    <h3 class="text-xl font-bold text-white leading-tight group-hover:text-purple-300 transition-colors">
                        {title}
                    </h3>
                    {(!description.is_empty()).then(|| view! {
                        <p class="text-xs text-zinc-400 line-clamp-2">{description.clone()}</p>
                    })}

                    <div class="pt-4 flex items-center gap-3 text-xs font-medium text-zinc-500 border-t border-white/5">
                        <div class="flex items-center gap-1">
                            <span>{field_count}</span>
                            {if field_count == 1 { " field" } else { " fields" }}
                        </div>
                        <Badge variant=status_variant(status)>{status.label()}</Badge>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_type_has_an_accent() {
        for form_type in FormType::all() {
            let (bg, text) = color_for(*form_type);
            assert!(bg.starts_with("bg-gradient-to-br"));
            assert!(text.starts_with("text-"));
        }
    }

    #[test]
    fn custom_falls_back_to_the_neutral_look() {
        let (bg, text) = color_for(FormType::Custom);
        assert!(bg.contains("zinc"));
        assert!(text.contains("zinc"));
    }
}
