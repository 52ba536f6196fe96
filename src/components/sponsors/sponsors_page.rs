//! Sponsors Management
//!
//! Add, edit, and remove the sponsors of one event. The tier picked here
//! drives the grouping on the public landing page.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use phosphor_leptos::{Icon, GLOBE, PENCIL_SIMPLE, PLUS, TRASH};

use crate::bindings::sponsors::{
    delete_event_sponsor, insert_event_sponsor, list_event_sponsors, update_event_sponsor,
    SponsorInsert, SponsorRecord, SponsorTier,
};
use crate::components::design_system::{
    Button, ButtonVariant, Input, LoadingSpinner, Modal, Select,
};
use crate::services::notification_service::{show_error, show_success, ToastAction};

#[derive(Params, PartialEq, Clone, Default)]
pub struct SponsorsParams {
    pub event_id: Option<String>,
}

/// Chip classes per tier; total over the closed enum
pub fn tier_accent(tier: SponsorTier) -> &'static str {
    match tier {
        SponsorTier::Platinum => "bg-zinc-200/10 text-zinc-100 border-zinc-400/30",
        SponsorTier::Gold => "bg-amber-900/40 text-amber-300 border-amber-700/40",
        SponsorTier::Silver => "bg-zinc-700/40 text-zinc-300 border-zinc-600/40",
        SponsorTier::Community => "bg-purple-900/40 text-purple-300 border-purple-700/40",
    }
}

/// Label back to variant; unrecognized input lands on the default tier
fn tier_from_label(label: &str) -> SponsorTier {
    SponsorTier::all()
        .iter()
        .copied()
        .find(|t| t.label() == label)
        .unwrap_or_default()
}

/// Dialog shared by the add and edit flows. Seeds its inputs from `editing`
/// each time it opens; emits a filled insert, leaving the add-or-update
/// decision with the page.
#[component]
fn SponsorModal(
    is_open: RwSignal<bool>,
    editing: RwSignal<Option<SponsorRecord>>,
    event_id: Memo<String>,
    on_save: Callback<SponsorInsert>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let logo = RwSignal::new(String::new());
    let tier = RwSignal::new(SponsorTier::default());

    // Seed the inputs each time the dialog opens
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        match editing.get_untracked() {
            Some(sponsor) => {
                name.set(sponsor.name);
                website.set(sponsor.website_url.unwrap_or_default());
                logo.set(sponsor.logo_url.unwrap_or_default());
                tier.set(sponsor.tier);
            }
            None => {
                name.set(String::new());
                website.set(String::new());
                logo.set(String::new());
                tier.set(SponsorTier::default());
            }
        }
    });

    let can_save = Signal::derive(move || !name.get().trim().is_empty());

    let non_blank = |value: String| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    let handle_save = move |_: ev::MouseEvent| {
        if !can_save.get() {
            return;
        }
        let insert = SponsorInsert {
            event_id: event_id.get_untracked(),
            name: name.get().trim().to_string(),
            website_url: non_blank(website.get()),
            logo_url: non_blank(logo.get()),
            tier: tier.get(),
        };
        is_open.set(false);
        on_save.run(insert);
    };

    let handle_cancel = move |_: ev::MouseEvent| {
        is_open.set(false);
    };

    // The modal shell renders once, so the header stays mode-neutral; the
    // footer button carries the add-or-edit wording
    view! {
        <Modal is_open=is_open title="Sponsor details" class="w-full max-w-md">
            <div class="p-6 space-y-4">
                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">
                        "Name" <span class="text-red-400 ml-1">"*"</span>
                    </label>
                    <Input value=name placeholder="e.g. Acme Corp" />
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Tier"</label>
                    <Select
                        value=Signal::derive(move || tier.get().label().to_string())
                        on_change=Callback::new(move |picked: String| {
                            tier.set(tier_from_label(&picked));
                        })
                    >
                        {SponsorTier::all()
                            .iter()
                            .map(|t| view! { <option value=t.label()>{t.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Website"</label>
                    <Input value=website placeholder="https://example.com" />
                </div>

                <div class="space-y-2">
                    <label class="block text-sm font-medium text-zinc-300">"Logo URL"</label>
                    <Input value=logo placeholder="https://example.com/logo.svg" />
                    <p class="text-xs text-zinc-500">
                        "Shown on the landing page; the name is used when empty."
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
                    {move || if editing.get().is_some() { "Save changes" } else { "Add sponsor" }}
                </Button>
            </div>
        </Modal>
    }
}

#[component]
fn SponsorRow(
    sponsor: SponsorRecord,
    on_edit: Callback<SponsorRecord>,
    on_delete: Callback<SponsorRecord>,
) -> impl IntoView {
    let initials: String = sponsor
        .name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect();
    let initials = if initials.is_empty() {
        sponsor.name.chars().next().unwrap_or('?').to_string()
    } else {
        initials
    };

    let chip_class = tier_accent(sponsor.tier);
    let name = sponsor.name.clone();
    let website = sponsor.website_url.clone();
    let logo = sponsor.logo_url.clone();

    let edit_record = sponsor.clone();
    let handle_edit = move |_: ev::MouseEvent| {
        on_edit.run(edit_record.clone());
    };
    let delete_record = sponsor.clone();
    let handle_delete = move |_: ev::MouseEvent| {
        on_delete.run(delete_record.clone());
    };

    view! {
        <div class="flex items-center gap-4 p-4 bg-zinc-900 border border-zinc-800 rounded-lg hover:border-zinc-700 transition-colors group">
            // Logo or initials avatar
            <div class="w-12 h-12 rounded-lg bg-zinc-800 flex items-center justify-center overflow-hidden shrink-0">
                {match logo {
                    Some(url) => view! {
                        <img src=url alt=name.clone() class="w-full h-full object-contain" />
                    }
                    .into_any(),
                    None => view! {
                        <span class="text-lg font-bold text-zinc-400 select-none">
                            {initials}
                        </span>
                    }
                    .into_any(),
                }}
            </div>

            <div class="flex-1 min-w-0">
                <div class="flex items-center gap-2">
                    <span class="font-medium text-white truncate">{name}</span>
                    <span class=format!(
                        "px-2 py-0.5 rounded-full text-[10px] font-bold uppercase tracking-wider border {}",
                        chip_class
                    )>
                        {sponsor.tier.label()}
                    </span>
                </div>
                {website.map(|url| view! {
                    <a
                        href=url.clone()
                        target="_blank"
                        rel="noopener"
                        class="inline-flex items-center gap-1 text-xs text-zinc-500 hover:text-purple-400 transition-colors"
                    >
                        <Icon icon=GLOBE size="12px" />
                        {url.clone()}
                    </a>
                })}
            </div>

            <div class="flex items-center gap-1 opacity-0 group-hover:opacity-100 transition-opacity">
                <button
                    class="p-2 rounded-lg text-zinc-400 hover:text-white hover:bg-zinc-800 transition-colors"
                    title="Edit sponsor"
                    on:click=handle_edit
                >
                    <Icon icon=PENCIL_SIMPLE size="16px" />
                </button>
                <button
                    class="p-2 rounded-lg text-zinc-400 hover:text-red-400 hover:bg-red-900/30 transition-colors"
                    title="Delete sponsor"
                    on:click=handle_delete
                >
                    <Icon icon=TRASH size="16px" />
                </button>
            </div>
        </div>
    }
}

/// Sponsor management page, routed as `/event/:event_id/sponsors`
#[component]
pub fn SponsorsPage() -> impl IntoView {
    let params = use_params::<SponsorsParams>();
    let event_id = Memo::new(move |_| {
        params.get().ok().and_then(|p| p.event_id).unwrap_or_default()
    });

    let navigate = use_navigate();

    let sponsors = RwSignal::new(Vec::<SponsorRecord>::new());
    let is_loading = RwSignal::new(true);
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(Option::<SponsorRecord>::None);
    let delete_confirm = RwSignal::new(Option::<SponsorRecord>::None);

    let refresh = Trigger::new();
    Effect::new(move |_| {
        refresh.track();
        let eid = event_id.get();
        if eid.is_empty() {
            return;
        }
        spawn_local(async move {
            is_loading.set(true);
            match list_event_sponsors(eid).await {
                Ok(mut list) => {
                    // Tier order first, name within a tier
                    list.sort_by(|a, b| {
                        let rank = |t: SponsorTier| {
                            SponsorTier::all().iter().position(|x| *x == t).unwrap_or(usize::MAX)
                        };
                        rank(a.tier).cmp(&rank(b.tier)).then_with(|| a.name.cmp(&b.name))
                    });
                    sponsors.set(list);
                }
                Err(e) => {
                    let retry = Some(ToastAction {
                        label: "Retry".to_string(),
                        handler: Arc::new(move || refresh.notify()),
                    });
                    show_error("Failed to load sponsors", Some(&e), retry);
                }
            }
            is_loading.set(false);
        });
    });

    let open_add = move |_: ev::MouseEvent| {
        editing.set(None);
        show_modal.set(true);
    };

    let on_edit = Callback::new(move |sponsor: SponsorRecord| {
        editing.set(Some(sponsor));
        show_modal.set(true);
    });

    let handle_save = Callback::new(move |insert: SponsorInsert| {
        let target = editing.get_untracked();
        spawn_local(async move {
            let outcome = match &target {
                Some(existing) => update_event_sponsor(existing.id.clone(), insert).await,
                None => insert_event_sponsor(insert).await,
            };
            match outcome {
                Ok(saved) => {
                    let title = if target.is_some() { "Sponsor updated" } else { "Sponsor added" };
                    show_success(title, Some(&saved.name));
                    refresh.notify();
                }
                Err(e) => show_error("Failed to save sponsor", Some(&e), None),
            }
        });
    });

    let on_delete = Callback::new(move |sponsor: SponsorRecord| {
        delete_confirm.set(Some(sponsor));
    });

    let handle_confirm_delete = move |_: ev::MouseEvent| {
        if let Some(sponsor) = delete_confirm.get() {
            spawn_local(async move {
                match delete_event_sponsor(sponsor.id.clone()).await {
                    Ok(()) => {
                        show_success("Sponsor deleted", Some(&sponsor.name));
                        delete_confirm.set(None);
                        refresh.notify();
                    }
                    Err(e) => {
                        show_error("Failed to delete sponsor", Some(&e), None);
                        // Dialog stays open so the user can retry
                    }
                }
            });
        }
    };

    let handle_cancel_delete = move |_: ev::MouseEvent| {
        delete_confirm.set(None);
    };

    let nav_back = navigate.clone();
    let nav_to_event = move |_: ev::MouseEvent| {
        nav_back(&format!("/event/{}", event_id.get_untracked()), Default::default());
    };

    view! {
        <div class="p-8 bg-zinc-950 text-zinc-100 min-h-screen font-sans selection:bg-purple-500/30">
            <div class="max-w-3xl mx-auto space-y-8">
                // Header
                <div class="flex flex-col md:flex-row md:items-end justify-between gap-4 pb-6 border-b border-zinc-900">
                    <div class="space-y-1">
                        <button
                            class="text-zinc-500 hover:text-white transition-colors text-sm font-medium"
                            on:click=nav_to_event
                        >
                            "< Back to event"
                        </button>
                        <h1 class="text-4xl font-extrabold tracking-tight bg-clip-text text-transparent bg-gradient-to-r from-white to-zinc-500">
                            "Sponsors"
                        </h1>
                        <p class="text-zinc-400">"Logos and tiers shown on the landing page."</p>
                    </div>
                    <Button variant=ButtonVariant::Primary on_click=open_add>
                        <Icon icon=PLUS size="16px" />
                        "Add sponsor"
                    </Button>
                </div>

                // Sponsor list
                {move || {
                    if is_loading.get() {
                        return view! {
                            <div class="flex justify-center py-20">
                                <LoadingSpinner size="lg" />
                            </div>
                        }
                        .into_any();
                    }

                    let list = sponsors.get();
                    if list.is_empty() {
                        return view! {
                            <div class="text-center py-20 space-y-2">
                                <p class="text-zinc-400">"No sponsors yet."</p>
                                <p class="text-sm text-zinc-500">
                                    "Add one to feature it on the event page."
                                </p>
                            </div>
                        }
                        .into_any();
                    }

                    view! {
                        <div class="space-y-3">
                            {list
                                .into_iter()
                                .map(|sponsor| view! {
                                    <SponsorRow sponsor on_edit on_delete />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>

            <SponsorModal is_open=show_modal editing event_id on_save=handle_save />

            // Delete confirmation
            <Show when=move || delete_confirm.get().is_some()>
                <div class="fixed inset-0 bg-black/60 backdrop-blur-sm z-50 flex items-center justify-center">
                    <div class="bg-zinc-900 border border-zinc-800 rounded-xl shadow-2xl w-full max-w-sm mx-4 p-6">
                        <h3 class="text-lg font-bold text-white mb-2">"Delete sponsor?"</h3>
                        <p class="text-zinc-400 mb-6">
                            "Are you sure you want to delete "
                            <span class="text-white font-medium">
                                {move || delete_confirm.get().map(|s| s.name).unwrap_or_default()}
                            </span>
                            "? This action cannot be undone."
                        </p>
                        <div class="flex justify-end gap-3">
                            <Button variant=ButtonVariant::Secondary on_click=handle_cancel_delete>
                                "Cancel"
                            </Button>
                            <Button variant=ButtonVariant::Danger on_click=handle_confirm_delete>
                                "Delete"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_a_distinct_chip() {
        let mut seen = Vec::new();
        for tier in SponsorTier::all() {
            let chip = tier_accent(*tier);
            assert!(!seen.contains(&chip), "{} reuses a chip style", tier.label());
            seen.push(chip);
        }
    }

    #[test]
    fn every_tier_label_parses_back_to_itself() {
        for tier in SponsorTier::all() {
            assert_eq!(tier_from_label(tier.label()), *tier);
        }
    }

    #[test]
    fn unknown_tier_label_falls_back_to_default() {
        assert_eq!(tier_from_label("Diamond"), SponsorTier::Silver);
    }
}
