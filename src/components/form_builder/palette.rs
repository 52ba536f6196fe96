//! Field Palette
//!
//! Left rail of the builder: one token per field type plus pre-configured
//! common tokens with suggested labels and options. Tokens are click-to-append
//! and drag sources for drop-to-add; pro types show a lock and are gated at
//! add time, not here.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{
    Icon, IconWeight, ARTICLE, CALENDAR_BLANK, CARET_CIRCLE_DOWN, CHECK_SQUARE, ENVELOPE_SIMPLE,
    GLOBE, HASH, LINK, LIST_CHECKS, LOCK_SIMPLE, MAP_PIN, PAPERCLIP, PHONE, RADIO_BUTTON, TEXT_T,
};

use crate::bindings::forms::FieldType;
use crate::services::entitlements::Entitlements;
use super::dnd::{use_drag_state, DragPayload, NewFieldSpec};

// ============================================================================
// Tokens
// ============================================================================

/// One palette entry. Preset tokens suggest a label and options; plain tokens
/// fall back to the type defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteToken {
    pub field_type: FieldType,
    pub label: Option<&'static str>,
    pub options: &'static [&'static str],
}

impl PaletteToken {
    const fn plain(field_type: FieldType) -> Self {
        Self {
            field_type,
            label: None,
            options: &[],
        }
    }

    const fn preset(
        field_type: FieldType,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            field_type,
            label: Some(label),
            options,
        }
    }

    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or_else(|| self.field_type.label())
    }

    pub fn payload(&self) -> DragPayload {
        DragPayload::New(NewFieldSpec {
            field_type: self.field_type,
            label: self.label.map(str::to_string),
            options: self.options.iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaletteGroup {
    Common,
    Basic,
    Choice,
    Advanced,
}

impl PaletteGroup {
    pub fn all() -> &'static [PaletteGroup] {
        &[
            PaletteGroup::Common,
            PaletteGroup::Basic,
            PaletteGroup::Choice,
            PaletteGroup::Advanced,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaletteGroup::Common => "Common",
            PaletteGroup::Basic => "Basic",
            PaletteGroup::Choice => "Choices",
            PaletteGroup::Advanced => "Advanced",
        }
    }
}

/// Ready-made fields event organizers reach for constantly
const COMMON_TOKENS: &[PaletteToken] = &[
    PaletteToken::preset(FieldType::Text, "Job title", &[]),
    PaletteToken::preset(FieldType::Text, "Company", &[]),
    PaletteToken::preset(FieldType::Phone, "Phone number", &[]),
    PaletteToken::preset(FieldType::Dropdown, "T-shirt size", &["S", "M", "L", "XL"]),
    PaletteToken::preset(
        FieldType::Radio,
        "Dietary requirements",
        &["None", "Vegetarian", "Vegan", "Gluten-free"],
    ),
    PaletteToken::preset(FieldType::Url, "LinkedIn profile", &[]),
];

/// Which group a plain type token is shown under
pub fn group_for(field_type: FieldType) -> PaletteGroup {
    match field_type {
        FieldType::Text
        | FieldType::Textarea
        | FieldType::Number
        | FieldType::Date
        | FieldType::Email
        | FieldType::Phone
        | FieldType::Url => PaletteGroup::Basic,
        FieldType::Dropdown | FieldType::Checkbox | FieldType::Radio | FieldType::Multichoice => {
            PaletteGroup::Choice
        }
        FieldType::File | FieldType::Country | FieldType::Address => PaletteGroup::Advanced,
    }
}

pub fn tokens_for(group: PaletteGroup) -> Vec<PaletteToken> {
    match group {
        PaletteGroup::Common => COMMON_TOKENS.to_vec(),
        _ => FieldType::all()
            .iter()
            .copied()
            .filter(|t| group_for(*t) == group)
            .map(PaletteToken::plain)
            .collect(),
    }
}

// ============================================================================
// Icons
// ============================================================================

/// The one icon each field type renders with, in the palette and on canvas rows
#[component]
pub fn FieldTypeIcon(
    field_type: FieldType,
    #[prop(default = "16px")] size: &'static str,
) -> impl IntoView {
    match field_type {
        FieldType::Text => view! { <Icon icon=TEXT_T size=size /> }.into_any(),
        FieldType::Textarea => view! { <Icon icon=ARTICLE size=size /> }.into_any(),
        FieldType::Dropdown => view! { <Icon icon=CARET_CIRCLE_DOWN size=size /> }.into_any(),
        FieldType::Checkbox => view! { <Icon icon=CHECK_SQUARE size=size /> }.into_any(),
        FieldType::Radio => view! { <Icon icon=RADIO_BUTTON size=size /> }.into_any(),
        FieldType::Date => view! { <Icon icon=CALENDAR_BLANK size=size /> }.into_any(),
        FieldType::File => view! { <Icon icon=PAPERCLIP size=size /> }.into_any(),
        FieldType::Number => view! { <Icon icon=HASH size=size /> }.into_any(),
        FieldType::Multichoice => view! { <Icon icon=LIST_CHECKS size=size /> }.into_any(),
        FieldType::Country => view! { <Icon icon=GLOBE size=size /> }.into_any(),
        FieldType::Email => view! { <Icon icon=ENVELOPE_SIMPLE size=size /> }.into_any(),
        FieldType::Phone => view! { <Icon icon=PHONE size=size /> }.into_any(),
        FieldType::Url => view! { <Icon icon=LINK size=size /> }.into_any(),
        FieldType::Address => view! { <Icon icon=MAP_PIN size=size /> }.into_any(),
    }
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn FieldPalette(
    /// Explicit plan entitlements; pro locks render from this
    entitlements: Entitlements,
    /// Invoked on click-to-append and consulted by the canvas on drop
    #[prop(into)]
    on_add: Callback<DragPayload>,
) -> impl IntoView {
    view! {
        <aside class="w-64 flex-shrink-0 overflow-y-auto border-r border-zinc-800 bg-zinc-950/50 p-3">
            <h3 class="text-sm font-semibold text-white mb-3">"Add a field"</h3>
            {PaletteGroup::all()
                .iter()
                .map(|group| view! { <PaletteSection group=*group entitlements on_add /> })
                .collect_view()}
        </aside>
    }
}

#[component]
fn PaletteSection(
    group: PaletteGroup,
    entitlements: Entitlements,
    on_add: Callback<DragPayload>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="text-[10px] font-bold uppercase tracking-wider text-zinc-500 px-1 mb-1.5">
                {group.label()}
            </div>
            <div class="flex flex-col gap-1">
                {tokens_for(group)
                    .into_iter()
                    .map(|token| view! { <PaletteEntry token entitlements on_add /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PaletteEntry(
    token: PaletteToken,
    entitlements: Entitlements,
    on_add: Callback<DragPayload>,
) -> impl IntoView {
    let drag = use_drag_state();
    let locked = !entitlements.allows_field(token.field_type);
    let drag_payload = token.payload();
    let click_payload = token.payload();

    let handle_dragstart = move |evt: ev::DragEvent| {
        // Firefox refuses to start a drag without data attached
        if let Some(dt) = evt.data_transfer() {
            let _ = dt.set_data("text/plain", token.display_label());
            dt.set_effect_allowed("copy");
        }
        drag.begin(drag_payload.clone());
    };

    view! {
        <button
            class="flex items-center gap-2 w-full px-2 py-1.5 rounded text-left text-sm text-zinc-300 bg-zinc-900 border border-zinc-800 hover:border-purple-500/50 hover:text-white cursor-grab active:cursor-grabbing transition-colors"
            draggable="true"
            on:dragstart=handle_dragstart
            on:dragend=move |_| drag.clear()
            on:click=move |_| on_add.run(click_payload.clone())
            title=format!("Add {}", token.display_label())
        >
            <span class="text-zinc-500">
                <FieldTypeIcon field_type=token.field_type />
            </span>
            <span class="truncate">{token.display_label()}</span>
            {locked.then(|| view! {
                <span class="ml-auto text-yellow-500" title="Pro plan required">
                    <Icon icon=LOCK_SIMPLE size="12px" weight=IconWeight::Fill />
                </span>
            })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_lives_in_exactly_one_group() {
        for group in [PaletteGroup::Basic, PaletteGroup::Choice, PaletteGroup::Advanced] {
            for token in tokens_for(group) {
                assert_eq!(group_for(token.field_type), group);
            }
        }
        let total: usize = [PaletteGroup::Basic, PaletteGroup::Choice, PaletteGroup::Advanced]
            .iter()
            .map(|g| tokens_for(*g).len())
            .sum();
        assert_eq!(total, FieldType::all().len());
    }

    #[test]
    fn test_advanced_group_is_all_pro() {
        assert!(tokens_for(PaletteGroup::Advanced)
            .iter()
            .all(|t| t.field_type.is_pro()));
        // Pro types outside the advanced group still exist
        assert!(tokens_for(PaletteGroup::Choice)
            .iter()
            .any(|t| t.field_type.is_pro()));
    }

    #[test]
    fn test_common_tokens_carry_suggestions() {
        let tokens = tokens_for(PaletteGroup::Common);
        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|t| t.label.is_some()));
        // Choice presets ship with their options
        assert!(tokens
            .iter()
            .filter(|t| t.field_type.is_choice())
            .all(|t| !t.options.is_empty()));
    }

    #[test]
    fn test_preset_payload_overrides_defaults() {
        let shirt = COMMON_TOKENS
            .iter()
            .find(|t| t.label == Some("T-shirt size"))
            .unwrap();
        let DragPayload::New(spec) = shirt.payload() else {
            panic!("palette tokens always drag new fields");
        };
        let field = spec.build();
        assert_eq!(field.field_type, FieldType::Dropdown);
        assert_eq!(field.label, "T-shirt size");
        assert_eq!(field.options, vec!["S", "M", "L", "XL"]);
        assert!(!field.is_system);
    }

    #[test]
    fn test_lock_follows_entitlements() {
        let free = Entitlements::free();
        let pro = Entitlements::pro();
        assert!(!free.allows_field(FieldType::Country));
        assert!(pro.allows_field(FieldType::Country));
        assert!(free.allows_field(FieldType::Text));
    }
}
