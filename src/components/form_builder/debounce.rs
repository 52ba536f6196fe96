//! Debounced Field Editing
//!
//! The properties panel pushes a fresh `Field` value on every keystroke.
//! Persisting each of those would hammer the schema store, so edits are
//! coalesced behind a short fixed delay before reaching `update_field`.

use leptos::prelude::*;

use crate::bindings::forms::Field;
use crate::services::form_store::{FormStore, SaveStatus};

// ============================================================================
// Debounce Constants
// ============================================================================

/// Delay between a keystroke in the properties panel and the field push
pub const FIELD_EDIT_DEBOUNCE_MS: u64 = 300;

// ============================================================================
// Debounced Field Push
// ============================================================================

/// Creates a debounced wrapper around a field-update callback
///
/// Returns a callback that can be called on every change; the wrapped `push`
/// only runs after the delay, carrying whatever value arrived last.
///
/// Note: the timer is not cancellable once armed. The latest value is read at
/// fire time, so a burst of edits inside one window still pushes the final
/// state, and the schema store's own autosave debounce absorbs anything more.
/// The timer body uses `try_get`/`try_set` so a fire after the owning panel
/// unmounted is a no-op instead of a disposed-signal panic.
pub fn use_debounced_field_push(push: Callback<Field>, delay_ms: u64) -> Callback<Field> {
    let pending: RwSignal<Option<Field>> = RwSignal::new(None);
    let debounce_active = RwSignal::new(false);

    Callback::new(move |field: Field| {
        // Store the latest value
        pending.set(Some(field));

        // If a timer is already armed it will pick up the new value
        if debounce_active.get() {
            return;
        }

        debounce_active.set(true);

        gloo_timers::callback::Timeout::new(delay_ms as u32, move || {
            if let Some(field) = pending.try_get().flatten() {
                push.run(field);
            }
            let _ = pending.try_set(None);
            let _ = debounce_active.try_set(false);
        })
        .forget(); // Prevent drop from cancelling the timer
    })
}

// ============================================================================
// Save Status Chip
// ============================================================================

/// Compact persistence indicator for the builder header
#[component]
pub fn SaveStatusChip(store: FormStore) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 text-xs">
            {move || {
                match store.save_status.get() {
                    SaveStatus::Idle => view! {
                        <span class="text-zinc-600">"All changes saved"</span>
                    }.into_any(),
                    SaveStatus::Pending => view! {
                        <div class="flex items-center gap-1.5 text-amber-400">
                            <div class="w-2 h-2 bg-amber-400 rounded-full animate-pulse" />
                            <span>"Unsaved changes"</span>
                        </div>
                    }.into_any(),
                    SaveStatus::Saving => view! {
                        <div class="flex items-center gap-1.5 text-purple-400">
                            <svg class="w-3 h-3 animate-spin" fill="none" viewBox="0 0 24 24">
                                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" />
                                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z" />
                            </svg>
                            <span>"Saving..."</span>
                        </div>
                    }.into_any(),
                    SaveStatus::Committed => view! {
                        <div class="flex items-center gap-1.5 text-green-400">
                            <svg class="w-3 h-3" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
                            </svg>
                            <span>
                                {move || {
                                    store
                                        .last_save
                                        .get()
                                        .map(|t| format!("Saved {}", format_save_time(&t)))
                                        .unwrap_or_else(|| "Saved".to_string())
                                }}
                            </span>
                        </div>
                    }.into_any(),
                    SaveStatus::Failed => view! {
                        <div class="flex items-center gap-1.5 text-red-400">
                            <svg class="w-3 h-3" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                    d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
                            </svg>
                            <span>"Save failed"</span>
                            <button
                                type="button"
                                class="text-red-300 hover:text-red-200 underline"
                                title={move || store.last_error.get().unwrap_or_default()}
                                on:click=move |_| {
                                    store.save_now(false);
                                }
                            >
                                "Retry"
                            </button>
                        </div>
                    }.into_any(),
                }
            }}
        </div>
    }
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Format a save timestamp for display
pub fn format_save_time(timestamp: &str) -> String {
    let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(timestamp) else {
        return "recently".to_string();
    };

    let elapsed = chrono::Utc::now().signed_duration_since(parsed.with_timezone(&chrono::Utc));

    let seconds = elapsed.num_seconds();
    if seconds < 5 {
        "just now".to_string()
    } else if seconds < 60 {
        format!("{}s ago", seconds)
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else {
        parsed.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_save_time_just_now() {
        let now = chrono::Utc::now().to_rfc3339();
        assert_eq!(format_save_time(&now), "just now");
    }

    #[test]
    fn test_format_save_time_seconds() {
        let stamp = (chrono::Utc::now() - chrono::Duration::seconds(42)).to_rfc3339();
        assert_eq!(format_save_time(&stamp), "42s ago");
    }

    #[test]
    fn test_format_save_time_minutes() {
        let stamp = (chrono::Utc::now() - chrono::Duration::minutes(7)).to_rfc3339();
        assert_eq!(format_save_time(&stamp), "7m ago");
    }

    #[test]
    fn test_format_save_time_old_falls_back_to_clock() {
        let stamp = (chrono::Utc::now() - chrono::Duration::hours(3)).to_rfc3339();
        let shown = format_save_time(&stamp);
        assert!(shown.contains(':'), "expected HH:MM, got {shown}");
    }

    #[test]
    fn test_format_save_time_garbage_input() {
        assert_eq!(format_save_time("not a timestamp"), "recently");
    }
}
