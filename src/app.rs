use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::design_system::ToastContainer;
use crate::components::events::EventsPage;
use crate::components::form_builder::BuilderShell;
use crate::components::forms::FormsPage;
use crate::components::landing::LandingPage;
use crate::components::registration::RegisterPage;
use crate::components::sponsors::SponsorsPage;
use crate::services::form_store::provide_form_store;
use crate::services::notification_service::provide_notification_state;

/// Event id from a `/event/...` path, if any
pub fn current_event_id(path: &str) -> Option<String> {
    let mut parts = path.split('/').filter(|p| !p.is_empty());
    if parts.next() != Some("event") {
        return None;
    }
    parts.next().map(str::to_string)
}

/// The chrome section a path belongs to: the segment after the event id,
/// empty for the landing page itself
pub fn current_section(path: &str) -> Option<String> {
    let mut parts = path.split('/').filter(|p| !p.is_empty());
    if parts.next() != Some("event") {
        return None;
    }
    parts.next()?;
    Some(parts.next().unwrap_or("").to_string())
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1.5 rounded-lg text-sm font-medium bg-zinc-800 text-white"
    } else {
        "px-3 py-1.5 rounded-lg text-sm font-medium text-zinc-400 hover:text-white hover:bg-zinc-900 transition-colors"
    }
}

/// Top bar: product name plus tabs for the event the path points into
#[component]
fn NavBar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="sticky top-0 z-40 bg-zinc-950/80 backdrop-blur border-b border-zinc-900">
            <div class="max-w-7xl mx-auto px-4 h-14 flex items-center gap-6">
                <a href="/" class="text-lg font-extrabold tracking-tight text-white">
                    "Eventra"
                </a>
                {move || {
                    let path = pathname.get();
                    current_event_id(&path).map(|id| {
                        let section = current_section(&path).unwrap_or_default();
                        view! {
                            <div class="flex items-center gap-1">
                                <a
                                    href=format!("/event/{id}")
                                    class=tab_class(section.is_empty())
                                >
                                    "Page"
                                </a>
                                <a
                                    href=format!("/event/{id}/forms")
                                    class=tab_class(section == "forms")
                                >
                                    "Forms"
                                </a>
                                <a
                                    href=format!("/event/{id}/sponsors")
                                    class=tab_class(section == "sponsors")
                                >
                                    "Sponsors"
                                </a>
                            </div>
                        }
                    })
                }}
            </div>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Global services; the store needs the notifier in place first
    provide_notification_state();
    provide_form_store();

    view! {
        <Router>
            <NavBar />
            <Routes fallback=|| view! {
                <div class="min-h-screen bg-zinc-950 flex items-center justify-center">
                    <p class="text-zinc-400">"Page not found."</p>
                </div>
            }>
                <Route path=path!("/") view=EventsPage />
                <Route path=path!("/event/:event_id") view=LandingPage />
                <Route path=path!("/event/:event_id/register") view=RegisterPage />
                <Route path=path!("/event/:event_id/forms") view=FormsPage />
                <Route path=path!("/event/:event_id/forms/:form_id") view=BuilderShell />
                <Route path=path!("/event/:event_id/sponsors") view=SponsorsPage />
            </Routes>
            <ToastContainer />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_paths_expose_their_id() {
        assert_eq!(current_event_id("/event/ev-1/forms").as_deref(), Some("ev-1"));
        assert_eq!(current_event_id("/event/ev-1").as_deref(), Some("ev-1"));
        assert_eq!(current_event_id("/"), None);
        assert_eq!(current_event_id("/events"), None);
    }

    #[test]
    fn sections_follow_the_event_id() {
        assert_eq!(current_section("/event/ev-1").as_deref(), Some(""));
        assert_eq!(current_section("/event/ev-1/forms").as_deref(), Some("forms"));
        assert_eq!(
            current_section("/event/ev-1/forms/f-9").as_deref(),
            Some("forms")
        );
        assert_eq!(
            current_section("/event/ev-1/sponsors").as_deref(),
            Some("sponsors")
        );
        assert_eq!(current_section("/"), None);
    }
}
