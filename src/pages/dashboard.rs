//! Customer dashboard listing the inventory with search and purchase.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route for customers. The page owns its inventory
//! snapshot: fetched once on mount, replaced wholesale by every search,
//! and re-fetched after each purchase rather than patched in place, so
//! the server stays the source of truth for stock counts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::banners::ErrorBanner;
use crate::components::navbar::Navbar;
use crate::components::sweet_card::SweetCard;
use crate::net::types::Sweet;
use crate::state::session::SessionState;
use crate::util::guard::{self, GuardDecision};

/// How a search submission resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SearchPlan {
    /// Blank query; re-fetch the unfiltered list instead of searching.
    FetchAll,
    /// Call the search endpoint with the raw query.
    Query(String),
}

/// Plan a search submission. Blank and whitespace-only queries fall back
/// to a full fetch; anything else travels to the server verbatim.
pub(crate) fn search_plan(raw: &str) -> SearchPlan {
    if raw.trim().is_empty() {
        SearchPlan::FetchAll
    } else {
        SearchPlan::Query(raw.to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// Replace the inventory snapshot with a fresh unfiltered fetch.
#[cfg(feature = "hydrate")]
async fn load_sweets(
    session: RwSignal<SessionState>,
    sweets: RwSignal<Vec<Sweet>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    loading.set(true);
    let credential = session.get_untracked().credential();
    match crate::net::api::fetch_sweets(credential.as_deref()).await {
        Ok(items) => {
            sweets.set(items);
            error.set(None);
        }
        Err(err) => error.set(Some(err.message_or("Failed to load sweets. Please try again."))),
    }
    loading.set(false);
}

/// Replace the inventory snapshot with search results.
#[cfg(feature = "hydrate")]
async fn run_search(
    session: RwSignal<SessionState>,
    sweets: RwSignal<Vec<Sweet>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    query: String,
) {
    loading.set(true);
    let credential = session.get_untracked().credential();
    match crate::net::api::search_sweets(credential.as_deref(), &query).await {
        Ok(items) => {
            sweets.set(items);
            error.set(None);
        }
        Err(err) => error.set(Some(err.message_or("Search failed. Please try again."))),
    }
    loading.set(false);
}

/// Customer dashboard page. Redirects to `/login` when signed out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(session, false, navigate);

    let sweets = RwSignal::new(Vec::<Sweet>::new());
    let search_query = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Fetch once, as soon as the restored session is allowed to view this
    // page. Runs at most one request per mount.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = session.get();
        if guard::decide_state(&state, false) != Some(GuardDecision::Allow) {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_sweets(session, sweets, loading, error));
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let plan = search_plan(&search_query.get());
        #[cfg(feature = "hydrate")]
        {
            match plan {
                SearchPlan::FetchAll => {
                    leptos::task::spawn_local(load_sweets(session, sweets, loading, error));
                }
                SearchPlan::Query(query) => {
                    leptos::task::spawn_local(run_search(session, sweets, loading, error, query));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = plan;
        }
    };

    let on_purchase = Callback::new(move |(id, quantity): (i64, u32)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let credential = session.get_untracked().credential();
                match crate::net::api::purchase_sweet(credential.as_deref(), id, quantity).await {
                    Ok(_) => {
                        alert("Purchase successful!");
                        load_sweets(session, sweets, loading, error).await;
                    }
                    Err(err) => alert(&err.message_or("Purchase failed. Please try again.")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, quantity);
        }
    });

    let allowed =
        move || guard::decide_state(&session.get(), false) == Some(GuardDecision::Allow);

    view! {
        <Show
            when=allowed
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <Navbar title="Sweet Shop - Dashboard"/>
                <div class="dashboard-page__content">
                    <h2>"Available Sweets"</h2>
                    <form class="dashboard-page__search" on:submit=on_search>
                        <input
                            class="dashboard-page__search-input"
                            type="text"
                            placeholder="Search by name or category..."
                            prop:value=move || search_query.get()
                            on:input=move |ev| search_query.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit">
                            "Search"
                        </button>
                    </form>
                    <ErrorBanner message=error/>
                    <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                        <Show
                            when=move || !sweets.get().is_empty()
                            fallback=|| view! { <p>"No sweets found."</p> }
                        >
                            <div class="sweet-grid">
                                {move || {
                                    sweets
                                        .get()
                                        .into_iter()
                                        .map(|sweet| {
                                            view! { <SweetCard sweet=sweet on_purchase=on_purchase/> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
