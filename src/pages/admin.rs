//! Admin panel for inventory CRUD and restocking.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form serves both create and update; which write a submission
//! performs depends on whether an item id is being edited. Field drafts
//! stay raw strings until submit so typing is never blocked, and every
//! successful write re-fetches the list instead of patching the local
//! copy. Deletion is confirmed through an in-page dialog rather than a
//! browser-native prompt.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::banners::{ErrorBanner, SuccessBanner};
use crate::components::navbar::Navbar;
use crate::net::types::{Sweet, SweetPayload};
use crate::state::session::SessionState;
use crate::util::guard::{self, GuardDecision};

/// Raw create/update form draft; parsed only on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SweetForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl SweetForm {
    /// Draft pre-filled from an existing item for editing.
    pub fn from_sweet(sweet: &Sweet) -> Self {
        Self {
            name: sweet.name.clone(),
            category: sweet.category.clone(),
            price: sweet.price.to_string(),
            quantity: sweet.quantity.to_string(),
        }
    }

    /// Parse the draft into a request payload.
    pub fn parse(&self) -> Result<SweetPayload, &'static str> {
        let name = self.name.trim();
        let category = self.category.trim();
        if name.is_empty() || category.is_empty() {
            return Err("Name and category are required.");
        }
        let Ok(price) = self.price.trim().parse::<f64>() else {
            return Err("Price must be a number.");
        };
        if !price.is_finite() || price < 0.0 {
            return Err("Price must not be negative.");
        }
        let Ok(quantity) = self.quantity.trim().parse::<u32>() else {
            return Err("Quantity must be a non-negative whole number.");
        };
        Ok(SweetPayload {
            name: name.to_owned(),
            category: category.to_owned(),
            price,
            quantity,
        })
    }
}

/// Which write a form submission performs.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SubmitPlan {
    Create(SweetPayload),
    Update(i64, SweetPayload),
}

/// Validate the draft and choose create vs update.
pub(crate) fn submit_plan(
    editing_id: Option<i64>,
    form: &SweetForm,
) -> Result<SubmitPlan, &'static str> {
    let payload = form.parse()?;
    Ok(match editing_id {
        Some(id) => SubmitPlan::Update(id, payload),
        None => SubmitPlan::Create(payload),
    })
}

/// Parse a restock prompt draft into a positive quantity.
pub(crate) fn parse_restock_quantity(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err("Enter a restock quantity of at least 1."),
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

/// Admin panel page. Redirects signed-out visitors to `/login` and
/// non-admin sessions to `/dashboard`.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install_route_guard(session, true, navigate);

    let sweets = RwSignal::new(Vec::<Sweet>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let form = RwSignal::new(SweetForm::default());
    let editing_id = RwSignal::new(None::<i64>);
    let restock_id = RwSignal::new(None::<i64>);
    let restock_quantity = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<i64>);

    // Fetch once, as soon as the restored session is allowed to view this
    // page. Runs at most one request per mount.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = session.get();
        if guard::decide_state(&state, true) != Some(GuardDecision::Allow) {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_sweets(session, sweets, loading, error));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);
        let plan = match submit_plan(editing_id.get(), &form.get()) {
            Ok(plan) => plan,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let credential = session.get_untracked().credential();
                let outcome = match &plan {
                    SubmitPlan::Create(payload) => {
                        crate::net::api::create_sweet(credential.as_deref(), payload)
                            .await
                            .map(|_| "Sweet added successfully!")
                    }
                    SubmitPlan::Update(id, payload) => {
                        crate::net::api::update_sweet(credential.as_deref(), *id, payload)
                            .await
                            .map(|_| "Sweet updated successfully!")
                    }
                };
                match outcome {
                    Ok(message) => {
                        success.set(Some(message.to_owned()));
                        form.set(SweetForm::default());
                        editing_id.set(None);
                        load_sweets(session, sweets, loading, error).await;
                    }
                    Err(err) => {
                        error.set(Some(err.message_or("Operation failed. Please try again.")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = plan;
        }
    };

    let on_edit = Callback::new(move |sweet: Sweet| {
        editing_id.set(Some(sweet.id));
        form.set(SweetForm::from_sweet(&sweet));
    });

    let on_cancel_edit = move |_| {
        form.set(SweetForm::default());
        editing_id.set(None);
    };

    let on_delete_request = Callback::new(move |id: i64| pending_delete.set(Some(id)));
    let on_delete_cancel = Callback::new(move |_| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        error.set(None);
        success.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let credential = session.get_untracked().credential();
                match crate::net::api::delete_sweet(credential.as_deref(), id).await {
                    Ok(()) => {
                        success.set(Some("Sweet deleted successfully!".to_owned()));
                        load_sweets(session, sweets, loading, error).await;
                    }
                    Err(err) => {
                        error.set(Some(err.message_or("Delete failed. Please try again.")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_restock_open = Callback::new(move |id: i64| {
        restock_id.set(Some(id));
        restock_quantity.set(String::new());
    });
    let on_restock_cancel = move |_| {
        restock_id.set(None);
        restock_quantity.set(String::new());
    };
    let on_restock_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = restock_id.get() else {
            return;
        };
        error.set(None);
        success.set(None);
        let quantity = match parse_restock_quantity(&restock_quantity.get()) {
            Ok(quantity) => quantity,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let credential = session.get_untracked().credential();
                match crate::net::api::restock_sweet(credential.as_deref(), id, quantity).await {
                    Ok(_) => {
                        success.set(Some("Sweet restocked successfully!".to_owned()));
                        restock_id.set(None);
                        restock_quantity.set(String::new());
                        load_sweets(session, sweets, loading, error).await;
                    }
                    Err(err) => {
                        error.set(Some(err.message_or("Restock failed. Please try again.")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, quantity);
        }
    };

    let allowed = move || guard::decide_state(&session.get(), true) == Some(GuardDecision::Allow);

    view! {
        <Show
            when=allowed
            fallback=move || {
                view! {
                    <div class="admin-page">
                        <p>
                            {move || {
                                if session.get().loading { "Loading..." } else { "Redirecting..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <Navbar title="Sweet Shop - Admin Panel"/>
                <div class="admin-page__content">
                    <div class="admin-form">
                        <h2>
                            {move || {
                                if editing_id.get().is_some() { "Update Sweet" } else { "Add New Sweet" }
                            }}
                        </h2>
                        <form on:submit=on_submit>
                            <div class="admin-form__row">
                                <label class="admin-form__label">
                                    "Name"
                                    <input
                                        class="admin-form__input"
                                        type="text"
                                        prop:value=move || form.get().name
                                        on:input=move |ev| {
                                            form.update(|f| f.name = event_target_value(&ev));
                                        }
                                    />
                                </label>
                                <label class="admin-form__label">
                                    "Category"
                                    <input
                                        class="admin-form__input"
                                        type="text"
                                        prop:value=move || form.get().category
                                        on:input=move |ev| {
                                            form.update(|f| f.category = event_target_value(&ev));
                                        }
                                    />
                                </label>
                            </div>
                            <div class="admin-form__row">
                                <label class="admin-form__label">
                                    "Price"
                                    <input
                                        class="admin-form__input"
                                        type="number"
                                        step="0.01"
                                        prop:value=move || form.get().price
                                        on:input=move |ev| {
                                            form.update(|f| f.price = event_target_value(&ev));
                                        }
                                    />
                                </label>
                                <label class="admin-form__label">
                                    "Quantity"
                                    <input
                                        class="admin-form__input"
                                        type="number"
                                        prop:value=move || form.get().quantity
                                        on:input=move |ev| {
                                            form.update(|f| f.quantity = event_target_value(&ev));
                                        }
                                    />
                                </label>
                            </div>
                            <ErrorBanner message=error/>
                            <SuccessBanner message=success/>
                            <div class="admin-form__actions">
                                <button class="btn btn--small" type="submit">
                                    {move || {
                                        if editing_id.get().is_some() { "Update" } else { "Add Sweet" }
                                    }}
                                </button>
                                <Show when=move || editing_id.get().is_some()>
                                    <button
                                        class="btn btn--small btn--secondary"
                                        type="button"
                                        on:click=on_cancel_edit
                                    >
                                        "Cancel"
                                    </button>
                                </Show>
                            </div>
                        </form>
                    </div>

                    <h2>"Manage Sweets"</h2>
                    <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                        <Show
                            when=move || !sweets.get().is_empty()
                            fallback=|| view! { <p>"No sweets found. Add your first sweet!"</p> }
                        >
                            <div class="sweet-grid">
                                {move || {
                                    sweets
                                        .get()
                                        .into_iter()
                                        .map(|sweet| {
                                            let for_edit = sweet.clone();
                                            let id = sweet.id;
                                            let price = format!("\u{20b9}{:.2}", sweet.price);
                                            view! {
                                                <div class="sweet-card">
                                                    <h3 class="sweet-card__name">{sweet.name.clone()}</h3>
                                                    <p>
                                                        <strong>"Category: "</strong>
                                                        {sweet.category.clone()}
                                                    </p>
                                                    <p>
                                                        <strong>"Price: "</strong>
                                                        {price}
                                                    </p>
                                                    <p>
                                                        <strong>"Stock: "</strong>
                                                        {sweet.quantity}
                                                    </p>
                                                    <div class="sweet-card__actions">
                                                        <button
                                                            class="btn btn--small btn--secondary"
                                                            on:click=move |_| on_edit.run(for_edit.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| on_delete_request.run(id)
                                                        >
                                                            "Delete"
                                                        </button>
                                                        <Show
                                                            when=move || restock_id.get() == Some(id)
                                                            fallback=move || {
                                                                view! {
                                                                    <button
                                                                        class="btn btn--small"
                                                                        on:click=move |_| on_restock_open.run(id)
                                                                    >
                                                                        "Restock"
                                                                    </button>
                                                                }
                                                            }
                                                        >
                                                            <form
                                                                class="sweet-card__restock"
                                                                on:submit=on_restock_submit
                                                            >
                                                                <input
                                                                    class="sweet-card__restock-input"
                                                                    type="number"
                                                                    placeholder="Quantity"
                                                                    prop:value=move || restock_quantity.get()
                                                                    on:input=move |ev| {
                                                                        restock_quantity.set(event_target_value(&ev));
                                                                    }
                                                                />
                                                                <button class="btn btn--small" type="submit">
                                                                    "Restock"
                                                                </button>
                                                                <button
                                                                    class="btn btn--small"
                                                                    type="button"
                                                                    on:click=on_restock_cancel
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                            </form>
                                                        </Show>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
                <Show when=move || pending_delete.get().is_some()>
                    <DeleteSweetDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
                </Show>
            </div>
        </Show>
    }
}

/// Modal dialog confirming a pending delete. Cancel and backdrop clicks
/// close it without issuing any call.
#[component]
fn DeleteSweetDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Sweet"</h2>
                <p class="dialog__danger">"Are you sure you want to delete this sweet?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
