//! Customer-facing inventory card with purchase controls.

#[cfg(test)]
#[path = "sweet_card_test.rs"]
mod sweet_card_test;

use leptos::prelude::*;

use crate::net::types::Sweet;

/// Check a purchase quantity draft against available stock.
///
/// Returns the parsed quantity only when it lies in `1..=available`, so
/// rejected drafts never reach the network.
///
/// # Errors
///
/// Returns a user-facing message when the draft is not a whole number
/// in `1..=available`.
pub fn validate_purchase(raw: &str, available: u32) -> Result<u32, String> {
    let Ok(quantity) = raw.trim().parse::<u32>() else {
        return Err("Enter a quantity of at least 1.".to_owned());
    };
    if quantity == 0 {
        return Err("Enter a quantity of at least 1.".to_owned());
    }
    if quantity > available {
        return Err(format!("Only {available} in stock."));
    }
    Ok(quantity)
}

/// One inventory item with a quantity input and purchase button.
///
/// The purchase button stays disabled while the draft quantity is outside
/// `1..=stock`; out-of-stock items show a label instead of controls.
#[component]
pub fn SweetCard(sweet: Sweet, on_purchase: Callback<(i64, u32)>) -> impl IntoView {
    let quantity = RwSignal::new("1".to_owned());
    let id = sweet.id;
    let available = sweet.quantity;
    let out_of_stock = sweet.out_of_stock();
    let price = format!("\u{20b9}{:.2}", sweet.price);

    let purchasable = move || validate_purchase(&quantity.get(), available).is_ok();
    let on_buy = move |_| {
        if let Ok(amount) = validate_purchase(&quantity.get(), available) {
            on_purchase.run((id, amount));
        }
    };

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
                {available}
            </p>
            <Show
                when=move || !out_of_stock
                fallback=|| {
                    view! { <p class="sweet-card__out-of-stock">"Out of Stock"</p> }
                }
            >
                <div class="sweet-card__purchase">
                    <input
                        class="sweet-card__quantity"
                        type="number"
                        min="1"
                        max=available.to_string()
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                    <button
                        class="btn sweet-card__buy"
                        disabled=move || !purchasable()
                        on:click=on_buy
                    >
                        "Purchase"
                    </button>
                </div>
            </Show>
        </div>
    }
}
