//! Food List Component
//!
//! Presentational card grid over the currently visible items.

use leptos::prelude::*;

use crate::models::FoodItem;
use crate::store::{use_menu_store, MenuStateStoreFields};

/// Result list fed from `visible_items`; no logic of its own
#[component]
pub fn FoodList() -> impl IntoView {
    let store = use_menu_store();

    // Items carry no unique id, so key by position + name
    view! {
        <div class="food-grid">
            <For
                each={move || store.visible_items().get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(idx, food): &(usize, FoodItem)| (*idx, food.name.clone())
                children=move |(_, food)| {
                    let name = food.name.clone();
                    let image = food.image.clone();
                    let text = food.text.clone();
                    let price = food.price.map(|p| format!("${:.2}", p));
                    view! {
                        <div class="food-card">
                            {image.map(|src| view! {
                                <img class="food-image" src=src alt=name.clone()/>
                            })}
                            <div class="food-info">
                                <div class="food-name">{name.clone()}</div>
                                {text.map(|t| view! { <p class="food-text">{t}</p> })}
                                {price.map(|p| view! { <span class="food-price">{p}</span> })}
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
