//! Foody Zone App
//!
//! Root component: owns the store, kicks off the one-shot load, and renders
//! according to the load state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{FilterBar, FoodList, SearchBox};
use crate::models::LoadState;
use crate::state::MenuState;
use crate::store::{MenuStateStoreFields, MenuStore};

#[component]
pub fn App() -> impl IntoView {
    let store: MenuStore = Store::new(MenuState::new());

    // Provide the store to all children
    provide_context(store);

    // One-shot load on mount; failures are terminal until a page reload
    store.update(|state| state.load_started());
    spawn_local(async move {
        match api::fetch_menu().await {
            Ok(items) => {
                web_sys::console::log_1(&format!("[APP] Loaded {} food items", items.len()).into());
                store.update(|state| state.load_succeeded(items));
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[APP] Fetch failed: {}", err).into());
                store.update(|state| state.load_failed());
            }
        }
    });

    view! {
        {move || match store.load_state().get() {
            LoadState::Failed(message) => view! {
                <div class="error">{message}</div>
            }.into_any(),
            LoadState::Idle | LoadState::Loading => view! {
                <div class="loading">"Loading..."</div>
            }.into_any(),
            LoadState::Loaded => view! {
                <div class="container">
                    <header class="top-bar">
                        <h1 class="logo">"Foody Zone"</h1>
                        <SearchBox/>
                    </header>
                    <FilterBar/>
                    <FoodList/>
                </div>
            }.into_any(),
        }}
    }
}
