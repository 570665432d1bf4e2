//! Search Box Component
//!
//! Free-text name search, recomputed on every keystroke.

use leptos::prelude::*;

use crate::store::use_menu_store;

/// Search input over the full menu
#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div class="search">
            <input
                type="text"
                placeholder="Search Food..."
                autocomplete="off"
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    store.update(|state| state.search_by_name(&query));
                }
            />
        </div>
    }
}
