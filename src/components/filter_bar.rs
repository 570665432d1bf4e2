//! Filter Bar Component
//!
//! Meal-type selector buttons with the active filter highlighted.

use leptos::prelude::*;

use crate::models::MealFilter;
use crate::store::{use_menu_store, MenuStateStoreFields};

/// Filter options in display order
pub const MEAL_FILTERS: &[MealFilter] = &[
    MealFilter::All,
    MealFilter::Breakfast,
    MealFilter::Lunch,
    MealFilter::Dinner,
];

/// Meal-type filter buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div class="filter-bar">
            {MEAL_FILTERS.iter().map(|filter| {
                let filter = *filter;
                let is_selected = move || store.active_filter().get() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store.update(|state| state.filter_by_type(filter))
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
