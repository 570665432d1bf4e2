//! Menu State
//!
//! The single state object behind the menu view, with reducer-style
//! transitions that are testable without any rendering layer.

use reactive_stores::Store;

use crate::filter::{filter_by_meal, search_by_name};
use crate::models::{FoodItem, LoadState, MealFilter};

/// Fixed user-facing message for a failed load
pub const FETCH_ERROR_MESSAGE: &str = "Unable to fetch data";

/// View state with field-level reactivity.
///
/// `visible_items` is always a subsequence of `source_items`: same relative
/// order, never reordered or duplicated.
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Full set fetched once at startup, immutable for the session
    pub source_items: Vec<FoodItem>,
    /// Currently displayed subsequence of `source_items`
    pub visible_items: Vec<FoodItem>,
    /// Lifecycle of the one-shot fetch
    pub load_state: LoadState,
    /// Meal type highlighted in the filter bar
    pub active_filter: MealFilter,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }

    /// The fetch has been issued
    pub fn load_started(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// The fetch succeeded; show the full menu
    pub fn load_succeeded(&mut self, items: Vec<FoodItem>) {
        self.visible_items = items.clone();
        self.source_items = items;
        self.active_filter = MealFilter::All;
        self.load_state = LoadState::Loaded;
    }

    /// The fetch failed; terminal for the session, recovery is a page reload
    pub fn load_failed(&mut self) {
        self.load_state = LoadState::Failed(FETCH_ERROR_MESSAGE.to_string());
    }

    /// Recompute `visible_items` for a meal-type filter.
    /// No-op until the menu has loaded.
    pub fn filter_by_type(&mut self, filter: MealFilter) {
        if !self.is_loaded() {
            return;
        }
        self.active_filter = filter;
        self.visible_items = filter_by_meal(&self.source_items, filter);
    }

    /// Recompute `visible_items` for a name search over the full source set,
    /// overriding any prior type filter. Clearing the query restores the view
    /// of the active type filter. The filter bar highlight is untouched.
    /// No-op until the menu has loaded.
    pub fn search_by_name(&mut self, query: &str) {
        if !self.is_loaded() {
            return;
        }
        self.visible_items = if query.is_empty() {
            filter_by_meal(&self.source_items, self.active_filter)
        } else {
            search_by_name(&self.source_items, query)
        };
    }
}
