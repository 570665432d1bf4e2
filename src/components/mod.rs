//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod food_list;
mod search_box;

pub use filter_bar::FilterBar;
pub use food_list::FoodList;
pub use search_box::SearchBox;
