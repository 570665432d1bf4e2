//! Menu Models
//!
//! Data structures for food items and view state.

use serde::{Deserialize, Serialize};

/// One menu entry as served by the data endpoint.
///
/// Only `name` and `type` participate in filtering; the rest is display-only
/// and optional, since the endpoint's shape beyond those two fields is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Meal-type filter selected in the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MealFilter {
    #[default]
    All,
    Breakfast,
    Lunch,
    Dinner,
}

impl MealFilter {
    /// Wire value matched against `FoodItem::meal_type`
    pub fn value(self) -> &'static str {
        match self {
            MealFilter::All => "all",
            MealFilter::Breakfast => "breakfast",
            MealFilter::Lunch => "lunch",
            MealFilter::Dinner => "dinner",
        }
    }

    /// Button label shown in the filter bar
    pub fn label(self) -> &'static str {
        match self {
            MealFilter::All => "All",
            MealFilter::Breakfast => "Breakfast",
            MealFilter::Lunch => "Lunch",
            MealFilter::Dinner => "Dinner",
        }
    }
}

/// Lifecycle of the one-shot menu fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}
