//! Menu Filtering
//!
//! Pure helpers that compute the visible subsequence of the menu.

use crate::models::{FoodItem, MealFilter};

/// Keep the items whose meal type matches the filter, preserving order.
/// `All` restores the full list.
pub fn filter_by_meal(items: &[FoodItem], filter: MealFilter) -> Vec<FoodItem> {
    if filter == MealFilter::All {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|food| food.meal_type.to_lowercase() == filter.value())
        .cloned()
        .collect()
}

/// Keep the items whose name contains `query` as a case-insensitive
/// substring, preserving order.
pub fn search_by_name(items: &[FoodItem], query: &str) -> Vec<FoodItem> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(name: &str, meal_type: &str) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            meal_type: meal_type.to_string(),
            text: None,
            image: None,
            price: None,
        }
    }

    fn menu() -> Vec<FoodItem> {
        vec![
            make_food("Pancake", "breakfast"),
            make_food("Burger", "lunch"),
            make_food("Pasta", "dinner"),
            make_food("Club Sandwich", "Lunch"),
        ]
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let items = menu();
        let visible = filter_by_meal(&items, MealFilter::All);
        assert_eq!(visible, items);
    }

    #[test]
    fn test_filter_by_meal_is_case_insensitive() {
        let items = menu();
        let visible = filter_by_meal(&items, MealFilter::Lunch);
        // "Lunch" matches despite the capital L, order preserved
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "Burger");
        assert_eq!(visible[1].name, "Club Sandwich");
    }

    #[test]
    fn test_filter_by_meal_excludes_non_matching() {
        let items = menu();
        let visible = filter_by_meal(&items, MealFilter::Breakfast);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Pancake");
    }

    #[test]
    fn test_search_matches_substring_case_insensitive() {
        let items = menu();
        let visible = search_by_name(&items, "PA");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "Pancake");
        assert_eq!(visible[1].name, "Pasta");
    }

    #[test]
    fn test_search_with_no_match_is_empty() {
        let items = menu();
        assert!(search_by_name(&items, "sushi").is_empty());
    }
}
