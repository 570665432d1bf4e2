//! Menu API
//!
//! Fetch bindings to the food data endpoint.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::FoodItem;

/// Fixed address of the food data endpoint
pub const BASE_URL: &str = "http://localhost:9000/";

/// Fetch the full menu. Issued once at startup; any transport, status, or
/// body-shape failure surfaces as a single error, never retried here.
pub async fn fetch_menu() -> Result<Vec<FoodItem>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(BASE_URL, &opts).map_err(describe_js_error)?;

    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(describe_js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;
    if !response.ok() {
        return Err(format!("server responded with status {}", response.status()));
    }

    let body = JsFuture::from(response.json().map_err(describe_js_error)?)
        .await
        .map_err(describe_js_error)?;
    if !js_sys::Array::is_array(&body) {
        return Err("response body is not a JSON array".to_string());
    }
    let raw: Vec<serde_json::Value> =
        serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())?;

    let (items, skipped) = decode_items(raw);
    if skipped > 0 {
        web_sys::console::warn_1(
            &format!("[API] Skipped {} malformed food entries", skipped).into(),
        );
    }
    Ok(items)
}

/// Decode raw JSON entries into food items. Entries that fail validation
/// (missing `name` or `type`, wrong field types) are dropped and counted so
/// one bad record does not take down the whole menu.
pub fn decode_items(raw: Vec<serde_json::Value>) -> (Vec<FoodItem>, usize) {
    let mut items = Vec::with_capacity(raw.len());
    let mut skipped = 0;
    for value in raw {
        match serde_json::from_value::<FoodItem>(value) {
            Ok(item) => items.push(item),
            Err(_) => skipped += 1,
        }
    }
    (items, skipped)
}

fn describe_js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_items_accepts_well_formed_entries() {
        let raw = vec![
            json!({"name": "Boiled Egg", "price": 10.0, "text": "protein rich", "image": "/images/egg.png", "type": "breakfast"}),
            json!({"name": "Burger", "type": "lunch"}),
        ];
        let (items, skipped) = decode_items(raw);
        assert_eq!(skipped, 0);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Boiled Egg");
        assert_eq!(items[0].price, Some(10.0));
        assert_eq!(items[1].meal_type, "lunch");
        assert_eq!(items[1].image, None);
    }

    #[test]
    fn test_decode_items_drops_malformed_entries_in_place() {
        let raw = vec![
            json!({"name": "Pancake", "type": "breakfast"}),
            json!({"type": "lunch"}),              // no name
            json!({"name": 42, "type": "dinner"}), // wrong type
            json!("not an object"),
            json!({"name": "Pasta", "type": "dinner"}),
        ];
        let (items, skipped) = decode_items(raw);
        assert_eq!(skipped, 3);
        // survivors keep their relative order
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Pancake");
        assert_eq!(items[1].name, "Pasta");
    }
}
