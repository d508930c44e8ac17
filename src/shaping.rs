//! Pure mapping from FoodData Central JSON (camelCase) to the API's response models.
//!
//! Nothing here performs I/O. Absent or `null` upstream fields become `None`;
//! only a record without a usable `fdcId` is rejected.

use serde_json::Value;

use crate::errors::UpstreamError;
use crate::models::{FoodDetails, FoodSummary, LabelNutrients, SearchResponse};

fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn f64_field(raw: &Value, key: &str) -> Option<f64> {
    raw.get(key).and_then(Value::as_f64)
}

fn fdc_id(raw: &Value) -> Result<i64, UpstreamError> {
    raw.get("fdcId").and_then(Value::as_i64).ok_or_else(|| {
        UpstreamError::new("Malformed USDA response: food record is missing an integer fdcId")
    })
}

/// Reads `labelNutrients.<name>.value`, tolerating absence at every level.
fn nutrient_value(label_nutrients: Option<&Value>, name: &str) -> Option<f64> {
    label_nutrients
        .and_then(|ln| ln.get(name))
        .and_then(|nutrient| nutrient.get("value"))
        .and_then(Value::as_f64)
}

pub fn shape_food_summary(item: &Value) -> Result<FoodSummary, UpstreamError> {
    Ok(FoodSummary {
        fdc_id: fdc_id(item)?,
        description: str_field(item, "description").unwrap_or_default(),
        brand_owner: str_field(item, "brandOwner"),
        data_type: str_field(item, "dataType"),
    })
}

/// Shapes a `/foods/search` payload.
///
/// Pagination falls back to `totalHits = 0`, `currentPage = requested_page`
/// and `totalPages = 1` when upstream omits them.
pub fn shape_search_response(
    raw: &Value,
    requested_page: i64,
) -> Result<SearchResponse, UpstreamError> {
    let foods = raw
        .get("foods")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(shape_food_summary)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(SearchResponse {
        total_hits: raw.get("totalHits").and_then(Value::as_i64).unwrap_or(0),
        current_page: raw
            .get("currentPage")
            .and_then(Value::as_i64)
            .unwrap_or(requested_page),
        total_pages: raw.get("totalPages").and_then(Value::as_i64).unwrap_or(1),
        foods,
    })
}

pub fn shape_label_nutrients(raw: &Value) -> LabelNutrients {
    let ln = raw.get("labelNutrients").filter(|ln| ln.is_object());

    LabelNutrients {
        calories: nutrient_value(ln, "calories"),
        fat: nutrient_value(ln, "fat"),
        carbohydrates: nutrient_value(ln, "carbohydrates"),
        sugars: nutrient_value(ln, "sugars"),
        protein: nutrient_value(ln, "protein"),
        sodium: nutrient_value(ln, "sodium"),
    }
}

/// Shapes a `/food/{fdcId}` payload. `label_nutrients` is always present,
/// with every nutrient `None` when upstream has no label data.
pub fn shape_food_details(raw: &Value) -> Result<FoodDetails, UpstreamError> {
    Ok(FoodDetails {
        fdc_id: fdc_id(raw)?,
        description: str_field(raw, "description").unwrap_or_default(),
        data_type: str_field(raw, "dataType"),
        brand_owner: str_field(raw, "brandOwner"),
        brand_name: str_field(raw, "brandName"),
        branded_food_category: str_field(raw, "brandedFoodCategory"),
        gtin_upc: str_field(raw, "gtinUpc"),

        serving_size: f64_field(raw, "servingSize"),
        serving_size_unit: str_field(raw, "servingSizeUnit"),
        household_serving_full_text: str_field(raw, "householdServingFullText"),
        package_weight: str_field(raw, "packageWeight"),

        ingredients: str_field(raw, "ingredients"),
        nota_significant_source_of: str_field(raw, "notaSignificantSourceOf"),

        label_nutrients: Some(shape_label_nutrients(raw)),
    })
}
