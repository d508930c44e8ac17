use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============ Response Models ============

/// One search hit, reduced to the fields the client app lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSummary {
    /// FoodData Central identifier.
    pub fdc_id: i64,
    pub description: String,
    pub brand_owner: Option<String>,
    pub data_type: Option<String>,
}

/// A page of search results, with pagination copied from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub total_hits: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub foods: Vec<FoodSummary>,
}

/// Per-serving values printed on the product label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabelNutrients {
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub sugars: Option<f64>,
    pub protein: Option<f64>,
    pub sodium: Option<f64>,
}

/// Simplified view of a single food record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodDetails {
    /// FoodData Central identifier.
    pub fdc_id: i64,
    pub description: String,
    pub data_type: Option<String>,
    pub brand_owner: Option<String>,
    pub brand_name: Option<String>,
    pub branded_food_category: Option<String>,
    /// GTIN/UPC barcode.
    pub gtin_upc: Option<String>,

    pub serving_size: Option<f64>,
    pub serving_size_unit: Option<String>,
    pub household_serving_full_text: Option<String>,
    pub package_weight: Option<String>,

    /// Ingredients list as printed on the package.
    pub ingredients: Option<String>,
    /// Regulatory "not a significant source of ..." notice.
    pub nota_significant_source_of: Option<String>,

    pub label_nutrients: Option<LabelNutrients>,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

// ============ Request Models ============

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 20;

/// Query parameters for `GET /foods`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQueryParams {
    /// Search term, e.g. 'apple'
    pub query: String,
    /// Page number (1 based)
    #[serde(default = "default_page")]
    #[param(minimum = 1, default = 1)]
    pub page: i64,
    /// Results per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 20, default = 20)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl SearchQueryParams {
    /// Checks the bounds serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be greater than or equal to 1".to_string());
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(format!("page_size must be between 1 and {}", MAX_PAGE_SIZE));
        }
        Ok(())
    }
}
