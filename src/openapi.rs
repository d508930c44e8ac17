use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ErrorResponse, FoodDetails, FoodSummary, LabelNutrients, SearchResponse};

/// OpenAPI document served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Information API",
        version = "1.0.0",
        description = "Backend for the Food Information App"
    ),
    paths(handlers::search_foods, handlers::get_food_details),
    components(schemas(
        FoodSummary,
        SearchResponse,
        LabelNutrients,
        FoodDetails,
        ErrorResponse
    )),
    tags((name = "foods", description = "USDA FoodData Central lookups"))
)]
pub struct ApiDoc;
