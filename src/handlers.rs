use crate::errors::AppError;
use crate::models::*;
use crate::shaping::{shape_food_details, shape_search_response};
use crate::usda_client::UsdaClient;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

pub const FOOD_NOT_FOUND: &str = "Food not found";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the USDA FoodData Central API.
    pub usda_client: UsdaClient,
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "food-info-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Search foods
///
/// GET /foods searches USDA FoodData Central and returns a simplified page of results.
/// Any upstream failure, including an upstream 404, is reported as 502.
#[utoipa::path(
    get,
    path = "/foods",
    tag = "foods",
    params(SearchQueryParams),
    responses(
        (status = 200, description = "Page of matching foods", body = SearchResponse),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse),
        (status = 502, description = "USDA API failure", body = ErrorResponse)
    )
)]
pub async fn search_foods(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchQueryParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Query(params) = params.map_err(|e| AppError::Validation(e.body_text()))?;
    params.validate().map_err(AppError::Validation)?;

    tracing::info!(
        "GET /foods - query: {:?}, page: {}, page_size: {}",
        params.query,
        params.page,
        params.page_size
    );

    let raw = state
        .usda_client
        .search_foods(&params.query, params.page, params.page_size)
        .await?;

    let response = shape_search_response(&raw, params.page)?;
    tracing::info!(
        "Returning {} of {} foods (page {}/{})",
        response.foods.len(),
        response.total_hits,
        response.current_page,
        response.total_pages
    );

    Ok(Json(response))
}

/// Get food details by FDC ID
///
/// GET /food/:fdc_id returns simplified details for a single food item from USDA FoodData Central.
#[utoipa::path(
    get,
    path = "/food/{fdc_id}",
    tag = "foods",
    params(
        ("fdc_id" = i64, Path, description = "FoodData Central ID")
    ),
    responses(
        (status = 200, description = "Food details", body = FoodDetails),
        (status = 404, description = "Food not found", body = ErrorResponse),
        (status = 422, description = "Invalid FDC ID", body = ErrorResponse),
        (status = 502, description = "USDA API failure", body = ErrorResponse)
    )
)]
pub async fn get_food_details(
    State(state): State<Arc<AppState>>,
    fdc_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<FoodDetails>, AppError> {
    let Path(fdc_id) = fdc_id.map_err(|e| AppError::Validation(e.body_text()))?;
    tracing::info!("GET /food/{}", fdc_id);

    let raw = state
        .usda_client
        .get_food_by_id(fdc_id)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                tracing::info!("Food {} not found upstream", fdc_id);
                AppError::NotFound(FOOD_NOT_FOUND.to_string())
            } else {
                AppError::from(e)
            }
        })?;

    Ok(Json(shape_food_details(&raw)?))
}
