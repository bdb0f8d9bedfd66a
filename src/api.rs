// 🌐 REST API - brands, cars and the seed trigger
//
// Handlers only translate HTTP to registry calls. All state lives in the
// registries owned by `AppState`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::CarWriteMode;
use crate::entities::{
    Brand, BrandRegistry, Car, CarRegistry, CreateBrand, CreateCar, DeleteConfirmation,
    UpdateBrand, UpdateCar,
};
use crate::error::CatalogError;
use crate::seed::SeedCoordinator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub brands: Arc<BrandRegistry>,
    pub cars: Arc<CarRegistry>,
    pub seed: Arc<SeedCoordinator>,
    pub car_writes: CarWriteMode,
}

impl AppState {
    /// Fresh registries with their bootstrap entries
    pub fn new(car_writes: CarWriteMode) -> Self {
        let brands = Arc::new(BrandRegistry::new());
        let cars = Arc::new(CarRegistry::new());
        let seed = Arc::new(SeedCoordinator::new(Arc::clone(&cars), Arc::clone(&brands)));

        AppState {
            brands,
            cars,
            seed,
            car_writes,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Catalog(err @ CatalogError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = json!({
            "statusCode": status.as_u16(),
            "message": message,
            "error": status.canonical_reason().unwrap_or("Error"),
        });
        (status, Json(body)).into_response()
    }
}

fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> &'static str {
    "OK"
}

/// GET /brands - All brands in insertion order
async fn list_brands(State(state): State<AppState>) -> Json<Vec<Brand>> {
    Json(state.brands.find_all())
}

/// GET /brands/:id
async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Brand>, ApiError> {
    Ok(Json(state.brands.find_one(&id)?))
}

/// POST /brands - Create a brand (name is lowercased)
async fn create_brand(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Brand>), ApiError> {
    let dto: CreateBrand = parse_body(body)?;
    Ok((StatusCode::CREATED, Json(state.brands.create(dto))))
}

/// PATCH /brands/:id
async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Brand>, ApiError> {
    let dto: UpdateBrand = parse_body(body)?;
    Ok(Json(state.brands.update(&id, dto)?))
}

/// DELETE /brands/:id
async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    Ok(Json(state.brands.remove(&id)?))
}

/// GET /cars - All cars in insertion order
async fn list_cars(State(state): State<AppState>) -> Json<Vec<Car>> {
    Json(state.cars.find_all())
}

/// GET /cars/:id
async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, ApiError> {
    Ok(Json(state.cars.find_one_by_id(&id)?))
}

/// POST /cars - Create a car, or echo the body in echo mode
async fn create_car(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    match state.car_writes {
        CarWriteMode::Echo => {
            tracing::info!(%body, "car create echoed");
            Ok((StatusCode::CREATED, Json(body)).into_response())
        }
        CarWriteMode::Registry => {
            let dto: CreateCar = parse_body(body)?;
            Ok((StatusCode::CREATED, Json(state.cars.create(dto))).into_response())
        }
    }
}

/// PATCH /cars/:id
async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    match state.car_writes {
        CarWriteMode::Echo => {
            tracing::info!(%id, %body, "car update echoed");
            Ok(Json(json!({ "method": "Patch", "id": id, "body": body })).into_response())
        }
        CarWriteMode::Registry => {
            let dto: UpdateCar = parse_body(body)?;
            Ok(Json(state.cars.update(&id, dto)?).into_response())
        }
    }
}

/// DELETE /cars/:id
async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.car_writes {
        CarWriteMode::Echo => {
            tracing::info!(%id, "car delete echoed");
            Ok(Json(json!({ "method": "DELETE", "id": id })).into_response())
        }
        CarWriteMode::Registry => Ok(Json(state.cars.delete(&id)?).into_response()),
    }
}

/// GET|POST /seed - Reset both registries to the seed data
async fn run_seed(State(state): State<AppState>) -> &'static str {
    state.seed.populate_db()
}

// ============================================================================
// Router
// ============================================================================

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/brands", get(list_brands).post(create_brand))
        .route(
            "/brands/:id",
            get(get_brand).patch(update_brand).delete(delete_brand),
        )
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:id", get(get_car).patch(update_car).delete(delete_car))
        .route("/seed", get(run_seed).post(run_seed))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
