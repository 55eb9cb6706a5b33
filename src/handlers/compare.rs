// src/handlers/compare.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;

use crate::{
    config::MAX_COMPARE_SERVICES,
    error::AppError,
    mappings::{MappingCatalog, aggregate_difficulty},
    models::mapping::{CompareResponse, ComparisonKind},
};

/// Recommends a DigitalOcean product or open-source alternative per AWS service.
///
/// * Body: `{ "awsServices": [..] }`; anything else is a 400.
/// * Unknown services are left out of `recommendations`.
/// * `complexity` averages the first-party matches and is omitted when there are none.
pub async fn compare_services(
    State(catalog): State<Arc<MappingCatalog>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let Some(services) = body.get("awsServices").and_then(Value::as_array) else {
        return Err(AppError::BadRequest(
            "AWS services must be an array".to_string(),
        ));
    };

    if services.len() > MAX_COMPARE_SERVICES {
        return Err(AppError::BadRequest(format!(
            "At most {} AWS services can be compared at once",
            MAX_COMPARE_SERVICES
        )));
    }

    let names: Vec<&str> = services.iter().filter_map(Value::as_str).collect();
    let recommendations = catalog.resolve(&names);

    let complexity = recommendations
        .iter()
        .any(|result| result.kind == ComparisonKind::DoProduct)
        .then(|| aggregate_difficulty(&recommendations));

    tracing::info!(
        "Compared {} services, {} mapped",
        services.len(),
        recommendations.len()
    );

    let response = CompareResponse {
        mapped_services: recommendations.len(),
        total_services: services.len(),
        recommendations,
        complexity,
    };

    let body = serde_json::to_value(&response).map_err(|e| {
        tracing::error!("Failed to serialize recommendations: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(body))
}

/// Lists every AWS service the comparison knows about.
pub async fn list_services(
    State(catalog): State<Arc<MappingCatalog>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(catalog.services()))
}
