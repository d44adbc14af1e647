// ABOUTME: Prediction route handlers forecasting a user's training load per muscle group
// ABOUTME: Fetches history from the provider, runs the pipeline on the blocking pool, and returns fechas/pesos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! # Prediction Routes
//!
//! | Route | Category |
//! |-------|----------|
//! | `POST /predict` | arm |
//! | `POST /predict_core` | core |
//! | `POST /predict_chest` | chest |
//! | `POST /predict/:muscle_group` | any supported group |
//!
//! Request body: `{"userid": "42"}` or `{"userid": 42}`.

use crate::middleware::RequestId;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::post,
    Extension, Json, Router,
};
use loadcast_core::config::MuscleGroup;
use loadcast_core::errors::{AppError, AppResult};
use loadcast_core::models::PredictionResult;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// User identifier as sent by clients, either a string or an integer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// `"userid": "abc"`
    Text(String),
    /// `"userid": 42`
    Number(i64),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Body of every prediction request
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    /// User whose history is forecast
    pub userid: UserId,
}

impl PredictionRequest {
    fn user_id(&self) -> AppResult<String> {
        let user_id = self.userid.to_string();
        let trimmed = user_id.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input("userid must not be empty"));
        }
        Ok(trimmed.to_owned())
    }
}

/// Prediction routes implementation
pub struct PredictionRoutes;

impl PredictionRoutes {
    /// Legacy per-category paths plus the parameterised route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/predict", post(predict_arm))
            .route("/predict_core", post(predict_core))
            .route("/predict_chest", post(predict_chest))
            .route("/predict/:muscle_group", post(predict_by_group))
            .with_state(resources)
    }
}

async fn predict_arm(
    State(resources): State<Arc<ServerResources>>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    respond(&resources, &request_id, MuscleGroup::Arm, body).await
}

async fn predict_core(
    State(resources): State<Arc<ServerResources>>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    respond(&resources, &request_id, MuscleGroup::Core, body).await
}

async fn predict_chest(
    State(resources): State<Arc<ServerResources>>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    respond(&resources, &request_id, MuscleGroup::Chest, body).await
}

async fn predict_by_group(
    State(resources): State<Arc<ServerResources>>,
    Extension(request_id): Extension<RequestId>,
    Path(muscle_group): Path<String>,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let group = muscle_group.parse::<MuscleGroup>().map_err(|_| {
        AppError::not_found(format!("Muscle group '{muscle_group}'"))
            .with_request_id(request_id.as_str())
    })?;
    respond(&resources, &request_id, group, body).await
}

async fn respond(
    resources: &ServerResources,
    request_id: &RequestId,
    group: MuscleGroup,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    predict(resources, group, body)
        .await
        .map(Json)
        .map_err(|error| error.with_request_id(request_id.as_str()))
}

async fn predict(
    resources: &ServerResources,
    group: MuscleGroup,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<PredictionResult> {
    let Json(request) = body.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
    let user_id = request.user_id()?;

    let records = resources.provider.fetch_records(&user_id, group).await?;
    debug!(
        provider = resources.provider.name(),
        %group,
        records = records.len(),
        "Fetched exercise history"
    );

    let pipeline = resources.pipeline;
    let config = group.metric_config();
    let result = tokio::task::spawn_blocking(move || pipeline.forecast(&records, &config))
        .await
        .map_err(|e| AppError::internal(format!("Forecast task failed: {e}")))??;

    info!(
        user.id = %user_id,
        %group,
        points = result.len(),
        "Training load forecast produced"
    );
    Ok(result)
}
