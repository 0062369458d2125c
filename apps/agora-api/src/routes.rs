use axum::{
	Json, Router,
	extract::{Query, State, rejection::QueryRejection},
	http::StatusCode,
	middleware,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;

use agora_service::{Error as ServiceError, SearchItemsResponse};

use crate::{auth, state::AppState};

const FILTER_PARAM: &str = "data";

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message),
			ServiceError::Storage { message } => {
				tracing::error!(error = %message, "Item search failed in the record store.");

				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"STORAGE_ERROR",
					"Failed to query items.",
				)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}

pub fn router(state: AppState) -> Router {
	let items = Router::new()
		.route("/api/get_search_items", get(get_search_items))
		.route_layer(middleware::from_fn_with_state(state.auth.clone(), auth::auth_middleware));

	Router::new().route("/health", get(health)).merge(items).with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn get_search_items(
	State(state): State<AppState>,
	query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SearchItemsResponse>, ApiError> {
	let Query(params) = query.map_err(|err| {
		ApiError::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", err.body_text())
	})?;
	// A repeated parameter resolves to its first occurrence.
	let Some((_, raw)) = params.into_iter().find(|(key, _)| key == FILTER_PARAM) else {
		return Err(ApiError::new(
			StatusCode::BAD_REQUEST,
			"INVALID_REQUEST",
			"Query parameter data is required.",
		));
	};
	let response = state.service.search_items(&raw).await?;

	Ok(Json(response))
}
