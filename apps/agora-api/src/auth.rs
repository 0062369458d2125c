//! Authorization gate in front of the item routes.
//!
//! The gate reduces a request to a single yes/no decision before any handler runs; handlers and
//! the service never inspect credentials.

use axum::{
	body::Body,
	extract::State,
	http::{HeaderMap, Request, StatusCode, header::AUTHORIZATION},
	middleware::Next,
	response::{IntoResponse, Response},
};

#[derive(Clone, Debug)]
pub enum AuthState {
	Off,
	StaticToken { bearer_token: String },
}
impl AuthState {
	pub fn from_config(security: &agora_config::Security) -> Self {
		match security.api_auth_token.as_ref() {
			Some(token) => Self::StaticToken { bearer_token: token.clone() },
			None => Self::Off,
		}
	}
}

pub fn is_authorized(headers: &HeaderMap, auth_state: &AuthState) -> bool {
	match auth_state {
		AuthState::Off => true,
		AuthState::StaticToken { bearer_token } =>
			read_bearer_token(headers).is_some_and(|token| token == bearer_token),
	}
}

pub async fn auth_middleware(
	State(auth_state): State<AuthState>,
	req: Request<Body>,
	next: Next,
) -> Response {
	if !is_authorized(req.headers(), &auth_state) {
		tracing::debug!(uri = %req.uri(), "Rejected unauthorized request.");

		return (StatusCode::FORBIDDEN, "Forbidden").into_response();
	}

	next.run(req).await
}

fn read_bearer_token(headers: &HeaderMap) -> Option<&str> {
	let raw = headers.get(AUTHORIZATION)?;
	let value = raw.to_str().ok()?.trim();
	let token = value.strip_prefix("Bearer ")?.trim();

	if token.is_empty() { None } else { Some(token) }
}
