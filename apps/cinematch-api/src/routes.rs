use axum::{
	Json, Router,
	extract::{
		Path, Query, State,
		rejection::{JsonRejection, QueryRejection},
	},
	http::{HeaderValue, StatusCode},
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use cinematch_service::{Credits, MovieHit, PersonalRequest};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	let cors = cors_layer(&state.allowed_origins);

	Router::new()
		.route("/", get(root))
		.route("/health", get(health))
		.route("/trending", get(trending))
		.route("/genre/{genre}", get(movies_by_genre))
		.route("/search", get(search_movies))
		.route("/personal-recommend", post(personal_recommend))
		.route("/movies/{imdb_id}/similar", get(similar_movies))
		.route("/movies/{imdb_id}/credits", get(movie_credits))
		.with_state(state)
		.layer(cors)
}

/// Credentialed CORS for the configured origins. Methods and headers mirror the preflight request.
fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
	CorsLayer::new()
		.allow_origin(AllowOrigin::list(origins.iter().cloned()))
		.allow_methods(AllowMethods::mirror_request())
		.allow_headers(AllowHeaders::mirror_request())
		.allow_credentials(true)
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
	pub offset: Option<String>,
	pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
	pub q: Option<String>,
	pub offset: Option<String>,
	pub limit: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Page {
	offset: usize,
	limit: usize,
}

async fn root() -> Json<Value> {
	Json(json!({ "message": "cinematch backend is running" }))
}

async fn health() -> Json<Value> {
	Json(json!({ "status": "ok" }))
}

async fn trending(
	State(state): State<AppState>,
	params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<MovieHit>>, ApiError> {
	let Query(params) = params.map_err(query_rejection)?;
	let page = resolve_page(&params, state.limits.default_limit, state.limits.max_limit)?;

	Ok(Json(state.service.get_trending(page.offset, page.limit)))
}

async fn movies_by_genre(
	State(state): State<AppState>,
	Path(genre): Path<String>,
	params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<MovieHit>>, ApiError> {
	let Query(params) = params.map_err(query_rejection)?;
	let page = resolve_page(&params, state.limits.default_limit, state.limits.max_limit)?;

	Ok(Json(state.service.recommend_by_genres(&[genre], page.offset, page.limit)))
}

async fn search_movies(
	State(state): State<AppState>,
	params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<MovieHit>>, ApiError> {
	let Query(params) = params.map_err(query_rejection)?;
	let query = params.q.unwrap_or_default();
	let min_chars = state.limits.min_query_chars;

	if query.chars().count() < min_chars {
		return Err(invalid_request(format!("q must be at least {min_chars} characters."), "q"));
	}

	let page = resolve_page(
		&PageParams { offset: params.offset, limit: params.limit },
		state.limits.default_limit,
		state.limits.max_limit,
	)?;

	Ok(Json(state.service.search_movies(&query, page.offset, page.limit)))
}

async fn personal_recommend(
	State(state): State<AppState>,
	params: Result<Query<PageParams>, QueryRejection>,
	payload: Result<Json<PersonalRequest>, JsonRejection>,
) -> Result<Json<Vec<MovieHit>>, ApiError> {
	let Query(params) = params.map_err(query_rejection)?;
	let Json(payload) = payload.map_err(|rejection| {
		ApiError::new(
			StatusCode::UNPROCESSABLE_ENTITY,
			"invalid_request",
			rejection.body_text(),
			Some(vec!["body".to_string()]),
		)
	})?;
	let page = resolve_page(&params, state.limits.default_limit, state.limits.max_limit)?;

	Ok(Json(state.service.personal_recommend(&payload, page.offset, page.limit)))
}

async fn similar_movies(
	State(state): State<AppState>,
	Path(imdb_id): Path<String>,
	params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<MovieHit>>, ApiError> {
	let Query(params) = params.map_err(query_rejection)?;
	let page =
		resolve_page(&params, state.limits.similar_default_limit, state.limits.similar_max_limit)?;

	Ok(Json(state.service.recommend_similar(&imdb_id, page.offset, page.limit)))
}

async fn movie_credits(
	State(state): State<AppState>,
	Path(imdb_id): Path<String>,
) -> Json<Credits> {
	Json(state.service.get_movie_credits(&imdb_id))
}

fn resolve_page(
	params: &PageParams,
	default_limit: usize,
	max_limit: usize,
) -> Result<Page, ApiError> {
	let offset = parse_integer(params.offset.as_deref(), "offset")?.unwrap_or(0);
	let limit = parse_integer(params.limit.as_deref(), "limit")?.unwrap_or(default_limit as i64);

	if offset < 0 {
		return Err(invalid_request("offset must be zero or greater.", "offset"));
	}
	if limit < 1 || limit > max_limit as i64 {
		return Err(invalid_request(format!("limit must be in the range 1-{max_limit}."), "limit"));
	}

	Ok(Page { offset: offset as usize, limit: limit as usize })
}

fn parse_integer(raw: Option<&str>, field: &str) -> Result<Option<i64>, ApiError> {
	raw.map(|value| {
		value
			.trim()
			.parse::<i64>()
			.map_err(|_| invalid_request(format!("{field} must be an integer."), field))
	})
	.transpose()
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
	ApiError::new(
		StatusCode::UNPROCESSABLE_ENTITY,
		"invalid_request",
		rejection.body_text(),
		Some(vec!["query".to_string()]),
	)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody {
			error_code: self.error_code,
			message: self.message,
			fields: self.fields,
		};

		(self.status, Json(body)).into_response()
	}
}

fn invalid_request(message: impl Into<String>, field: &str) -> ApiError {
	ApiError::new(
		StatusCode::UNPROCESSABLE_ENTITY,
		"invalid_request",
		message,
		Some(vec![field.to_string()]),
	)
}
