use std::sync::Arc;

use axum::http::HeaderValue;

use cinematch_config::{Config, Limits};
use cinematch_service::CatalogService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<CatalogService>,
	pub limits: Limits,
	pub allowed_origins: Vec<HeaderValue>,
}
impl AppState {
	pub fn new(config: &Config) -> color_eyre::Result<Self> {
		let dataset =
			cinematch_catalog::load(&config.catalog.dataset_path, &config.catalog.embeddings_path)?;
		let allowed_origins = parse_origins(&config.security.cors_allow_origins)?;

		Ok(Self::from_parts(CatalogService::new(dataset), config.limits.clone(), allowed_origins))
	}

	pub fn from_parts(
		service: CatalogService,
		limits: Limits,
		allowed_origins: Vec<HeaderValue>,
	) -> Self {
		Self { service: Arc::new(service), limits, allowed_origins }
	}
}

pub fn parse_origins(origins: &[String]) -> color_eyre::Result<Vec<HeaderValue>> {
	origins.iter().map(|origin| Ok(HeaderValue::from_str(origin)?)).collect()
}
