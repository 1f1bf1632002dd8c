use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	#[serde(default)]
	pub limits: Limits,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
	/// CSV export of the cleaned movie table.
	pub dataset_path: PathBuf,
	/// JSON artifact holding one vector per dataset row, in dataset order.
	pub embeddings_path: PathBuf,
}

/// Request window bounds enforced by the HTTP layer. The engine itself trusts the values it
/// receives.
#[derive(Debug, Clone, Deserialize)]
pub struct Limits {
	#[serde(default = "default_limit")]
	pub default_limit: usize,
	#[serde(default = "default_max_limit")]
	pub max_limit: usize,
	#[serde(default = "default_similar_limit")]
	pub similar_default_limit: usize,
	#[serde(default = "default_similar_max_limit")]
	pub similar_max_limit: usize,
	#[serde(default = "default_min_query_chars")]
	pub min_query_chars: usize,
}
impl Default for Limits {
	fn default() -> Self {
		Self {
			default_limit: default_limit(),
			max_limit: default_max_limit(),
			similar_default_limit: default_similar_limit(),
			similar_max_limit: default_similar_max_limit(),
			min_query_chars: default_min_query_chars(),
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct Security {
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
	/// Browser origins allowed to call the API, e.g. a local frontend dev server.
	#[serde(default = "default_cors_allow_origins")]
	pub cors_allow_origins: Vec<String>,
}
impl Default for Security {
	fn default() -> Self {
		Self {
			bind_localhost_only: default_bind_localhost_only(),
			cors_allow_origins: default_cors_allow_origins(),
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_limit() -> usize {
	10
}

fn default_max_limit() -> usize {
	50
}

fn default_similar_limit() -> usize {
	5
}

fn default_similar_max_limit() -> usize {
	20
}

fn default_min_query_chars() -> usize {
	2
}

fn default_bind_localhost_only() -> bool {
	true
}

fn default_cors_allow_origins() -> Vec<String> {
	vec!["http://localhost:3000".to_string(), "http://127.0.0.1:3000".to_string()]
}
