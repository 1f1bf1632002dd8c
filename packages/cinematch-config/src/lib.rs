mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, Limits, Security, Service};

use std::{
	fs,
	net::SocketAddr,
	path::{Path, PathBuf},
};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent());

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	let http_addr: SocketAddr = cfg.service.http_bind.parse().map_err(|_| Error::Validation {
		message: "service.http_bind must be a socket address.".to_string(),
	})?;

	if cfg.security.bind_localhost_only && !http_addr.ip().is_loopback() {
		return Err(Error::Validation {
			message:
				"service.http_bind must be a loopback address when security.bind_localhost_only is true."
					.to_string(),
		});
	}

	for (label, value) in [
		("catalog.dataset_path", &cfg.catalog.dataset_path),
		("catalog.embeddings_path", &cfg.catalog.embeddings_path),
	] {
		if value.as_os_str().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	for origin in &cfg.security.cors_allow_origins {
		let scheme_ok = origin.starts_with("http://") || origin.starts_with("https://");

		if !scheme_ok || origin.ends_with('/') || origin.chars().any(char::is_whitespace) {
			return Err(Error::Validation {
				message: format!(
					"security.cors_allow_origins entry {origin:?} must be a bare http(s) origin."
				),
			});
		}
	}

	let limits = &cfg.limits;

	for (label, value) in [
		("limits.default_limit", limits.default_limit),
		("limits.max_limit", limits.max_limit),
		("limits.similar_default_limit", limits.similar_default_limit),
		("limits.similar_max_limit", limits.similar_max_limit),
		("limits.min_query_chars", limits.min_query_chars),
	] {
		if value == 0 {
			return Err(Error::Validation {
				message: format!("{label} must be greater than zero."),
			});
		}
	}

	if limits.default_limit > limits.max_limit {
		return Err(Error::Validation {
			message: "limits.default_limit must not exceed limits.max_limit.".to_string(),
		});
	}
	if limits.similar_default_limit > limits.similar_max_limit {
		return Err(Error::Validation {
			message: "limits.similar_default_limit must not exceed limits.similar_max_limit."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config, base_dir: Option<&Path>) {
	cfg.service.log_level = cfg.service.log_level.trim().to_string();

	for origin in &mut cfg.security.cors_allow_origins {
		*origin = origin.trim().to_string();
	}

	if cfg.service.log_level.is_empty() {
		cfg.service.log_level = "info".to_string();
	}

	let Some(base_dir) = base_dir else { return };

	cfg.catalog.dataset_path = resolve_relative(base_dir, &cfg.catalog.dataset_path);
	cfg.catalog.embeddings_path = resolve_relative(base_dir, &cfg.catalog.embeddings_path);
}

fn resolve_relative(base_dir: &Path, path: &Path) -> PathBuf {
	if path.as_os_str().is_empty() || path.is_absolute() {
		return path.to_path_buf();
	}

	base_dir.join(path)
}
