use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use cinematch_config::Config;

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let table = root
		.as_table_mut()
		.expect("Template config must be a table.")
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.unwrap_or_else(|| panic!("Template config must include [{section}]."));

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("cinematch_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn base_config() -> Config {
	toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse test config.")
}

#[test]
fn sample_config_is_valid() {
	let cfg = base_config();

	assert!(cinematch_config::validate(&cfg).is_ok());
	assert_eq!(cfg.limits.max_limit, 50);
	assert_eq!(cfg.limits.similar_max_limit, 20);
}

#[test]
fn load_resolves_catalog_paths_against_config_dir() {
	let path = write_temp_config(SAMPLE_CONFIG_TEMPLATE_TOML.to_string());
	let result = cinematch_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected sample config to load.");
	let base_dir = path.parent().expect("Temp config must have a parent directory.");

	assert_eq!(cfg.catalog.dataset_path, base_dir.join("data/rich_movies_dataset.csv"));
	assert_eq!(cfg.catalog.embeddings_path, base_dir.join("data/movie_vectors.json"));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
	let payload = r#"
[service]
http_bind = "127.0.0.1:8000"

[catalog]
dataset_path = "/srv/movies.csv"
embeddings_path = "/srv/vectors.json"
"#;
	let cfg: Config = toml::from_str(payload).expect("Failed to parse minimal config.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.limits.default_limit, 10);
	assert_eq!(cfg.limits.similar_default_limit, 5);
	assert_eq!(cfg.limits.min_query_chars, 2);
	assert!(cfg.security.bind_localhost_only);
	assert_eq!(
		cfg.security.cors_allow_origins,
		vec!["http://localhost:3000".to_string(), "http://127.0.0.1:3000".to_string()]
	);
	assert!(cinematch_config::validate(&cfg).is_ok());
}

#[test]
fn non_loopback_bind_is_rejected_when_localhost_only() {
	let payload = sample_toml_with("service", "http_bind", Value::String("0.0.0.0:8000".into()));
	let path = write_temp_config(payload);
	let result = cinematch_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected loopback validation error.");

	assert!(
		err.to_string().contains("service.http_bind must be a loopback address"),
		"Unexpected error: {err}"
	);
}

#[test]
fn non_loopback_bind_is_allowed_when_opted_out() {
	let mut cfg = base_config();

	cfg.service.http_bind = "0.0.0.0:8000".to_string();
	cfg.security.bind_localhost_only = false;

	assert!(cinematch_config::validate(&cfg).is_ok());
}

#[test]
fn http_bind_must_parse() {
	let mut cfg = base_config();

	cfg.service.http_bind = "localhost".to_string();

	let err = cinematch_config::validate(&cfg).expect_err("Expected socket address error.");

	assert!(
		err.to_string().contains("service.http_bind must be a socket address."),
		"Unexpected error: {err}"
	);
}

#[test]
fn limits_must_be_positive() {
	let payload = sample_toml_with("limits", "max_limit", Value::Integer(0));
	let path = write_temp_config(payload);
	let result = cinematch_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected limit validation error.");

	assert!(
		err.to_string().contains("limits.max_limit must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn default_limits_must_not_exceed_maxima() {
	let mut cfg = base_config();

	cfg.limits.default_limit = 60;

	let err = cinematch_config::validate(&cfg).expect_err("Expected default limit error.");

	assert!(
		err.to_string().contains("limits.default_limit must not exceed limits.max_limit."),
		"Unexpected error: {err}"
	);

	cfg = base_config();
	cfg.limits.similar_default_limit = 21;

	let err = cinematch_config::validate(&cfg).expect_err("Expected similar limit error.");

	assert!(
		err.to_string()
			.contains("limits.similar_default_limit must not exceed limits.similar_max_limit."),
		"Unexpected error: {err}"
	);
}

#[test]
fn catalog_paths_must_be_non_empty() {
	let mut cfg = base_config();

	cfg.catalog.embeddings_path = PathBuf::new();

	let err = cinematch_config::validate(&cfg).expect_err("Expected empty path error.");

	assert!(
		err.to_string().contains("catalog.embeddings_path must be non-empty."),
		"Unexpected error: {err}"
	);
}

#[test]
fn cors_origins_must_be_bare_origins() {
	for origin in ["localhost:3000", "http://localhost:3000/", "http://local host:3000"] {
		let mut cfg = base_config();

		cfg.security.cors_allow_origins = vec![origin.to_string()];

		let err = cinematch_config::validate(&cfg).expect_err("Expected origin validation error.");

		assert!(
			err.to_string().contains("security.cors_allow_origins entry"),
			"Unexpected error for {origin}: {err}"
		);
	}
}

#[test]
fn cors_origins_are_trimmed_on_load() {
	let origins = Value::Array(vec![Value::String(" https://cinematch.example ".into())]);
	let path = write_temp_config(sample_toml_with("security", "cors_allow_origins", origins));
	let result = cinematch_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected config to load.");

	assert_eq!(cfg.security.cors_allow_origins, vec!["https://cinematch.example".to_string()]);
}

#[test]
fn unreadable_config_reports_path() {
	let path = env::temp_dir().join("cinematch_config_test_missing.toml");
	let err = cinematch_config::load(&path).expect_err("Expected read error.");

	assert!(err.to_string().contains("Failed to read config file"), "Unexpected error: {err}");
}
