use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read dataset at {path:?}.")]
	ReadDataset { path: PathBuf, source: csv::Error },
	#[error("Failed to parse dataset row {row} at {path:?}.")]
	ParseDataset { path: PathBuf, row: usize, source: csv::Error },
	#[error("Failed to read embeddings at {path:?}.")]
	ReadEmbeddings { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse embeddings at {path:?}.")]
	ParseEmbeddings { path: PathBuf, source: serde_json::Error },
	#[error("Duplicate imdb_id {imdb_id:?} at row {row}.")]
	DuplicateId { imdb_id: String, row: usize },
	#[error("Non-finite {field} for imdb_id {imdb_id:?}.")]
	NonFinite { imdb_id: String, field: &'static str },
	#[error("Embedding row {row} has dimension {found}, expected {expected}.")]
	RaggedEmbedding { row: usize, expected: usize, found: usize },
	#[error("Embedding row {row} holds a non-finite value.")]
	NonFiniteEmbedding { row: usize },
	#[error("Catalog has {catalog} rows but the embedding matrix has {embeddings}.")]
	Misaligned { catalog: usize, embeddings: usize },
	#[error("Embedding id {found:?} at row {row} does not match catalog id {expected:?}.")]
	IdMismatch { row: usize, expected: String, found: String },
}
