use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
	Dataset, Error, Result,
	catalog::Catalog,
	embedding::EmbeddingMatrix,
	models::{Capabilities, MovieRecord},
};

#[derive(Debug, Deserialize)]
struct EmbeddingArtifact {
	#[serde(default)]
	movie_ids: Option<Vec<String>>,
	vectors: Vec<Vec<f32>>,
}

/// Loads the dataset and its embedding matrix and checks that they describe the same rows.
pub fn load(dataset_path: &Path, embeddings_path: &Path) -> Result<Dataset> {
	let catalog = load_catalog(dataset_path)?;
	let (movie_ids, embeddings) = load_embeddings(embeddings_path)?;

	if let Some(movie_ids) = movie_ids {
		check_ids(&catalog, &movie_ids)?;
	}

	let dataset = Dataset::new(catalog, embeddings)?;

	tracing::info!(
		rows = dataset.catalog.len(),
		dim = dataset.embeddings.dim(),
		capabilities = ?dataset.catalog.capabilities(),
		"Catalog loaded."
	);

	Ok(dataset)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
	let mut reader = csv::ReaderBuilder::new()
		.trim(csv::Trim::Headers)
		.from_path(path)
		.map_err(|source| Error::ReadDataset { path: path.to_path_buf(), source })?;
	let headers = reader
		.headers()
		.map_err(|source| Error::ReadDataset { path: path.to_path_buf(), source })?
		.clone();
	let capabilities = Capabilities::from_headers(headers.iter());
	let mut movies = Vec::new();

	for (row, record) in reader.deserialize::<MovieRecord>().enumerate() {
		let movie =
			record.map_err(|source| Error::ParseDataset { path: path.to_path_buf(), row, source })?;

		movies.push(movie);
	}

	Catalog::new(movies, capabilities)
}

fn load_embeddings(path: &Path) -> Result<(Option<Vec<String>>, EmbeddingMatrix)> {
	let raw = fs::read(path)
		.map_err(|source| Error::ReadEmbeddings { path: path.to_path_buf(), source })?;
	let artifact: EmbeddingArtifact = serde_json::from_slice(&raw)
		.map_err(|source| Error::ParseEmbeddings { path: path.to_path_buf(), source })?;
	let matrix = EmbeddingMatrix::new(artifact.vectors)?;

	Ok((artifact.movie_ids, matrix))
}

fn check_ids(catalog: &Catalog, movie_ids: &[String]) -> Result<()> {
	if movie_ids.len() != catalog.len() {
		return Err(Error::Misaligned { catalog: catalog.len(), embeddings: movie_ids.len() });
	}

	for (row, (expected, found)) in catalog.ids().zip(movie_ids).enumerate() {
		if expected != found {
			return Err(Error::IdMismatch {
				row,
				expected: expected.to_string(),
				found: found.clone(),
			});
		}
	}

	Ok(())
}
