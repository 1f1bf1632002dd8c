mod error;

pub use error::{Error, Result};

use cinematch_catalog::{Capabilities, Catalog, Dataset, EmbeddingMatrix, MovieRecord};

/// Builder for a single catalog row with neutral defaults.
#[derive(Debug, Clone)]
pub struct MovieFixture {
	record: MovieRecord,
	vector: Option<Vec<f32>>,
}
impl MovieFixture {
	pub fn new(imdb_id: &str, title: &str) -> Self {
		Self {
			record: MovieRecord {
				imdb_id: imdb_id.to_string(),
				title: title.to_string(),
				genres: String::new(),
				cast: None,
				directors: None,
				collection: None,
				year: 2000,
				popularity: 0.0,
				vote_average: 0.0,
				vote_count: 0,
			},
			vector: None,
		}
	}

	pub fn genres(mut self, genres: &str) -> Self {
		self.record.genres = genres.to_string();

		self
	}

	pub fn cast(mut self, cast: &str) -> Self {
		self.record.cast = Some(cast.to_string());

		self
	}

	pub fn directors(mut self, directors: &str) -> Self {
		self.record.directors = Some(directors.to_string());

		self
	}

	pub fn collection(mut self, collection: &str) -> Self {
		self.record.collection = Some(collection.to_string());

		self
	}

	pub fn year(mut self, year: i32) -> Self {
		self.record.year = year;

		self
	}

	pub fn popularity(mut self, popularity: f64) -> Self {
		self.record.popularity = popularity;

		self
	}

	pub fn rating(mut self, vote_average: f64, vote_count: u64) -> Self {
		self.record.vote_average = vote_average;
		self.record.vote_count = vote_count;

		self
	}

	pub fn vector(mut self, vector: &[f32]) -> Self {
		self.vector = Some(vector.to_vec());

		self
	}
}

/// Builds a dataset from fixtures. Rows without an explicit vector get a zero vector of the
/// common dimensionality.
pub fn dataset(fixtures: Vec<MovieFixture>, capabilities: Capabilities) -> Result<Dataset> {
	let dim = fixtures.iter().filter_map(|fixture| fixture.vector.as_ref().map(Vec::len)).max();
	let dim = dim.unwrap_or(1);
	let mut records = Vec::with_capacity(fixtures.len());
	let mut vectors = Vec::with_capacity(fixtures.len());

	for fixture in fixtures {
		let vector = fixture.vector.unwrap_or_else(|| vec![0.0; dim]);

		if vector.len() != dim {
			return Err(Error::Message(format!(
				"Fixture {} has a {}-dimensional vector, expected {dim}.",
				fixture.record.imdb_id,
				vector.len()
			)));
		}

		records.push(fixture.record);
		vectors.push(vector);
	}

	let catalog = Catalog::new(records, capabilities)?;
	let embeddings = EmbeddingMatrix::new(vectors)?;

	Ok(Dataset::new(catalog, embeddings)?)
}

/// Three-row catalog: two action titles and one drama.
pub fn action_drama_trio() -> Vec<MovieFixture> {
	vec![
		MovieFixture::new("tt0000001", "A")
			.genres("Action")
			.rating(8.0, 5_000)
			.year(2020)
			.popularity(50.0),
		MovieFixture::new("tt0000002", "B")
			.genres("Action")
			.rating(7.0, 3_000)
			.year(2019)
			.popularity(40.0),
		MovieFixture::new("tt0000003", "C")
			.genres("Drama")
			.rating(9.0, 10_000)
			.year(2021)
			.popularity(60.0),
	]
}
