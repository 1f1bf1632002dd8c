pub mod anchor;
pub mod credits;
pub mod listing;
pub mod output;
pub mod personal;
pub mod scoring;
pub mod similar;

pub use output::{CastMember, Credits, CrewMember, MovieHit};
pub use personal::{PersonalRequest, TierPlan, TierSelection};

use cinematch_catalog::{Catalog, Dataset, EmbeddingMatrix};
use cinematch_domain::fields;

use crate::scoring::cmp_f64_desc;

/// Read-only ranking engine over a loaded dataset. Built once at startup and shared by reference
/// across requests.
pub struct CatalogService {
	catalog: Catalog,
	embeddings: EmbeddingMatrix,
	normalized_titles: Vec<String>,
	by_popularity: Vec<usize>,
}
impl CatalogService {
	pub fn new(dataset: Dataset) -> Self {
		let Dataset { catalog, embeddings } = dataset;
		let normalized_titles = catalog
			.movies()
			.iter()
			.map(|movie| fields::normalize(Some(movie.title.as_str())))
			.collect();
		let mut by_popularity: Vec<usize> = (0..catalog.len()).collect();

		by_popularity.sort_by(|a, b| {
			cmp_f64_desc(catalog.movies()[*a].popularity, catalog.movies()[*b].popularity)
		});

		Self { catalog, embeddings, normalized_titles, by_popularity }
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}
}
