use std::collections::HashSet;

use cinematch_catalog::{Capabilities, Catalog, MovieRecord};
use cinematch_domain::fields;

use crate::scoring::{CAST_BOOST, COLLECTION_BOOST, DIRECTOR_BOOST};

/// Reference movie whose attributes candidates are compared against.
#[derive(Debug, Default)]
pub struct Anchor<'a> {
	pub imdb_id: &'a str,
	pub genres: HashSet<String>,
	pub cast: HashSet<String>,
	pub director: String,
	pub collection: Option<&'a str>,
	capabilities: Capabilities,
}
impl<'a> Anchor<'a> {
	pub fn from_record(movie: &'a MovieRecord, capabilities: Capabilities) -> Self {
		let cast = if capabilities.has_cast {
			fields::parse_set(movie.cast.as_deref())
		} else {
			HashSet::new()
		};
		let director = if capabilities.has_director {
			fields::normalize(movie.directors.as_deref())
		} else {
			String::new()
		};
		let collection = if capabilities.has_collection {
			movie.collection.as_deref().filter(|value| !value.trim().is_empty())
		} else {
			None
		};

		Self {
			imdb_id: &movie.imdb_id,
			genres: fields::parse_set(Some(movie.genres.as_str())),
			cast,
			director,
			collection,
			capabilities,
		}
	}

	pub fn at(catalog: &'a Catalog, position: usize) -> Option<Self> {
		catalog.get(position).map(|movie| Self::from_record(movie, catalog.capabilities()))
	}

	/// Empty anchor: no genres, no boosts.
	pub fn none() -> Self {
		Self::default()
	}

	pub fn genre_overlap(&self, movie: &MovieRecord) -> usize {
		fields::overlap_count(Some(movie.genres.as_str()), &self.genres)
	}

	/// Shared collection, director, and cast affinity of `movie` with this anchor.
	pub fn categorical_boost(&self, movie: &MovieRecord) -> f64 {
		let mut boost = 0.0;

		if self.capabilities.has_collection
			&& let Some(collection) = self.collection
			&& movie.collection.as_deref() == Some(collection)
		{
			boost += COLLECTION_BOOST;
		}
		if self.capabilities.has_director
			&& !self.director.is_empty()
			&& fields::normalize(movie.directors.as_deref()) == self.director
		{
			boost += DIRECTOR_BOOST;
		}
		if self.capabilities.has_cast && !self.cast.is_empty() {
			boost += fields::overlap_count(movie.cast.as_deref(), &self.cast) as f64 * CAST_BOOST;
		}

		boost
	}
}
