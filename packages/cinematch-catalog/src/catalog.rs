use std::collections::HashMap;

use cinematch_domain::fields;

use crate::{Error, Result, models::{Capabilities, MovieRecord}};

/// Immutable movie table with its identifier and title indexes.
#[derive(Debug)]
pub struct Catalog {
	movies: Vec<MovieRecord>,
	by_id: HashMap<String, usize>,
	by_title: HashMap<String, usize>,
	capabilities: Capabilities,
}
impl Catalog {
	pub fn new(movies: Vec<MovieRecord>, capabilities: Capabilities) -> Result<Self> {
		let mut by_id = HashMap::with_capacity(movies.len());
		let mut by_title = HashMap::with_capacity(movies.len());

		for (row, movie) in movies.iter().enumerate() {
			for (field, value) in
				[("popularity", movie.popularity), ("vote_average", movie.vote_average)]
			{
				if !value.is_finite() {
					return Err(Error::NonFinite { imdb_id: movie.imdb_id.clone(), field });
				}
			}

			if by_id.insert(movie.imdb_id.clone(), row).is_some() {
				return Err(Error::DuplicateId { imdb_id: movie.imdb_id.clone(), row });
			}

			let title = fields::normalize(Some(movie.title.as_str()));

			if !title.is_empty() {
				by_title.entry(title).or_insert(row);
			}
		}

		Ok(Self { movies, by_id, by_title, capabilities })
	}

	pub fn len(&self) -> usize {
		self.movies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.movies.is_empty()
	}

	pub fn movies(&self) -> &[MovieRecord] {
		&self.movies
	}

	pub fn get(&self, position: usize) -> Option<&MovieRecord> {
		self.movies.get(position)
	}

	pub fn capabilities(&self) -> Capabilities {
		self.capabilities
	}

	pub fn position_of_id(&self, imdb_id: &str) -> Option<usize> {
		self.by_id.get(imdb_id).copied()
	}

	/// Case-insensitive title lookup. Duplicate titles resolve to the earliest row.
	pub fn position_of_title(&self, title: &str) -> Option<usize> {
		self.by_title.get(&fields::normalize(Some(title))).copied()
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.movies.iter().map(|movie| movie.imdb_id.as_str())
	}
}
