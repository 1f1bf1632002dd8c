use cinematch_domain::fields;

use crate::{CastMember, CatalogService, Credits, CrewMember};

pub const MAX_CAST: usize = 10;

impl CatalogService {
	/// Cast and director for a movie. Unknown ids yield empty credits.
	pub fn get_movie_credits(&self, imdb_id: &str) -> Credits {
		let Some(movie) =
			self.catalog.position_of_id(imdb_id).and_then(|position| self.catalog.get(position))
		else {
			return Credits::default();
		};
		let capabilities = self.catalog.capabilities();
		let mut credits = Credits::default();

		if capabilities.has_cast {
			credits.cast = fields::parse_ordered(movie.cast.as_deref())
				.into_iter()
				.take(MAX_CAST)
				.map(|name| CastMember { name })
				.collect();
		}

		if capabilities.has_director
			&& let Some(directors) = movie.directors.as_deref().map(str::trim)
			&& !directors.is_empty()
		{
			credits
				.crew
				.push(CrewMember { name: directors.to_string(), job: "Director".to_string() });
		}

		credits
	}
}
