use cinematch_domain::fields;

use crate::{
	CatalogService, MovieHit,
	output::{self, window},
	scoring::{self, cmp_f64_desc},
};

impl CatalogService {
	/// Whole catalog by popularity, most popular first.
	pub fn get_trending(&self, offset: usize, limit: usize) -> Vec<MovieHit> {
		let hits = window(self.by_popularity.iter(), offset, limit)
			.into_iter()
			.map(|position| MovieHit::from_record(&self.catalog.movies()[*position]))
			.collect();

		output::finish(hits)
	}

	/// Case-insensitive title substring match ranked by popularity. No fallback when nothing
	/// matches.
	pub fn search_movies(&self, query: &str, offset: usize, limit: usize) -> Vec<MovieHit> {
		let needle = fields::normalize(Some(query));
		let mut matches: Vec<usize> = (0..self.catalog.len())
			.filter(|position| self.normalized_titles[*position].contains(needle.as_str()))
			.collect();

		tracing::debug!(query = %needle, matches = matches.len(), "Title search.");

		let movies = self.catalog.movies();

		matches.sort_by(|a, b| cmp_f64_desc(movies[*a].popularity, movies[*b].popularity));

		let hits = window(matches, offset, limit)
			.into_iter()
			.map(|position| MovieHit::from_record(&movies[position]))
			.collect();

		output::finish(hits)
	}

	/// Movies sharing at least one requested genre, ranked by the unboosted score. An empty request
	/// falls back to trending.
	pub fn recommend_by_genres<S>(&self, genres: &[S], offset: usize, limit: usize) -> Vec<MovieHit>
	where
		S: AsRef<str>,
	{
		if genres.is_empty() {
			return self.get_trending(offset, limit);
		}

		let wanted = fields::label_set(genres);
		let candidates = self
			.catalog
			.movies()
			.iter()
			.enumerate()
			.filter(|(_, movie)| fields::overlap_count(Some(movie.genres.as_str()), &wanted) > 0)
			.map(|(position, movie)| (position, movie, 0.0))
			.collect();
		let mut scored = scoring::score_candidates(candidates);

		tracing::debug!(genres = ?wanted, candidates = scored.len(), "Genre recommendation.");

		scored.sort_by(scoring::cmp_score_rating_votes);

		let hits = window(scored, offset, limit).iter().map(MovieHit::from_scored).collect();

		output::finish(hits)
	}
}
