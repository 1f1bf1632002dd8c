use rand::{Rng, seq::SliceRandom};

use crate::{
	CatalogService, MovieHit,
	anchor::Anchor,
	output::{self, window},
	scoring::{self, EMBEDDING_BOOST, cmp_f64_desc},
};

impl CatalogService {
	/// Movies sharing a genre with the anchor, boosted by collection, director, cast, and embedding
	/// affinity. An unknown anchor yields a random sample of `limit` movies instead.
	pub fn recommend_similar(&self, imdb_id: &str, offset: usize, limit: usize) -> Vec<MovieHit> {
		self.recommend_similar_with(&mut rand::thread_rng(), imdb_id, offset, limit)
	}

	pub fn recommend_similar_with<R>(
		&self,
		rng: &mut R,
		imdb_id: &str,
		offset: usize,
		limit: usize,
	) -> Vec<MovieHit>
	where
		R: Rng + ?Sized,
	{
		let Some(position) = self.catalog.position_of_id(imdb_id) else {
			tracing::debug!(imdb_id, limit, "Unknown anchor. Sampling the catalog.");

			return self.random_sample(rng, limit);
		};
		let Some(anchor) = Anchor::at(&self.catalog, position) else {
			return Vec::new();
		};
		let anchor_vector = self.embeddings.row(position).unwrap_or_default();
		let candidates = self
			.catalog
			.movies()
			.iter()
			.enumerate()
			.filter(|(_, movie)| anchor.genre_overlap(movie) > 0)
			.map(|(candidate, movie)| {
				let similarity = self
					.embeddings
					.row(candidate)
					.map(|vector| scoring::cosine_similarity(vector, anchor_vector))
					.unwrap_or(0.0);
				let boost = anchor.categorical_boost(movie) + similarity * EMBEDDING_BOOST;

				(candidate, movie, boost)
			})
			.filter(|(_, movie, _)| movie.imdb_id != anchor.imdb_id)
			.collect();
		let mut scored = scoring::score_candidates(candidates);

		tracing::debug!(imdb_id, candidates = scored.len(), "Similar recommendation.");

		scored.sort_by(|a, b| cmp_f64_desc(a.score, b.score));

		let hits = window(scored, offset, limit).iter().map(MovieHit::from_scored).collect();

		output::finish(hits)
	}

	fn random_sample<R>(&self, rng: &mut R, limit: usize) -> Vec<MovieHit>
	where
		R: Rng + ?Sized,
	{
		let hits = self
			.catalog
			.movies()
			.choose_multiple(rng, limit)
			.map(MovieHit::from_record)
			.collect();

		output::finish(hits)
	}
}
