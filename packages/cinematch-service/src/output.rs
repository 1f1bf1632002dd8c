use serde::{Deserialize, Serialize};

use cinematch_catalog::MovieRecord;
use cinematch_domain::sanitize::{Sanitize, finite_opt};

use crate::scoring::ScoredMovie;

/// Movie as returned to callers. Floating fields are `None` whenever the value is not finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieHit {
	pub imdb_id: String,
	pub title: String,
	pub genres: String,
	pub cast: Option<String>,
	pub directors: Option<String>,
	pub collection: Option<String>,
	pub year: i32,
	pub popularity: Option<f64>,
	pub vote_average: Option<f64>,
	pub vote_count: u64,
	/// Rank score, present only for pipelines that apply the scoring formula.
	pub score: Option<f64>,
	pub boost: Option<f64>,
}
impl MovieHit {
	pub fn from_record(movie: &MovieRecord) -> Self {
		Self {
			imdb_id: movie.imdb_id.clone(),
			title: movie.title.clone(),
			genres: movie.genres.clone(),
			cast: movie.cast.clone(),
			directors: movie.directors.clone(),
			collection: movie.collection.clone(),
			year: movie.year,
			popularity: Some(movie.popularity),
			vote_average: Some(movie.vote_average),
			vote_count: movie.vote_count,
			score: None,
			boost: None,
		}
	}

	pub fn from_scored(scored: &ScoredMovie<'_>) -> Self {
		Self {
			score: Some(scored.score),
			boost: Some(scored.boost),
			..Self::from_record(scored.movie)
		}
	}
}
impl Sanitize for MovieHit {
	fn sanitize(self) -> Self {
		Self {
			popularity: finite_opt(self.popularity),
			vote_average: finite_opt(self.vote_average),
			score: finite_opt(self.score),
			boost: finite_opt(self.boost),
			..self
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
	pub cast: Vec<CastMember>,
	pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
	pub name: String,
	pub job: String,
}

/// `limit` items starting at `offset`.
pub fn window<I>(items: I, offset: usize, limit: usize) -> Vec<I::Item>
where
	I: IntoIterator,
{
	items.into_iter().skip(offset).take(limit).collect()
}

/// Sanitizes the final page. Runs over at most `limit` rows.
pub fn finish(hits: Vec<MovieHit>) -> Vec<MovieHit> {
	hits.sanitize()
}
