use std::cmp::Ordering;

use cinematch_catalog::MovieRecord;

pub const RATING_WEIGHT: f64 = 6.0;
pub const VOTES_WEIGHT: f64 = 4.0;
pub const POPULARITY_WEIGHT: f64 = 3.0;
pub const RECENCY_WEIGHT: f64 = 3.0;

pub const COLLECTION_BOOST: f64 = 4.0;
pub const DIRECTOR_BOOST: f64 = 2.5;
pub const CAST_BOOST: f64 = 2.0;
pub const EMBEDDING_BOOST: f64 = 0.5;

/// Per-row scoring inputs. `max_year` is the newest year in the candidate set being ranked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreContext {
	pub max_year: i32,
	pub boost: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct ScoredMovie<'a> {
	pub position: usize,
	pub movie: &'a MovieRecord,
	pub boost: f64,
	pub score: f64,
}

pub fn score(movie: &MovieRecord, context: ScoreContext) -> f64 {
	movie.vote_average * RATING_WEIGHT
		+ (movie.vote_count as f64).ln_1p() * VOTES_WEIGHT
		+ movie.popularity * POPULARITY_WEIGHT
		+ (f64::from(movie.year) - f64::from(context.max_year)) * RECENCY_WEIGHT
		+ context.boost
}

pub fn max_year<'a, I>(movies: I) -> Option<i32>
where
	I: IntoIterator<Item = &'a MovieRecord>,
{
	movies.into_iter().map(|movie| movie.year).max()
}

/// Scores a candidate set against its own newest year. Input order is preserved.
pub fn score_candidates<'a>(
	candidates: Vec<(usize, &'a MovieRecord, f64)>,
) -> Vec<ScoredMovie<'a>> {
	let Some(max_year) = max_year(candidates.iter().map(|(_, movie, _)| *movie)) else {
		return Vec::new();
	};

	candidates
		.into_iter()
		.map(|(position, movie, boost)| ScoredMovie {
			position,
			movie,
			boost,
			score: score(movie, ScoreContext { max_year, boost }),
		})
		.collect()
}

/// Normalized dot product. Mismatched, empty, or zero-length vectors have similarity zero.
pub fn cosine_similarity(lhs: &[f32], rhs: &[f32]) -> f64 {
	if lhs.is_empty() || lhs.len() != rhs.len() {
		return 0.0;
	}

	let mut dot = 0.0_f64;
	let mut lhs_norm = 0.0_f64;
	let mut rhs_norm = 0.0_f64;

	for (l, r) in lhs.iter().zip(rhs.iter()) {
		let (l, r) = (f64::from(*l), f64::from(*r));

		dot += l * r;
		lhs_norm += l * l;
		rhs_norm += r * r;
	}

	if lhs_norm <= f64::EPSILON || rhs_norm <= f64::EPSILON {
		return 0.0;
	}

	(dot / (lhs_norm.sqrt() * rhs_norm.sqrt())).clamp(-1.0, 1.0)
}

pub fn cmp_f64_desc(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}

/// Descending by score, then rating, then vote count.
pub fn cmp_score_rating_votes(a: &ScoredMovie<'_>, b: &ScoredMovie<'_>) -> Ordering {
	cmp_f64_desc(a.score, b.score)
		.then_with(|| cmp_f64_desc(a.movie.vote_average, b.movie.vote_average))
		.then_with(|| b.movie.vote_count.cmp(&a.movie.vote_count))
}
