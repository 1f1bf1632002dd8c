use std::{cmp::Ordering, collections::HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cinematch_catalog::MovieRecord;
use cinematch_domain::{fields, mood};

use crate::{
	CatalogService, MovieHit,
	anchor::Anchor,
	output::{self, window},
	scoring::{self, ScoredMovie},
};

pub const MIN_RATING: f64 = 6.5;
pub const MIN_VOTES: u64 = 2_000;
/// Release years must be strictly greater than this.
pub const MIN_YEAR_EXCLUSIVE: i32 = 1900;

/// Preference payload for personal recommendations.
///
/// `rating`, `year_from`, and `year_to` are accepted in any JSON shape and never applied as
/// filters. `mood` resolves to a genre set when it is a known label string; it is reported but not
/// merged into tier selection, so callers that want mood to steer results fold its genres into
/// `genres` themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRequest {
	#[serde(default)]
	pub movie: Option<String>,
	#[serde(default)]
	pub genres: Option<Vec<String>>,
	#[serde(default)]
	pub rating: Option<Value>,
	#[serde(default)]
	pub mood: Option<Value>,
	#[serde(default)]
	pub year_from: Option<Value>,
	#[serde(default)]
	pub year_to: Option<Value>,
}

/// Which signal the primary tier was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TierSelection {
	/// Primary: anchor-genre matches. Secondary: user-genre-only matches.
	AnchorMatched,
	/// No anchor-genre match. Primary: user-genre matches. Secondary: every gated row.
	UserMatched,
	/// Neither signal matched. Primary is empty. Secondary: every gated row.
	Unfiltered,
}

/// Row indexes (into the gated candidate list) for each tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierPlan {
	pub selection: TierSelection,
	pub primary: Vec<usize>,
	pub secondary: Vec<usize>,
}
impl TierPlan {
	/// Partitions rows given their `(anchor_overlap, user_overlap)` genre counts.
	pub fn select(overlaps: &[(usize, usize)]) -> Self {
		let anchor_matched: Vec<usize> = overlaps
			.iter()
			.enumerate()
			.filter(|(_, (anchor, _))| *anchor > 0)
			.map(|(idx, _)| idx)
			.collect();
		let user_matched: Vec<usize> = overlaps
			.iter()
			.enumerate()
			.filter(|(_, (anchor, user))| *anchor == 0 && *user > 0)
			.map(|(idx, _)| idx)
			.collect();

		if !anchor_matched.is_empty() {
			return Self {
				selection: TierSelection::AnchorMatched,
				primary: anchor_matched,
				secondary: user_matched,
			};
		}

		let everything = (0..overlaps.len()).collect();

		if !user_matched.is_empty() {
			return Self {
				selection: TierSelection::UserMatched,
				primary: user_matched,
				secondary: everything,
			};
		}

		Self { selection: TierSelection::Unfiltered, primary: Vec::new(), secondary: everything }
	}
}

pub fn passes_quality_gate(movie: &MovieRecord) -> bool {
	movie.vote_average >= MIN_RATING
		&& movie.vote_count >= MIN_VOTES
		&& movie.year > MIN_YEAR_EXCLUSIVE
}

impl CatalogService {
	/// Quality-gated recommendations ranked in two tiers around an optional anchor title and
	/// optional preferred genres.
	pub fn personal_recommend(
		&self,
		req: &PersonalRequest,
		offset: usize,
		limit: usize,
	) -> Vec<MovieHit> {
		let capabilities = self.catalog.capabilities();
		let gated: Vec<(usize, &MovieRecord)> = self
			.catalog
			.movies()
			.iter()
			.enumerate()
			.filter(|(_, movie)| passes_quality_gate(movie))
			.collect();
		let anchor = req
			.movie
			.as_deref()
			.and_then(|title| self.catalog.position_of_title(title))
			.and_then(|position| self.catalog.get(position))
			.map(|movie| Anchor::from_record(movie, capabilities))
			.unwrap_or_else(Anchor::none);
		let user_genres: HashSet<String> =
			req.genres.as_deref().map(fields::label_set).unwrap_or_default();
		let mood_genres = mood::mood_genres(req.mood.as_ref().and_then(Value::as_str));
		let overlaps: Vec<(usize, usize)> = gated
			.iter()
			.map(|(_, movie)| {
				(
					anchor.genre_overlap(movie),
					fields::overlap_count(Some(movie.genres.as_str()), &user_genres),
				)
			})
			.collect();
		let plan = TierPlan::select(&overlaps);

		tracing::debug!(
			gated = gated.len(),
			anchor = anchor.imdb_id,
			selection = ?plan.selection,
			primary = plan.primary.len(),
			secondary = plan.secondary.len(),
			mood_genres = ?mood_genres,
			rating = ?req.rating,
			year_from = ?req.year_from,
			year_to = ?req.year_to,
			"Personal recommendation."
		);

		let rank_tier = |indexes: &[usize]| {
			let candidates = indexes
				.iter()
				.map(|idx| {
					let (position, movie) = gated[*idx];

					(position, movie, anchor.categorical_boost(movie))
				})
				.collect();
			let mut scored = scoring::score_candidates(candidates);

			scored.sort_by(cmp_tier);

			scored
		};
		let primary = rank_tier(&plan.primary);
		let secondary = rank_tier(&plan.secondary);
		let mut seen = HashSet::new();
		let merged = primary
			.into_iter()
			.chain(secondary)
			.filter(|scored| seen.insert(scored.movie.imdb_id.as_str()));
		let hits = window(merged, offset, limit).iter().map(MovieHit::from_scored).collect();

		output::finish(hits)
	}
}

fn cmp_tier(a: &ScoredMovie<'_>, b: &ScoredMovie<'_>) -> Ordering {
	scoring::cmp_score_rating_votes(a, b).then_with(|| b.movie.year.cmp(&a.movie.year))
}
