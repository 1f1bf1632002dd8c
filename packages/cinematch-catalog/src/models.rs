use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// One row of the movie table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
	pub imdb_id: String,
	pub title: String,
	/// Comma-delimited genre tokens.
	#[serde(default)]
	pub genres: String,
	/// Comma-delimited cast names.
	#[serde(default)]
	pub cast: Option<String>,
	#[serde(default)]
	pub directors: Option<String>,
	#[serde(default)]
	pub collection: Option<String>,
	#[serde(deserialize_with = "whole_number")]
	pub year: i32,
	pub popularity: f64,
	pub vote_average: f64,
	#[serde(deserialize_with = "whole_number")]
	pub vote_count: u64,
}

/// Optional columns present in the loaded dataset. Computed once at load time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
	pub has_cast: bool,
	pub has_director: bool,
	pub has_collection: bool,
}
impl Capabilities {
	pub fn all() -> Self {
		Self { has_cast: true, has_director: true, has_collection: true }
	}

	pub fn from_headers<'a, I>(headers: I) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut out = Self::default();

		for header in headers {
			match header.trim() {
				"cast" => out.has_cast = true,
				"directors" => out.has_director = true,
				"collection" => out.has_collection = true,
				_ => {},
			}
		}

		out
	}
}

// Integer columns exported from a dataframe that once held nulls arrive as `2019.0`.
fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: TryFrom<i64>,
{
	let value = f64::deserialize(deserializer)?;

	if !value.is_finite() || value.fract() != 0.0 {
		return Err(D::Error::custom(format!("expected a whole number, found {value}")));
	}

	T::try_from(value as i64)
		.map_err(|_| D::Error::custom(format!("whole number {value} is out of range")))
}
