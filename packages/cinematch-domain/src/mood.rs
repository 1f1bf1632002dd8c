use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
	Dark,
	Light,
	Fast,
	Emotional,
}
impl Mood {
	pub fn from_label(label: &str) -> Option<Self> {
		match label.trim().to_ascii_lowercase().as_str() {
			"dark" => Some(Self::Dark),
			"light" => Some(Self::Light),
			"fast" => Some(Self::Fast),
			"emotional" => Some(Self::Emotional),
			_ => None,
		}
	}

	pub fn genres(self) -> &'static [&'static str] {
		match self {
			Self::Dark => &["horror", "thriller", "mystery"],
			Self::Light => &["comedy", "family"],
			Self::Fast => &["action", "adventure"],
			Self::Emotional => &["drama", "romance"],
		}
	}
}

/// Genre set associated with a mood label. Unknown or absent labels map to an empty set.
pub fn mood_genres(label: Option<&str>) -> HashSet<String> {
	label
		.and_then(Mood::from_label)
		.map(|mood| mood.genres().iter().map(|genre| genre.to_string()).collect())
		.unwrap_or_default()
}
