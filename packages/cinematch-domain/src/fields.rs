use std::collections::HashSet;

/// Lowercased, trimmed form of a text field. Absent input normalizes to an empty string.
pub fn normalize(text: Option<&str>) -> String {
	text.map(|value| value.trim().to_lowercase()).unwrap_or_default()
}

/// Comma-delimited field as a set of lowercase tokens. Empty tokens are dropped.
pub fn parse_set(text: Option<&str>) -> HashSet<String> {
	let Some(text) = text else { return HashSet::new() };

	text.split(',')
		.map(str::trim)
		.filter(|token| !token.is_empty())
		.map(str::to_lowercase)
		.collect()
}

/// Number of tokens in `field` that also appear in `reference`.
pub fn overlap_count(field: Option<&str>, reference: &HashSet<String>) -> usize {
	if reference.is_empty() {
		return 0;
	}

	parse_set(field).iter().filter(|token| reference.contains(token.as_str())).count()
}

/// Comma-delimited field as trimmed tokens in their original order and casing, keeping the first
/// spelling of tokens that differ only by case.
pub fn parse_ordered(text: Option<&str>) -> Vec<String> {
	let Some(text) = text else { return Vec::new() };
	let mut seen = HashSet::new();
	let mut out = Vec::new();

	for token in text.split(',') {
		let token = token.trim();

		if token.is_empty() {
			continue;
		}
		if seen.insert(token.to_lowercase()) {
			out.push(token.to_string());
		}
	}

	out
}

/// Lowercased set built from caller-supplied labels, e.g. genres from a query string.
pub fn label_set<I, S>(labels: I) -> HashSet<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	labels
		.into_iter()
		.map(|label| label.as_ref().trim().to_lowercase())
		.filter(|label| !label.is_empty())
		.collect()
}
