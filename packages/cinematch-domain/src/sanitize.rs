/// Non-finite floats cannot cross the JSON boundary; they become absent values.
pub fn finite(value: f64) -> Option<f64> {
	value.is_finite().then_some(value)
}

pub fn finite_opt(value: Option<f64>) -> Option<f64> {
	value.and_then(finite)
}

/// Output shapes whose floating fields must be finite before serialization.
pub trait Sanitize {
	/// Replaces every non-finite floating field with an absent value. Applying it twice yields the
	/// same value as applying it once.
	fn sanitize(self) -> Self;
}
impl<T> Sanitize for Vec<T>
where
	T: Sanitize,
{
	fn sanitize(self) -> Self {
		self.into_iter().map(Sanitize::sanitize).collect()
	}
}
