use crate::{Error, Result};

/// Row-major matrix of equal-length vectors, one per catalog row.
#[derive(Debug, Default)]
pub struct EmbeddingMatrix {
	data: Vec<f32>,
	dim: usize,
	rows: usize,
}
impl EmbeddingMatrix {
	pub fn new(vectors: Vec<Vec<f32>>) -> Result<Self> {
		let rows = vectors.len();
		let dim = vectors.first().map(Vec::len).unwrap_or(0);
		let mut data = Vec::with_capacity(rows * dim);

		for (row, vector) in vectors.into_iter().enumerate() {
			if vector.len() != dim {
				return Err(Error::RaggedEmbedding { row, expected: dim, found: vector.len() });
			}
			if vector.iter().any(|value| !value.is_finite()) {
				return Err(Error::NonFiniteEmbedding { row });
			}

			data.extend(vector);
		}

		Ok(Self { data, dim, rows })
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn dim(&self) -> usize {
		self.dim
	}

	pub fn row(&self, position: usize) -> Option<&[f32]> {
		if position >= self.rows {
			return None;
		}

		let start = position * self.dim;

		Some(&self.data[start..start + self.dim])
	}
}
