pub mod catalog;
pub mod embedding;
pub mod loader;
pub mod models;

mod error;

pub use catalog::Catalog;
pub use embedding::EmbeddingMatrix;
pub use error::Error;
pub use loader::load;
pub use models::{Capabilities, MovieRecord};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Catalog paired with its row-aligned embedding matrix.
#[derive(Debug)]
pub struct Dataset {
	pub catalog: Catalog,
	pub embeddings: EmbeddingMatrix,
}
impl Dataset {
	pub fn new(catalog: Catalog, embeddings: EmbeddingMatrix) -> Result<Self> {
		if catalog.len() != embeddings.rows() {
			return Err(Error::Misaligned { catalog: catalog.len(), embeddings: embeddings.rows() });
		}

		Ok(Self { catalog, embeddings })
	}
}
