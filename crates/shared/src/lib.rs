mod error;
pub use error::AppError;

mod env;
pub use env::AppEnv;

mod embedding;
pub use embedding::{EmbeddingError, validate_embedding};

pub mod similarity;
