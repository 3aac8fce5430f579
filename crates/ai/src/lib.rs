mod embed;
pub use embed::{Embedder, OpenAiEmbedder};
