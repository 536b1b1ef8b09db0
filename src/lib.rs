pub mod config;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod providers;
pub mod resolver;
pub mod server;
pub mod url_to_text;

pub use error::ExtractError;
pub use model::{ExtractedRecipe, ExtractionRequest, ScrapedContent};
pub use pipeline::RecipeExtractor;
