pub mod client;
pub mod types;

pub use client::{InferenceClient, OllamaClient, query};
pub use types::*;
