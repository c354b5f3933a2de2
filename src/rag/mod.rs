pub mod types;
pub mod router;
pub mod retrieval;
pub mod prompt;
pub mod citation;
pub mod assistant;

pub use assistant::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagError {
    #[error("retrieval failed: {0}")]
    Retrieval(String),

    #[error("vector store write failed: {0}")]
    Storage(String),

    #[error("answer generation failed: {0}")]
    Generation(String),
}
