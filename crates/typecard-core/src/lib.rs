//! Core model for scalar reference cards: the nine scalar kinds, their
//! default values, literal spellings, storage classes, and the card
//! that ties them together.

#[macro_use]
pub mod macros;

pub mod card;
pub mod error;
pub mod printer;
pub mod scalar;
pub mod storage;
pub mod utils;

// Re-export commonly used items for convenience
pub use tracing;

pub use card::{Declaration, ReferenceCard};
pub use scalar::{Literal, Notation, ScalarKind, ScalarValue, TypeName};
pub use storage::StorageClass;
pub use utils::to_json::ToJson;

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
