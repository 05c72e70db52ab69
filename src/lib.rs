pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod services;

pub use error::{ConjugationError, Result};
pub use model::{ConjugationItem, FormPair, RawRow, WordInfo, WordType};
pub use services::builder::{BuildOutcome, RecordBuilder, SkipReason};
pub use services::store::ParseFailurePolicy;
