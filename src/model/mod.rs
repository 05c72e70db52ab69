pub mod record;
pub mod row;
pub mod word_type;

pub use record::{ConjugationItem, FormPair, WordInfo};
pub use row::RawRow;
pub use word_type::WordType;
