//! Spelling suggestions ranked by edit distance, then corpus frequency.
//!
//! ```
//! use spellsuggest::{Vocabulary, suggest};
//!
//! let vocabulary: Vocabulary = [("cat", 5), ("cut", 5), ("cats", 1)].into_iter().collect();
//! assert_eq!(suggest(&vocabulary, Some("cot")).unwrap(), vec!["cat", "cut"]);
//! ```

pub mod distance;
pub mod error;
pub mod ranker;
pub mod vocabulary;

pub use distance::distance;
pub use error::{Result, SpellError};
pub use ranker::{Candidate, SuggestionRanker, suggest};
pub use vocabulary::Vocabulary;
