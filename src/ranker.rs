use log::trace;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::distance::distance;
use crate::error::{Result, SpellError};
use crate::vocabulary::Vocabulary;

/// A vocabulary word scored against one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub frequency: u32,
    pub distance: usize,
}

/// Ranks vocabulary words against misspelled queries.
///
/// The ranker only borrows the vocabulary, so one vocabulary can back any
/// number of rankers on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRanker<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> SuggestionRanker<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        SuggestionRanker { vocabulary }
    }

    /// Scores every vocabulary word against `query`, closest first.
    ///
    /// Both sides are lowercased before measuring; words are reported in stored
    /// form. Order is distance ascending, then frequency descending, then word.
    pub fn candidates(&self, query: &str) -> Result<Vec<Candidate>> {
        if self.vocabulary.is_empty() {
            return Err(SpellError::EmptyVocabulary);
        }

        let query = query.to_lowercase();
        let mut candidates: Vec<Candidate> = self
            .vocabulary
            .iter()
            .map(|(word, frequency)| Candidate {
                word: word.to_owned(),
                frequency,
                distance: distance(&query, &word.to_lowercase()),
            })
            .collect();

        candidates.sort_unstable_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| a.word.cmp(&b.word))
        });

        Ok(candidates)
    }

    /// The best suggestions for `query`.
    ///
    /// A query stored verbatim in the vocabulary comes back alone and
    /// unchanged. Otherwise every word at the smallest distance that also has
    /// the highest frequency at that distance is returned, sorted.
    pub fn suggest(&self, query: Option<&str>) -> Result<Vec<String>> {
        let Some(query) = query else {
            return Ok(Vec::new());
        };

        if self.vocabulary.contains(query) {
            trace!("{query:?}: exact match");
            return Ok(vec![query.to_owned()]);
        }

        let candidates = self.candidates(query)?;
        let Some(best) = candidates.first() else {
            return Err(SpellError::EmptyVocabulary);
        };
        let (distance, frequency) = (best.distance, best.frequency);
        trace!(
            "{query:?}: {} candidates, best distance {distance} at frequency {frequency}",
            candidates.len()
        );

        Ok(candidates
            .into_iter()
            .take_while(|c| c.distance == distance && c.frequency == frequency)
            .map(|c| c.word)
            .collect())
    }

    /// Suggests for each query in parallel; results line up with `queries`.
    pub fn suggest_many<S: AsRef<str> + Sync>(&self, queries: &[S]) -> Vec<Result<Vec<String>>> {
        queries
            .par_iter()
            .map(|query| self.suggest(Some(query.as_ref())))
            .collect()
    }
}

/// Shorthand for `SuggestionRanker::new(vocabulary).suggest(query)`.
pub fn suggest(vocabulary: &Vocabulary, query: Option<&str>) -> Result<Vec<String>> {
    SuggestionRanker::new(vocabulary).suggest(query)
}
