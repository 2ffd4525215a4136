use std::collections::HashMap;
use std::collections::hash_map;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};

/// Word to corpus frequency mapping that suggestions are ranked against.
///
/// Words are stored exactly as loaded; case folding happens only when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    words: HashMap<String, u32>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads dictionary text line by line.
    ///
    /// A line without a space is one word and bumps its count by one, so an
    /// empty line registers the empty word. A line with spaces is split on runs
    /// of spaces and commas; those words are registered but their counts are
    /// left as they were.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut vocabulary = Self::new();
        for line in reader.lines() {
            vocabulary.add_line(&line?);
        }
        Ok(vocabulary)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellError::io(path, e))?;
        let vocabulary = Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            SpellError::Read(source) => SpellError::io(path, source),
            other => other,
        })?;
        debug!(
            "loaded {} words from dictionary {}",
            vocabulary.len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// Writes the vocabulary as a JSON object of `word: frequency` pairs.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string(self)?;
        fs::write(path, json).map_err(|e| SpellError::io(path, e))?;
        debug!("saved {} words to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SpellError::io(path, e))?;
        let vocabulary: Vocabulary = serde_json::from_str(&content)?;
        debug!("loaded {} words from {}", vocabulary.len(), path.display());
        Ok(vocabulary)
    }

    fn add_line(&mut self, line: &str) {
        if !line.contains(' ') {
            self.record(line);
            return;
        }

        let mut pieces: Vec<&str> = split_separators(line).collect();
        while pieces.last().is_some_and(|p| p.is_empty()) {
            pieces.pop();
        }
        for piece in pieces {
            self.words.entry(piece.to_owned()).or_insert(0);
        }
    }

    /// Sets the frequency of `word`, returning the previous one.
    pub fn insert<S: Into<String>>(&mut self, word: S, frequency: u32) -> Option<u32> {
        self.words.insert(word.into(), frequency)
    }

    /// Counts one more occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        let count = self.words.entry(word.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.words.iter(),
        }
    }
}

/// Splits on runs of `' '` and `','`. A leading run yields one empty piece.
fn split_separators(line: &str) -> impl Iterator<Item = &str> {
    let is_sep = |c: char| c == ' ' || c == ',';
    let leading = line.starts_with(is_sep).then_some("");
    leading.into_iter().chain(line.split(is_sep).filter(|p| !p.is_empty()))
}

pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(w, &f)| (w.as_str(), f))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = (&'a str, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<HashMap<String, u32>> for Vocabulary {
    fn from(words: HashMap<String, u32>) -> Self {
        Vocabulary { words }
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Vocabulary {
            words: iter.into_iter().map(|(w, f)| (w.into(), f)).collect(),
        }
    }
}
