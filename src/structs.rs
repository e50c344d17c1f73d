use crate::corpus::ElasticCorpus;
use crate::search::LevenshteinSearcher;
use std::fmt;
use thiserror::Error;

pub type EditDistance = usize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GarbleError {
    /// Garbigility lies outside `1..=100`. Nothing is translated.
    #[error("garbigility must be within 1..=100, got {0}")]
    InvalidGarbigility(u8),
    /// A stripped form that search can reach has no surface spellings on
    /// record. The corpus was built wrong; results would silently go
    /// missing if this were swallowed.
    #[error("stripped form {form:?} has no surface spellings in the corpus")]
    LookupInconsistency { form: String },
}

/// Where a [`Garbler`] gets its reference words.
///
/// A closed pair of variants: either the word list is given literally, or
/// it is produced on demand by a callback (file, dictionary and network
/// adapters live behind the callback, outside this crate). Both declare up
/// front whether the language carries accents.
pub enum WordSource {
    Literal {
        words: Vec<String>,
        accented: bool,
    },
    Loader {
        load: Box<dyn FnMut() -> Vec<String>>,
        accented: bool,
    },
}

impl WordSource {
    pub fn literal<I, W>(words: I, accented: bool) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self::Literal {
            words: words.into_iter().map(Into::into).collect(),
            accented,
        }
    }

    pub fn loader(load: impl FnMut() -> Vec<String> + 'static, accented: bool) -> Self {
        Self::Loader {
            load: Box::new(load),
            accented,
        }
    }

    #[must_use]
    pub fn is_accented(&self) -> bool {
        match self {
            Self::Literal { accented, .. } | Self::Loader { accented, .. } => *accented,
        }
    }

    /// Yields the current word list. Literal sources return the same words
    /// every time; loaders may return something new on each call (see
    /// [`Garbler::reload`](crate::Garbler::reload)).
    pub(crate) fn import(&mut self) -> Vec<String> {
        match self {
            Self::Literal { words, .. } => words.clone(),
            Self::Loader { load, .. } => load(),
        }
    }
}

impl fmt::Debug for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { words, accented } => f
                .debug_struct("Literal")
                .field("words", &words.len())
                .field("accented", accented)
                .finish(),
            Self::Loader { accented, .. } => f
                .debug_struct("Loader")
                .field("accented", accented)
                .finish_non_exhaustive(),
        }
    }
}

impl From<(Vec<String>, bool)> for WordSource {
    fn from((words, accented): (Vec<String>, bool)) -> Self {
        Self::Literal { words, accented }
    }
}

impl From<(Vec<&str>, bool)> for WordSource {
    fn from((words, accented): (Vec<&str>, bool)) -> Self {
        Self::literal(words, accented)
    }
}

impl From<(&[&str], bool)> for WordSource {
    fn from((words, accented): (&[&str], bool)) -> Self {
        Self::literal(words.iter().copied(), accented)
    }
}

/// Substitutes each word of a paragraph with a lexically nearby corpus
/// word, as garbled as the intensity budget allows.
pub struct Garbler<S = LevenshteinSearcher> {
    pub(crate) corpus: ElasticCorpus,
    pub(crate) source: WordSource,
    pub(crate) searcher: S,
}

impl<S> fmt::Debug for Garbler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Garbler")
            .field("corpus", &self.corpus)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
