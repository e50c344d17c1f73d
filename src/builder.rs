use crate::corpus::ElasticCorpus;
use crate::normalize::strip_accents;
use crate::search::{BoundedSearch, LevenshteinSearcher};
use crate::structs::{Garbler, WordSource};
use itertools::Itertools;
use std::collections::HashMap;

/// Builder for [`ElasticCorpus`].
///
/// ```rust
/// use word_garbler::CorpusBuilder;
///
/// let corpus = CorpusBuilder::new(true).build(["hellà", "frend"]);
/// assert!(corpus.contains("hella"));
/// assert_eq!(corpus.len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CorpusBuilder {
    accented: bool,
}

impl CorpusBuilder {
    /// The language flag is a required argument: pass `true` when surface
    /// spellings carry diacritics the comparison alphabet should not see.
    #[must_use]
    pub fn new(accented: bool) -> Self {
        Self { accented }
    }

    /// Deduplicates `words`, computes stripped forms and produces the
    /// sorted index. Distinct surface spellings may collapse onto one
    /// stripped form; each keeps its place in the stripped→accented
    /// mapping. An empty word list builds a valid empty corpus.
    pub fn build<T>(self, words: impl IntoIterator<Item = T>) -> ElasticCorpus
    where
        T: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).unique().collect();

        let mut stripped_to_accented: HashMap<String, Vec<String>> = HashMap::new();
        let sorted_forms: Vec<String> = if self.accented {
            for word in &words {
                stripped_to_accented
                    .entry(strip_accents(word))
                    .or_default()
                    .push(word.clone());
            }
            stripped_to_accented.keys().cloned().sorted().collect()
        } else {
            words.iter().cloned().sorted().collect()
        };

        ElasticCorpus {
            form_set: sorted_forms.iter().cloned().collect(),
            accented_universe: words.into_iter().collect(),
            sorted_forms,
            stripped_to_accented,
            accented: self.accented,
        }
    }
}

impl Garbler {
    /// Builds a translator straight from a literal word list.
    ///
    /// ```rust
    /// use word_garbler::Garbler;
    ///
    /// let mut garbler = Garbler::from_words(["hellà", "frend"], true);
    /// assert_eq!(garbler.translate("hello!", 50).unwrap(), "hellà!");
    /// ```
    pub fn from_words<I, W>(words: I, accented: bool) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self::from_source(WordSource::literal(words, accented))
    }

    /// Builds a translator by importing words from `source` once, with the
    /// default [`LevenshteinSearcher`].
    pub fn from_source(source: impl Into<WordSource>) -> Self {
        Self::with_searcher(source, LevenshteinSearcher)
    }
}

impl<S: BoundedSearch> Garbler<S> {
    /// Like [`Garbler::from_source`], with a caller-supplied search
    /// implementation.
    pub fn with_searcher(source: impl Into<WordSource>, searcher: S) -> Self {
        let mut source = source.into();
        let corpus = CorpusBuilder::new(source.is_accented()).build(source.import());
        Self {
            corpus,
            source,
            searcher,
        }
    }

    /// Re-runs the word source and swaps in a freshly built corpus. The
    /// previous corpus is dropped, not mutated.
    pub fn reload(&mut self) {
        self.corpus = CorpusBuilder::new(self.source.is_accented()).build(self.source.import());
    }

    #[must_use]
    pub fn corpus(&self) -> &ElasticCorpus {
        &self.corpus
    }
}
