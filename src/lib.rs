mod builder;
mod corpus;
mod normalize;
mod search;
mod structs;

pub use builder::CorpusBuilder;
pub use corpus::{ElasticCorpus, ExtraWords};
pub use normalize::strip_accents;
pub use search::{BoundedSearch, LevenshteinSearcher};
pub use structs::*;

use unicode_segmentation::UnicodeSegmentation;

#[allow(unused_macros)]
#[cfg(test)]
macro_rules! trace {
    ($($arg:tt)*) => { println!($($arg)*); };
}
#[allow(unused_macros)]
#[cfg(not(test))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Garbling engine
impl<S: BoundedSearch> Garbler<S> {
    /// Rewrites `paragraph` word by word, replacing each run of ASCII
    /// letters with a corpus word no further away than
    /// `len * garbigility / 100` edits, and as close to that budget as
    /// the corpus allows. Everything between the letter runs is copied
    /// through verbatim.
    ///
    /// `garbigility` must lie within `1..=100`; words whose budget rounds
    /// down to zero, and words with no acceptable replacement, stay
    /// unchanged.
    pub fn translate(&mut self, paragraph: &str, garbigility: u8) -> Result<String, GarbleError> {
        if !(1..=100).contains(&garbigility) {
            return Err(GarbleError::InvalidGarbigility(garbigility));
        }

        let mut out = String::with_capacity(paragraph.len());
        let mut word = String::new();
        // the trailing `None` acts as a separator so the last word still
        // gets flushed, without smuggling a real character into the output
        for c in paragraph.chars().map(Some).chain([None]) {
            match c {
                Some(c) if c.is_ascii_alphabetic() => word.push(c),
                c => {
                    if !word.is_empty() {
                        let upper_limit =
                            word.graphemes(true).count() * garbigility as usize / 100;
                        if upper_limit == 0 {
                            out.push_str(&word);
                        } else {
                            out.push_str(&self.garble_word(&word, upper_limit)?);
                        }
                        word.clear();
                    }
                    if let Some(c) = c {
                        out.push(c);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Picks the most distorted in-budget replacement for `word`.
    ///
    /// The word itself is made corpus-resident for the duration of the
    /// lookup, so the searches always have a distance-zero anchor and the
    /// word can never be offered as its own replacement: it sits in every
    /// `near` set and is subtracted back out of every band.
    ///
    /// One search fetches everything within `upper_limit`; the loop then
    /// walks the exclusion threshold down from just below the budget,
    /// stopping at the first non-empty distance band `(threshold,
    /// upper_limit]`. Bands are ordered sets, so the pick within a band is
    /// deterministic: lexicographically smallest.
    fn garble_word(&mut self, word: &str, upper_limit: usize) -> Result<String, GarbleError> {
        let picked = {
            let scoped = self.corpus.insert_extras([word]);
            let far = self.searcher.search(&scoped, word, upper_limit);
            trace!("garble {word:?}: {} within {upper_limit}", far.len());
            let mut picked = None;
            for threshold in (0..upper_limit).rev() {
                let near = self.searcher.search(&scoped, word, threshold);
                if let Some(candidate) = far.difference(&near).next() {
                    trace!("garble {word:?}: {candidate:?} past threshold {threshold}");
                    picked = Some(candidate.clone());
                    break;
                }
            }
            picked
        };
        let Some(form) = picked else {
            return Ok(word.to_owned());
        };
        let surface = self.corpus.resolve_surface_forms([form.as_str()])?;
        Ok(surface.into_iter().next().unwrap_or_else(|| word.to_owned()))
    }
}
