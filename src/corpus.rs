use crate::GarbleError;
use crate::normalize::strip_accents;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::Deref;

/// A sorted word index supporting temporary, scoped insertion of probe
/// entries.
///
/// The corpus stores *stripped forms* (accent-free spellings, see
/// [`strip_accents`]) in a strictly sorted vec plus a set mirror for O(1)
/// membership. For accented languages it also keeps the mapping back from
/// each stripped form to the surface spellings that produced it.
///
/// Outside an open [`ExtraWords`] scope the vec holds no duplicates; while
/// a scope is open it is a multiset of the original entries plus the
/// scope's extras.
pub struct ElasticCorpus {
    pub(crate) sorted_forms: Vec<String>,
    pub(crate) form_set: HashSet<String>,
    pub(crate) stripped_to_accented: HashMap<String, Vec<String>>,
    pub(crate) accented_universe: HashSet<String>,
    pub(crate) accented: bool,
}

impl ElasticCorpus {
    /// Number of distinct stripped forms currently resident, scope extras
    /// included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted_forms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted_forms.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_accented(&self) -> bool {
        self.accented
    }

    /// Stripped-form membership test.
    #[inline]
    #[must_use]
    pub fn contains(&self, form: &str) -> bool {
        self.form_set.contains(form)
    }

    /// First corpus entry not lexicographically smaller than `query`, or
    /// `None` when `query` sorts past the end.
    ///
    /// This is the probe primitive a [`BoundedSearch`](crate::BoundedSearch)
    /// implementation composes into a full distance-bounded search.
    #[must_use]
    pub fn next_not_smaller(&self, query: &str) -> Option<&str> {
        let pos = self.sorted_forms.partition_point(|w| w.as_str() < query);
        self.sorted_forms.get(pos).map(String::as_str)
    }

    /// Opens a scope with the stripped forms of `words` guaranteed
    /// corpus-resident.
    ///
    /// Words already present are left alone. Distinct words sharing an
    /// absent stripped form each insert their own copy. The returned guard
    /// derefs to the corpus; when it drops (early return and panic paths
    /// included) every inserted instance is removed again and the corpus
    /// is bit-for-bit back in its pre-scope state. The `&mut` borrow keeps
    /// a second scope from opening while this one is live.
    pub fn insert_extras<I, W>(&mut self, words: I) -> ExtraWords<'_>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let inserted: Vec<String> = words
            .into_iter()
            .map(|word| strip_accents(word.as_ref()))
            .filter(|form| !self.form_set.contains(form))
            .collect();
        for form in &inserted {
            let pos = self.sorted_forms.partition_point(|w| w < form);
            self.sorted_forms.insert(pos, form.clone());
            self.form_set.insert(form.clone());
        }
        ExtraWords {
            corpus: self,
            inserted,
        }
    }

    /// Expands stripped candidates back to surface spellings.
    ///
    /// Accented corpora go through the stripped→accented mapping, keeping
    /// only spellings that were actually imported (entries a scope slipped
    /// in never resolve). A candidate with no mapping entry at all means
    /// the corpus was built wrong and is reported as
    /// [`GarbleError::LookupInconsistency`] rather than silently dropped.
    /// Unaccented corpora return the candidates as-is.
    pub fn resolve_surface_forms<'a, I>(&self, candidates: I) -> Result<Vec<String>, GarbleError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !self.accented {
            return Ok(candidates.into_iter().map(str::to_owned).collect());
        }
        let mut surface = Vec::new();
        for form in candidates {
            let spellings =
                self.stripped_to_accented
                    .get(form)
                    .ok_or_else(|| GarbleError::LookupInconsistency {
                        form: form.to_owned(),
                    })?;
            surface.extend(
                spellings
                    .iter()
                    .filter(|w| self.accented_universe.contains(*w))
                    .cloned(),
            );
        }
        Ok(surface)
    }
}

impl fmt::Debug for ElasticCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElasticCorpus")
            .field("forms", &self.sorted_forms.len())
            .field("accented", &self.accented)
            .finish()
    }
}

/// Scope guard returned by [`ElasticCorpus::insert_extras`].
pub struct ExtraWords<'a> {
    corpus: &'a mut ElasticCorpus,
    inserted: Vec<String>,
}

impl Deref for ExtraWords<'_> {
    type Target = ElasticCorpus;

    fn deref(&self) -> &ElasticCorpus {
        self.corpus
    }
}

impl Drop for ExtraWords<'_> {
    fn drop(&mut self) {
        for form in &self.inserted {
            // first equal instance is the one the scope inserted
            let pos = self.corpus.sorted_forms.partition_point(|w| w < form);
            self.corpus.sorted_forms.remove(pos);
            self.corpus.form_set.remove(form);
        }
    }
}
