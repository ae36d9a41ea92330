//! Equality tests used while extending snakes.

use seqdiff_types::Fingerprint;

/// Answers "does original element `i` equal revised element `j`?".
pub trait MatchOracle {
    /// Length of the original sequence.
    fn original_len(&self) -> usize;

    /// Length of the revised sequence.
    fn revised_len(&self) -> usize;

    /// Called only with `i < original_len()` and `j < revised_len()`.
    fn matches(&self, i: usize, j: usize) -> bool;
}

/// Compares elements directly.
pub struct ElementOracle<'a, T> {
    original: &'a [T],
    revised: &'a [T],
}

impl<'a, T: Eq> ElementOracle<'a, T> {
    pub fn new(original: &'a [T], revised: &'a [T]) -> Self {
        Self { original, revised }
    }
}

impl<T: Eq> MatchOracle for ElementOracle<'_, T> {
    fn original_len(&self) -> usize {
        self.original.len()
    }

    fn revised_len(&self) -> usize {
        self.revised.len()
    }

    fn matches(&self, i: usize, j: usize) -> bool {
        self.original[i] == self.revised[j]
    }
}

/// Compares precomputed fingerprints, optionally confirming each
/// fingerprint match with a full element comparison.
pub struct FingerprintOracle<'a, T> {
    original: &'a [Fingerprint],
    revised: &'a [Fingerprint],
    confirm: Option<(&'a [T], &'a [T])>,
}

impl<'a, T: Eq> FingerprintOracle<'a, T> {
    pub fn new(original: &'a [Fingerprint], revised: &'a [Fingerprint]) -> Self {
        Self {
            original,
            revised,
            confirm: None,
        }
    }

    /// Also require element equality whenever fingerprints agree.
    pub fn confirmed_by(mut self, original: &'a [T], revised: &'a [T]) -> Self {
        self.confirm = Some((original, revised));
        self
    }
}

impl<T: Eq> MatchOracle for FingerprintOracle<'_, T> {
    fn original_len(&self) -> usize {
        self.original.len()
    }

    fn revised_len(&self) -> usize {
        self.revised.len()
    }

    fn matches(&self, i: usize, j: usize) -> bool {
        if self.original[i] != self.revised[j] {
            return false;
        }
        match self.confirm {
            Some((original, revised)) => original[i] == revised[j],
            None => true,
        }
    }
}
