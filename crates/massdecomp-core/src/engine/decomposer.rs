use super::enumerate;
use super::residue_table::ExtendedResidueTable;
use crate::core::alphabet::{Alphabet, AlphabetError, Mass, Weight};
use crate::core::decomposition::Decomposition;
use tracing::instrument;

/// Answers mass decomposition queries over a fixed weighted alphabet.
///
/// All preprocessing happens in [`MassDecomposer::new`]; afterwards the
/// decomposer holds only immutable state and can be shared freely across
/// threads. Existence checks run in O(1), single-decomposition reconstruction
/// in O(alphabet length) per witness step, and full enumeration in time
/// proportional to the number of solutions (which grows combinatorially for
/// masses with many representations — callers needing bounded latency must
/// impose their own limit).
#[derive(Debug, Clone)]
pub struct MassDecomposer {
    alphabet: Alphabet,
    table: ExtendedResidueTable,
}

impl MassDecomposer {
    /// Builds the decomposer for a validated alphabet.
    #[instrument(skip_all, fields(alphabet_size = alphabet.len()))]
    pub fn new(alphabet: Alphabet) -> Self {
        let table = ExtendedResidueTable::build(&alphabet);
        Self { alphabet, table }
    }

    /// Convenience constructor that validates the weight list first.
    ///
    /// This is the only fallible entry point: an empty, unsorted, or
    /// duplicate-containing weight list fails here, never at query time.
    pub fn from_weights(weights: Vec<Weight>) -> Result<Self, AlphabetError> {
        Ok(Self::new(Alphabet::new(weights)?))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Whether `mass` is decomposable over the alphabet.
    ///
    /// The smallest weight is itself a letter, so any mass at least as large
    /// as the minimal representative of its residue class is reachable by
    /// padding with copies of that weight.
    pub fn exists(&self, mass: Mass) -> bool {
        let residue = mass % self.alphabet.min_weight();
        match self.table.min_mass(residue) {
            Some(minimal) => mass >= minimal,
            None => false,
        }
    }

    /// Reconstructs one decomposition of `mass`, or `None` if there is none.
    ///
    /// Unwinds the witness chain recorded during table construction: each
    /// step attributes some copies of one letter to the minimal
    /// representative, until the remainder reaches zero. The surplus over the
    /// minimal representative is paid in copies of the smallest weight.
    pub fn decomposition(&self, mass: Mass) -> Option<Decomposition> {
        let a0 = self.alphabet.min_weight();
        let mut residue = mass % a0;
        let minimal = self.table.min_mass(residue)?;
        if mass < minimal {
            return None;
        }

        let mut counts = vec![0u64; self.alphabet.len()];
        counts[0] = (mass - minimal) / a0;

        let mut remaining = minimal;
        while remaining > 0 {
            let witness = self.table.witness(residue);
            if witness.count == 0 {
                // A zero witness off residue 0 would loop forever; the table
                // never produces one, but fail closed rather than spin.
                break;
            }
            counts[witness.letter] += witness.count;
            let weight = self.alphabet.weight(witness.letter);
            match witness.count.checked_mul(weight) {
                Some(consumed) if consumed <= remaining => remaining -= consumed,
                // Guard against unsigned wraparound; stop unwinding instead
                // of corrupting the counts.
                _ => break,
            }
            residue = remaining % a0;
        }

        Some(Decomposition::from_counts(counts))
    }

    /// Enumerates every decomposition of `mass`.
    ///
    /// Returns an empty vector when the mass is not decomposable. The result
    /// set can be combinatorially large.
    pub fn all_decompositions(&self, mass: Mass) -> Vec<Decomposition> {
        enumerate::collect(&self.alphabet, &self.table, mass)
    }

    /// Number of decompositions of `mass`, obtained by full enumeration.
    ///
    /// Exponential in the worst case; there is deliberately no shortcut
    /// counting algorithm behind this.
    pub fn decomposition_count(&self, mass: Mass) -> usize {
        self.all_decompositions(mass).len()
    }
}
