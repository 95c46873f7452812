use super::alphabet::{Alphabet, Mass};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A single solution to the mass decomposition equation.
///
/// Holds one non-negative count per alphabet letter, in alphabet order, such
/// that the weighted sum of the counts equals the queried mass exactly.
/// Instances are produced fresh per query and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decomposition {
    counts: Vec<u64>,
}

impl Decomposition {
    pub(crate) fn from_counts(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The weighted sum `Σ counts[i] * weights[i]` over the given alphabet.
    pub fn mass(&self, alphabet: &Alphabet) -> Mass {
        self.counts
            .iter()
            .zip(alphabet.weights())
            .map(|(count, weight)| count * weight)
            .sum()
    }
}

impl Index<usize> for Decomposition {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.counts[index]
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", count)?;
        }
        write!(f, "]")
    }
}
