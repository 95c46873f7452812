use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An integer weight of a single building block (e.g. a scaled residue mass).
pub type Weight = u64;

/// An integer target mass to decompose over an [`Alphabet`].
pub type Mass = u64;

/// Represents errors that can occur while validating a weighted alphabet.
///
/// The decomposition engine requires a non-empty, strictly ascending list of
/// positive weights. Callers are responsible for scaling and ordering their
/// masses; an alphabet that violates these requirements is rejected outright
/// rather than sorted or deduplicated on their behalf.
#[derive(Debug, Error)]
pub enum AlphabetError {
    /// Indicates that no weights were supplied.
    #[error("Alphabet must contain at least one weight")]
    Empty,
    /// Indicates that a weight is zero; every weight must be positive.
    #[error("Weight at index {index} is zero; all weights must be positive")]
    ZeroWeight { index: usize },
    /// Indicates that the weights are unsorted or contain duplicates.
    #[error("Weights must be strictly ascending; violated at index {index}")]
    NotStrictlyAscending { index: usize },
}

/// An ordered alphabet of distinct positive integer weights.
///
/// The alphabet is validated once at construction and immutable afterwards,
/// so every downstream consumer can rely on `weights[0]` being the smallest
/// weight and on strict ascending order across the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Alphabet {
    weights: Vec<Weight>,
}

impl Alphabet {
    /// Validates and wraps a caller-supplied weight list.
    ///
    /// The list must be non-empty, contain only positive weights, and be
    /// strictly ascending (which also rules out duplicates).
    pub fn new(weights: Vec<Weight>) -> Result<Self, AlphabetError> {
        if weights.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if weights[0] == 0 {
            return Err(AlphabetError::ZeroWeight { index: 0 });
        }
        for (index, pair) in weights.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(AlphabetError::NotStrictlyAscending { index: index + 1 });
            }
        }
        Ok(Self { weights })
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, index: usize) -> Weight {
        self.weights[index]
    }

    /// The smallest weight, `weights[0]`; every residue class is taken
    /// modulo this value.
    pub fn min_weight(&self) -> Weight {
        self.weights[0]
    }

    pub fn max_weight(&self) -> Weight {
        self.weights[self.weights.len() - 1]
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }
}

impl TryFrom<Vec<u64>> for Alphabet {
    type Error = AlphabetError;

    fn try_from(weights: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<Alphabet> for Vec<u64> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.weights
    }
}
