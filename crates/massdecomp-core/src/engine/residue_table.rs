use crate::core::alphabet::{Alphabet, Mass};
use crate::core::utils::arith::gcd;
use tracing::{debug, instrument};

/// Records which alphabet letter, and how many copies of it, last improved a
/// residue's minimal decomposable mass during table construction.
///
/// Witnesses reflect the fully built table only; the default `(0, 0)` entry
/// stays in place for residue 0, whose minimal mass is always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Witness {
    pub letter: usize,
    pub count: u64,
}

/// The extended residue table of Böcker and Lipták.
///
/// For each alphabet prefix `weights[0..=i]` and each residue class `r`
/// modulo the smallest weight, the table stores the minimal decomposable mass
/// congruent to `r`, or a sentinel "infinity" when the class is unreachable.
/// Construction also produces the witness vector used to reconstruct one
/// decomposition per mass and the lcm cache used to prune enumeration.
///
/// Built exactly once per alphabet and immutable afterwards, so it can be
/// shared read-only across threads.
#[derive(Debug, Clone)]
pub struct ExtendedResidueTable {
    /// `columns[i][r]`: minimal mass ≡ r (mod weights[0]) over weights[0..=i].
    columns: Vec<Vec<Mass>>,
    witnesses: Vec<Witness>,
    /// Per letter i, `lcm(weights[0], weights[i])`.
    lcms: Vec<Mass>,
    /// Per letter i, `weights[0] / gcd(weights[0], weights[i])`: the number of
    /// copies of letter i that make up one full lcm cycle.
    masses_in_lcm: Vec<u64>,
    infinity: Mass,
}

impl ExtendedResidueTable {
    /// Builds the table, witness vector, and lcm cache in one pass over the
    /// alphabet.
    ///
    /// Runs in O(n · weights[0]) and is the only non-trivial cost of
    /// constructing a decomposer; every query afterwards reads the finished
    /// table without touching it.
    #[instrument(skip_all, fields(alphabet_size = alphabet.len(), min_weight = alphabet.min_weight()))]
    pub fn build(alphabet: &Alphabet) -> Self {
        let n = alphabet.len();
        let a0 = alphabet.min_weight();
        let residues = a0 as usize;
        // Strictly larger than any finite table entry, so it can stand in
        // for "unreachable" without colliding with a real minimal mass.
        let infinity = a0.saturating_mul(alphabet.max_weight());

        let mut lcms = Vec::with_capacity(n);
        let mut masses_in_lcm = Vec::with_capacity(n);
        for index in 0..n {
            let d = gcd(a0, alphabet.weight(index));
            lcms.push(a0 / d * alphabet.weight(index));
            masses_in_lcm.push(a0 / d);
        }

        // Column 0: multiples of weights[0] only reach residue 0.
        let mut columns = vec![vec![infinity; residues]; n];
        for column in &mut columns {
            column[0] = 0;
        }
        let mut witnesses = vec![Witness::default(); residues];

        if n > 1 {
            Self::fill_second_column(alphabet, &mut columns, &mut witnesses, &masses_in_lcm);
            for index in 2..n {
                Self::fill_column(alphabet, index, &mut columns, &mut witnesses);
            }
        }

        debug!(columns = n, residues, infinity, "extended residue table built");
        Self {
            columns,
            witnesses,
            lcms,
            masses_in_lcm,
            infinity,
        }
    }

    /// Column 1 walks a single residue cycle: starting from residue 0 and
    /// repeatedly adding `weights[1]`, every residue it touches is reached for
    /// the first time, so each step improves from infinity.
    fn fill_second_column(
        alphabet: &Alphabet,
        columns: &mut [Vec<Mass>],
        witnesses: &mut [Witness],
        masses_in_lcm: &[u64],
    ) {
        let a0 = alphabet.min_weight();
        let weight = alphabet.weight(1);
        let step = weight % a0;
        let cycle = masses_in_lcm[1];
        let mut residue = 0u64;
        let mut mass = 0u64;
        for count in 1..cycle {
            mass = mass.saturating_add(weight);
            residue = (residue + step) % a0;
            columns[1][residue as usize] = mass;
            witnesses[residue as usize] = Witness { letter: 1, count };
        }
    }

    /// Columns 2..n refine the previous column with one more letter.
    fn fill_column(
        alphabet: &Alphabet,
        index: usize,
        columns: &mut [Vec<Mass>],
        witnesses: &mut [Witness],
    ) {
        let a0 = alphabet.min_weight();
        let weight = alphabet.weight(index);
        let step = weight % a0;
        let mut column = columns[index - 1].clone();

        // Nijenhuis' improvement: if the letter itself is no smaller than the
        // minimal mass already known for its own residue class, it cannot
        // improve any entry, and the previous column carries over verbatim.
        if weight >= column[step as usize] {
            debug!(index, weight, "column skipped, letter cannot improve any residue");
            columns[index] = column;
            return;
        }

        let d = gcd(a0, weight);
        let cycle = (a0 / d) as usize;

        if d == 1 {
            // One cycle through all residues, anchored at residue 0 whose
            // value 0 is the global minimum, so a single pass settles
            // every entry.
            let mut residue = 0u64;
            let mut value: Mass = 0;
            let mut count = 0u64;
            for _ in 1..a0 {
                residue = (residue + step) % a0;
                let candidate = value.saturating_add(weight);
                let slot = &mut column[residue as usize];
                if candidate < *slot {
                    *slot = candidate;
                    value = candidate;
                    count += 1;
                    witnesses[residue as usize] = Witness {
                        letter: index,
                        count,
                    };
                } else {
                    value = *slot;
                    count = 0;
                }
            }
        } else {
            // The residues split into d independent cycles of length a0/d.
            // Cycles not containing residue 0 have no known minimum to
            // anchor on, so each one is swept until a full pass makes no
            // further improvement.
            for class in 0..d {
                let mut residue = class;
                let mut value = column[class as usize];
                let mut count = 0u64;
                let mut improved = true;
                let mut passes = 0u32;
                while improved {
                    improved = false;
                    for _ in 0..cycle {
                        residue = (residue + step) % a0;
                        let candidate = value.saturating_add(weight);
                        let slot = &mut column[residue as usize];
                        if candidate < *slot {
                            *slot = candidate;
                            value = candidate;
                            count += 1;
                            witnesses[residue as usize] = Witness {
                                letter: index,
                                count,
                            };
                            improved = true;
                        } else {
                            value = *slot;
                            count = 0;
                        }
                    }
                    passes += 1;
                }
                tracing::trace!(index, class, passes, "residue class converged");
            }
        }

        columns[index] = column;
    }

    pub fn infinity(&self) -> Mass {
        self.infinity
    }

    /// Raw table entry, including the sentinel value for unreachable classes.
    pub fn entry(&self, index: usize, residue: u64) -> Mass {
        self.columns[index][residue as usize]
    }

    /// Table entry with the sentinel mapped to `None`.
    pub fn finite_entry(&self, index: usize, residue: u64) -> Option<Mass> {
        let entry = self.columns[index][residue as usize];
        (entry < self.infinity).then_some(entry)
    }

    /// Minimal decomposable mass in the given residue class over the whole
    /// alphabet, or `None` if the class is unreachable.
    pub fn min_mass(&self, residue: u64) -> Option<Mass> {
        self.finite_entry(self.columns.len() - 1, residue)
    }

    pub fn witness(&self, residue: u64) -> Witness {
        self.witnesses[residue as usize]
    }

    pub fn lcm(&self, index: usize) -> Mass {
        self.lcms[index]
    }

    pub fn mass_in_lcm(&self, index: usize) -> u64 {
        self.masses_in_lcm[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(weights: &[u64]) -> ExtendedResidueTable {
        ExtendedResidueTable::build(&Alphabet::new(weights.to_vec()).unwrap())
    }

    #[test]
    fn residue_zero_is_zero_in_every_column() {
        let table = table_for(&[5, 8, 9, 12]);
        for index in 0..4 {
            assert_eq!(table.entry(index, 0), 0);
        }
    }

    #[test]
    fn single_letter_alphabet_only_reaches_residue_zero() {
        let table = table_for(&[7]);
        assert_eq!(table.min_mass(0), Some(0));
        for residue in 1..7 {
            assert_eq!(table.min_mass(residue), None);
        }
    }

    #[test]
    fn coprime_pair_fills_every_residue() {
        // {3, 5}: residue 1 first reached at 10 = 2*5, residue 2 at 5.
        let table = table_for(&[3, 5]);
        assert_eq!(table.min_mass(0), Some(0));
        assert_eq!(table.min_mass(1), Some(10));
        assert_eq!(table.min_mass(2), Some(5));
        assert_eq!(table.witness(1), Witness { letter: 1, count: 2 });
        assert_eq!(table.witness(2), Witness { letter: 1, count: 1 });
    }

    #[test]
    fn non_coprime_pair_leaves_unreachable_residues() {
        // {6, 9}: only residues 0 and 3 (mod 6) are reachable.
        let table = table_for(&[6, 9]);
        assert_eq!(table.min_mass(0), Some(0));
        assert_eq!(table.min_mass(3), Some(9));
        for residue in [1, 2, 4, 5] {
            assert_eq!(table.min_mass(residue), None);
        }
    }

    #[test]
    fn shared_factor_column_converges_to_minimal_masses() {
        // {6, 9, 10}: gcd(6, 10) = 2, so column 2 is built from two residue
        // cycles, one of which needs a wraparound pass.
        let table = table_for(&[6, 9, 10]);
        assert_eq!(table.min_mass(0), Some(0));
        assert_eq!(table.min_mass(1), Some(19));
        assert_eq!(table.min_mass(2), Some(20));
        assert_eq!(table.min_mass(3), Some(9));
        assert_eq!(table.min_mass(4), Some(10));
        assert_eq!(table.min_mass(5), Some(29));
    }

    #[test]
    fn columns_are_non_increasing_per_residue() {
        let table = table_for(&[7, 11, 13, 15, 16]);
        for residue in 0..7 {
            for index in 1..5 {
                assert!(table.entry(index, residue) <= table.entry(index - 1, residue));
            }
        }
    }

    #[test]
    fn redundant_letter_copies_previous_column() {
        // 12 = 2*6 cannot improve anything over {6, 9}; Nijenhuis' rule
        // must carry column 1 over unchanged.
        let table = table_for(&[6, 9, 12]);
        for residue in 0..6 {
            assert_eq!(table.entry(2, residue), table.entry(1, residue));
        }
    }

    #[test]
    fn lcm_cache_holds_lcm_and_cycle_length() {
        let table = table_for(&[6, 9, 10]);
        assert_eq!(table.lcm(1), 18);
        assert_eq!(table.mass_in_lcm(1), 2);
        assert_eq!(table.lcm(2), 30);
        assert_eq!(table.mass_in_lcm(2), 3);
        assert_eq!(table.lcm(0), 6);
        assert_eq!(table.mass_in_lcm(0), 1);
    }

    #[test]
    fn infinity_exceeds_every_finite_entry() {
        let table = table_for(&[5, 8, 9]);
        assert_eq!(table.infinity(), 45);
        for residue in 0..5 {
            for index in 0..3 {
                let entry = table.entry(index, residue);
                assert!(entry == table.infinity() || entry < table.infinity());
            }
        }
    }

    #[test]
    fn witness_chain_terminates_at_residue_zero() {
        let alphabet = Alphabet::new(vec![5, 8, 9]).unwrap();
        let table = ExtendedResidueTable::build(&alphabet);
        for residue in 1..5 {
            let mut mass = match table.min_mass(residue) {
                Some(mass) => mass,
                None => continue,
            };
            let mut current = residue;
            let mut steps = 0;
            while mass > 0 {
                let witness = table.witness(current);
                assert!(witness.count > 0, "chain stuck at residue {current}");
                let consumed = witness.count * alphabet.weight(witness.letter);
                assert!(consumed <= mass);
                mass -= consumed;
                current = mass % 5;
                steps += 1;
                assert!(steps <= 5, "chain too long for residue {residue}");
            }
        }
    }
}
