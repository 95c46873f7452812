use super::residue_table::ExtendedResidueTable;
use crate::core::alphabet::{Alphabet, Mass};
use crate::core::decomposition::Decomposition;

/// Collects every decomposition of `mass` by depth-first descent from the
/// largest alphabet letter down to the smallest.
///
/// The scratch vector is local to the call, so concurrent enumerations over
/// the same decomposer never share mutable state.
pub(crate) fn collect(
    alphabet: &Alphabet,
    table: &ExtendedResidueTable,
    mass: Mass,
) -> Vec<Decomposition> {
    let mut results = Vec::new();
    let mut scratch = vec![0u64; alphabet.len()];
    descend(
        alphabet,
        table,
        mass,
        alphabet.len() - 1,
        &mut scratch,
        &mut results,
    );
    results
}

fn descend(
    alphabet: &Alphabet,
    table: &ExtendedResidueTable,
    mass: Mass,
    index: usize,
    scratch: &mut Vec<u64>,
    results: &mut Vec<Decomposition>,
) {
    let a0 = alphabet.min_weight();

    if index == 0 {
        if mass % a0 == 0 {
            scratch[0] = mass / a0;
            results.push(Decomposition::from_counts(scratch.clone()));
        }
        return;
    }

    let weight = alphabet.weight(index);
    let lcm = table.lcm(index);
    let cycle_length = table.mass_in_lcm(index);

    // Multiplicities beyond one lcm cycle are generated below by shifting
    // whole cycles, so the trial loop stays bounded by the cache instead of
    // brute-forcing mass / weight.
    for multiple in 0..cycle_length {
        let used = match multiple.checked_mul(weight) {
            Some(used) if used <= mass => used,
            // Larger multiples only grow; stop before unsigned arithmetic
            // can wrap.
            _ => break,
        };
        let residual = mass - used;
        let residue = residual % a0;
        let minimal = match table.finite_entry(index - 1, residue) {
            Some(minimal) => minimal,
            None => continue,
        };

        scratch[index] = multiple;
        let mut remaining = residual;
        while remaining >= minimal {
            descend(alphabet, table, remaining, index - 1, scratch, results);
            // Every solution of `remaining` shifts to one of
            // `remaining - lcm` with a full cycle more of this letter.
            scratch[index] += cycle_length;
            match remaining.checked_sub(lcm) {
                Some(next) => remaining = next,
                None => break,
            }
        }
    }
}
