//! Tournament selection.
//!
//! The only selection scheme used by the engine: sample `k` individuals
//! uniformly **with replacement** from the whole population and keep the
//! fittest. Larger `k` means stronger selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Tournament selection: pick `k` random individuals, return the index of
/// the best.
///
/// Ties go to the contestant drawn first. `k = 0` is treated as `1`. The
/// population does not need to be sorted.
///
/// # Complexity
/// O(k) fitness reads per selection.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    let mut best_fitness = population[best_idx].fitness();
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        let fitness = population[idx].fitness();
        if fitness > best_fitness {
            best_idx = idx;
            best_fitness = fitness;
        }
    }
    best_idx
}
