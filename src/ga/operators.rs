//! Timetable crossover and mutation operators.
//!
//! # Crossover
//!
//! - [`uniform_crossover`]: each gene independently from either parent with
//!   probability 0.5 (Syswerda, 1989)
//!
//! # Mutation
//!
//! - [`reassign_mutation`]: each gene independently replaced, with a given
//!   probability, by a fresh random (room, slot) draw
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Colorni, Dorigo & Maniezzo (1990), "Genetic Algorithms and Highly
//!   Constrained Problems: The Time-Table Case"

use rand::Rng;

use super::chromosome::Chromosome;
use crate::error::Result;

/// Uniform crossover.
///
/// Every child position takes the gene of `parent1` or `parent2` at the same
/// position, chosen by an independent fair coin flip. The child starts with
/// an empty fitness cache.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<'p, R: Rng>(
    parent1: &Chromosome<'p>,
    parent2: &Chromosome<'p>,
    rng: &mut R,
) -> Chromosome<'p> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    let genes = parent1
        .genes()
        .iter()
        .zip(parent2.genes())
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect();

    Chromosome::new_unchecked(parent1.problem(), genes)
}

/// Per-gene reassignment mutation.
///
/// Each position is independently, with probability `rate`, replaced by a
/// fresh random gene drawn exactly as during initialization. Each write
/// invalidates the chromosome's fitness cache.
///
/// Returns the number of genes replaced.
///
/// # Errors
/// [`crate::TimetableError::NoRoomAvailable`] if a draw hits a slot with no
/// free room.
pub fn reassign_mutation<R: Rng>(
    chromosome: &mut Chromosome<'_>,
    rate: f64,
    rng: &mut R,
) -> Result<usize> {
    let problem = chromosome.problem();
    let mut mutated = 0;
    for i in 0..chromosome.len() {
        if rng.random_bool(rate) {
            let gene = problem.random_gene(rng)?;
            chromosome.set_gene(i, gene)?;
            mutated += 1;
        }
    }
    Ok(mutated)
}
