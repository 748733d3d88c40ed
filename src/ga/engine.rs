//! One generational step.
//!
//! [`evolve`] turns a sorted population into the next generation:
//!
//! 1. **Elitism**: the first `elite_count` chromosomes are copied verbatim.
//! 2. **Crossover fill**: two tournament winners produce one child by
//!    uniform crossover, repeated until the population is full.
//! 3. **Mutation pass**: every non-elite chromosome goes through per-gene
//!    reassignment mutation.
//!
//! The step is stateless; everything it needs is passed in.

use rand::Rng;

use super::config::GaConfig;
use super::operators::{reassign_mutation, uniform_crossover};
use super::population::Population;
use super::selection::tournament;
use crate::error::Result;

/// Copies the first `elite_count` chromosomes of `population` (assumed
/// sorted best-first by the caller) into a new population with capacity for
/// `capacity` chromosomes.
pub fn elitism<'p>(
    population: &Population<'p>,
    elite_count: usize,
    capacity: usize,
) -> Population<'p> {
    let mut next = Population::with_capacity(capacity);
    for chr in population.iter().take(elite_count) {
        next.push(chr.clone());
    }
    next
}

/// Fills `next` up to `target_size` with children of tournament winners
/// drawn from `parents`.
pub fn crossover_fill<'p, R: Rng>(
    parents: &Population<'p>,
    next: &mut Population<'p>,
    target_size: usize,
    tournament_size: usize,
    rng: &mut R,
) {
    let pool = parents.as_slice();
    while next.len() < target_size {
        let p1 = tournament(pool, tournament_size, rng);
        let p2 = tournament(pool, tournament_size, rng);
        next.push(uniform_crossover(&pool[p1], &pool[p2], rng));
    }
}

/// Mutates every chromosome at index `>= elite_count`.
///
/// Returns the total number of genes replaced.
///
/// # Errors
/// [`crate::TimetableError::NoRoomAvailable`] from a mutation draw.
pub fn mutation_pass<R: Rng>(
    population: &mut Population<'_>,
    elite_count: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<usize> {
    let mut mutated = 0;
    for chr in population.chromosomes_mut().iter_mut().skip(elite_count) {
        mutated += reassign_mutation(chr, mutation_rate, rng)?;
    }
    Ok(mutated)
}

/// Produces the next generation from `population`.
///
/// `population` should be sorted best-first so that elitism keeps the best
/// chromosomes; selection itself does not rely on the order. The returned
/// population has exactly `config.population_size` chromosomes and is not
/// sorted.
///
/// # Errors
/// [`crate::TimetableError::NoRoomAvailable`] from a mutation draw.
pub fn evolve<'p, R: Rng>(
    population: &Population<'p>,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Population<'p>> {
    let mut next = elitism(population, config.elite_count, config.population_size);
    crossover_fill(
        population,
        &mut next,
        config.population_size,
        config.tournament_size,
        rng,
    );
    let mutated = mutation_pass(&mut next, config.elite_count, config.mutation_rate, rng)?;
    log::trace!("evolve: {} chromosomes, {} genes mutated", next.len(), mutated);
    Ok(next)
}
