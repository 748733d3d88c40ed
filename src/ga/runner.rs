//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete search:
//! seed → sort → (evolve → sort)* until a conflict-free timetable appears
//! or the generation budget runs out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::engine::evolve;
use super::population::Population;
use super::types::Individual;
use crate::error::Result;
use crate::problem::ProblemInstance;
use crate::random::rng_from_option;

/// Snapshot of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number (`0` = initial population).
    pub generation: usize,
    /// Fitness of the best chromosome.
    pub best_fitness: f64,
    /// Conflicts of the best chromosome.
    pub best_conflicts: usize,
    /// Mean fitness over the population.
    pub mean_fitness: f64,
}

impl GenerationStats {
    fn of(generation: usize, population: &Population<'_>, best: &Chromosome<'_>) -> Self {
        Self {
            generation,
            best_fitness: best.fitness(),
            best_conflicts: best.conflict_count(),
            mean_fitness: population.mean_fitness(),
        }
    }
}

/// Result of a GA run.
///
/// Contains the best timetable of the final population along with
/// statistics about the run.
#[derive(Debug, Clone)]
pub struct GaResult<'p> {
    /// Best chromosome of the final population.
    pub best: Chromosome<'p>,

    /// Same as `best.fitness()`.
    pub best_fitness: f64,

    /// Same as `best.conflict_count()`.
    pub best_conflicts: usize,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether a conflict-free timetable was found.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// One entry for the initial population, then one per generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = ProblemInstance::new(rooms, events, axis)?;
/// let config = GaConfig::default();
/// let mut rng = create_rng(42);
/// let result = GaRunner::run(&problem, &config, &mut rng)?;
/// println!("conflicts: {}", result.best_conflicts);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the search with a caller-owned random generator.
    ///
    /// The run is a pure function of `(problem, config, rng state)`.
    ///
    /// # Errors
    /// - [`crate::TimetableError::InvalidGaConfig`] if `config` is invalid
    /// - [`crate::TimetableError::NoRoomAvailable`] from a random draw
    pub fn run<'p, R: Rng>(
        problem: &'p ProblemInstance,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<'p>> {
        Self::run_with_cancel(problem, config, rng, None)
    }

    /// Runs the search with a generator seeded from `config.seed` (random
    /// when `None`).
    pub fn run_seeded<'p>(
        problem: &'p ProblemInstance,
        config: &GaConfig,
    ) -> Result<GaResult<'p>> {
        let mut rng = rng_from_option(config.seed);
        Self::run(problem, config, &mut rng)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked between generations only. When it is set, the
    /// best chromosome of the current population is returned.
    pub fn run_with_cancel<'p, R: Rng>(
        problem: &'p ProblemInstance,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<'p>> {
        config.validate()?;

        // 1. Seed and sort
        let mut population = Population::seed(config.population_size, problem, rng)?;
        population.evaluate_all(config.parallel);
        population.sort_best_first();

        let mut history = Vec::with_capacity(config.max_generations + 1);
        history.push(GenerationStats::of(0, &population, &population.as_slice()[0]));

        let mut generation = 0;
        let mut cancelled = false;

        // 2. Generational loop
        while !population.as_slice()[0].is_perfect() && generation < config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            generation += 1;
            population = evolve(&population, config, rng)?;
            population.evaluate_all(config.parallel);
            population.sort_best_first();

            let stats = GenerationStats::of(generation, &population, &population.as_slice()[0]);
            log::debug!(
                "generation {}: best fitness {:.4} ({} conflicts), mean {:.4}",
                stats.generation,
                stats.best_fitness,
                stats.best_conflicts,
                stats.mean_fitness
            );
            history.push(stats);
        }

        let best = population.as_slice()[0].clone();
        let solved = best.is_perfect();
        if solved {
            log::info!("conflict-free timetable found after {generation} generations");
        } else if cancelled {
            log::info!(
                "search cancelled after {generation} generations with {} conflicts left",
                best.conflict_count()
            );
        } else {
            log::warn!(
                "generation budget of {} exhausted with {} conflicts left",
                config.max_generations,
                best.conflict_count()
            );
        }

        Ok(GaResult {
            best_fitness: best.fitness(),
            best_conflicts: best.conflict_count(),
            best,
            generations: generation,
            solved,
            cancelled,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
