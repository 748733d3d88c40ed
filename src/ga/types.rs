//! Core trait shared by the selection and sorting routines.

use std::cmp::Ordering;

/// A candidate solution with a fitness score.
///
/// Higher fitness is better (maximization). Timetable fitness lives in
/// `(0, 1]` with `1.0` meaning conflict-free.
pub trait Individual {
    /// Returns the fitness of this individual, computing it if needed.
    fn fitness(&self) -> f64;
}

/// Orders two individuals best-first (descending fitness).
///
/// NaN compares equal so sorting never panics.
pub fn best_first<I: Individual>(a: &I, b: &I) -> Ordering {
    b.fitness()
        .partial_cmp(&a.fitness())
        .unwrap_or(Ordering::Equal)
}

/// Stable sort of `individuals` by descending fitness.
pub fn sort_best_first<I: Individual>(individuals: &mut [I]) {
    individuals.sort_by(best_first);
}
