//! Population of candidate timetables.
//!
//! A [`Population`] is an ordered `Vec` of chromosomes. It is sorted
//! best-first only right after [`Population::sort_best_first`]; pushing or
//! replacing chromosomes does not keep it sorted.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::chromosome::Chromosome;
use super::types::{self, Individual};
use crate::error::Result;
use crate::problem::ProblemInstance;

/// Ordered collection of chromosomes for one generation.
#[derive(Debug, Clone, Default)]
pub struct Population<'p> {
    chromosomes: Vec<Chromosome<'p>>,
}

impl<'p> Population<'p> {
    /// Creates an empty population with room for `capacity` chromosomes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chromosomes: Vec::with_capacity(capacity),
        }
    }

    /// Builds `size` independently initialized random chromosomes.
    ///
    /// # Errors
    /// Propagates [`crate::TimetableError::NoRoomAvailable`] from
    /// initialization.
    pub fn seed<R: Rng>(size: usize, problem: &'p ProblemInstance, rng: &mut R) -> Result<Self> {
        let chromosomes = (0..size)
            .map(|_| Chromosome::random(problem, &mut *rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { chromosomes })
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn push(&mut self, chromosome: Chromosome<'p>) {
        self.chromosomes.push(chromosome);
    }

    pub fn as_slice(&self) -> &[Chromosome<'p>] {
        &self.chromosomes
    }

    /// Mutable access for in-place sort, append and replace.
    pub fn chromosomes_mut(&mut self) -> &mut Vec<Chromosome<'p>> {
        &mut self.chromosomes
    }

    pub fn into_inner(self) -> Vec<Chromosome<'p>> {
        self.chromosomes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome<'p>> {
        self.chromosomes.iter()
    }

    /// Stable sort by descending fitness.
    pub fn sort_best_first(&mut self) {
        types::sort_best_first(&mut self.chromosomes);
    }

    /// The chromosome with the highest fitness, scanning the whole
    /// population (sortedness is not assumed). Ties go to the earliest.
    pub fn best(&self) -> Option<&Chromosome<'p>> {
        self.chromosomes
            .iter()
            .reduce(|best, c| if c.fitness() > best.fitness() { c } else { best })
    }

    /// Mean fitness, or `0.0` for an empty population.
    pub fn mean_fitness(&self) -> f64 {
        if self.chromosomes.is_empty() {
            return 0.0;
        }
        self.chromosomes.iter().map(Individual::fitness).sum::<f64>()
            / self.chromosomes.len() as f64
    }

    /// Fills every chromosome's fitness cache.
    ///
    /// With the `parallel` feature and `parallel = true` the work is spread
    /// over rayon's pool. Evaluation is pure, so the result is identical.
    pub fn evaluate_all(&mut self, parallel: bool) {
        #[cfg(feature = "parallel")]
        if parallel {
            self.chromosomes.par_iter_mut().for_each(|c| {
                c.evaluation();
            });
            return;
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        for c in &self.chromosomes {
            c.evaluation();
        }
    }
}

impl<'p> From<Vec<Chromosome<'p>>> for Population<'p> {
    fn from(chromosomes: Vec<Chromosome<'p>>) -> Self {
        Self { chromosomes }
    }
}

impl<'a, 'p> IntoIterator for &'a Population<'p> {
    type Item = &'a Chromosome<'p>;
    type IntoIter = std::slice::Iter<'a, Chromosome<'p>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Gene;
    use crate::models::{Event, Room, SlotAxis, TimeSlot};
    use crate::random::create_rng;
    use chrono::NaiveTime;

    fn problem() -> ProblemInstance {
        let axis = SlotAxis::hourly(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();
        let rooms = vec![Room::always_available(1, 3), Room::always_available(2, 3)];
        ProblemInstance::new(rooms, Event::from_names(&["A", "B", "C"]), axis).unwrap()
    }

    fn with_conflicts<'p>(problem: &'p ProblemInstance, stacked: usize) -> Chromosome<'p> {
        // The first `stacked` events share room 0 / slot 0.
        let genes = (0..problem.event_count())
            .map(|i| {
                if i < stacked {
                    Gene::new(0, TimeSlot::new(0))
                } else {
                    Gene::new(1, TimeSlot::new(i))
                }
            })
            .collect();
        Chromosome::from_genes(problem, genes).unwrap()
    }

    #[test]
    fn test_seed_size() {
        let problem = problem();
        let mut rng = create_rng(42);
        let pop = Population::seed(20, &problem, &mut rng).unwrap();
        assert_eq!(pop.len(), 20);
        assert!(pop.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_sort_and_best() {
        let problem = problem();
        let mut pop = Population::from(vec![
            with_conflicts(&problem, 2),
            with_conflicts(&problem, 0),
            with_conflicts(&problem, 3),
        ]);

        assert_eq!(pop.best().unwrap().conflict_count(), 0);

        pop.sort_best_first();
        let conflicts: Vec<usize> = pop.iter().map(|c| c.conflict_count()).collect();
        assert_eq!(conflicts, vec![0, 1, 3]);
    }

    #[test]
    fn test_mean_fitness() {
        let problem = problem();
        let pop = Population::from(vec![with_conflicts(&problem, 0), with_conflicts(&problem, 2)]);
        assert!((pop.mean_fitness() - 0.75).abs() < 1e-12);
        assert_eq!(Population::default().mean_fitness(), 0.0);
    }

    #[test]
    fn test_evaluate_all_fills_cache() {
        let problem = problem();
        let mut rng = create_rng(1);
        let mut pop = Population::seed(8, &problem, &mut rng).unwrap();
        assert!(pop.iter().all(|c| !c.is_evaluated()));
        pop.evaluate_all(true);
        assert!(pop.iter().all(|c| c.is_evaluated()));
    }

    #[test]
    fn test_chromosomes_mut_replace() {
        let problem = problem();
        let mut pop = Population::from(vec![with_conflicts(&problem, 3)]);
        pop.chromosomes_mut()[0] = with_conflicts(&problem, 0);
        pop.push(with_conflicts(&problem, 2));
        assert_eq!(pop.len(), 2);
        assert!(pop.as_slice()[0].is_perfect());
    }
}
