//! Timetable chromosome.
//!
//! # Encoding
//!
//! A chromosome is a vector of [`Gene`]s parallel to the problem's event
//! list: `genes[i]` is the (room, slot) assignment of event `i`. Every
//! chromosome owns its genes, so no two chromosomes share assignment state.
//!
//! # Fitness cache
//!
//! The evaluation is computed on first read and cached. Every write goes
//! through [`Chromosome::set_gene`], which drops the cache, so a read after
//! a write always reflects the write.

use std::cell::OnceCell;
use std::fmt;

use rand::Rng;

use super::fitness::{self, Evaluation};
use super::types::Individual;
use crate::error::{Result, TimetableError};
use crate::models::{Event, Room, SlotAxis, TimeSlot};
use crate::problem::ProblemInstance;

/// Assignment of one event: a room (index into the problem's rooms) and a
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    /// Index into [`ProblemInstance::rooms`].
    pub room: usize,
    /// Assigned slot.
    pub slot: TimeSlot,
}

impl Gene {
    pub const fn new(room: usize, slot: TimeSlot) -> Self {
        Self { room, slot }
    }
}

/// One full candidate timetable.
#[derive(Clone)]
pub struct Chromosome<'p> {
    problem: &'p ProblemInstance,
    genes: Vec<Gene>,
    evaluation: OnceCell<Evaluation>,
}

impl<'p> Chromosome<'p> {
    /// Creates a random chromosome.
    ///
    /// Each event gets a uniformly random slot, then a room drawn uniformly
    /// among the rooms available at that slot.
    ///
    /// # Errors
    /// [`TimetableError::NoRoomAvailable`] if a drawn slot has no free room.
    pub fn random<R: Rng>(problem: &'p ProblemInstance, rng: &mut R) -> Result<Self> {
        let genes = (0..problem.event_count())
            .map(|_| problem.random_gene(&mut *rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new_unchecked(problem, genes))
    }

    /// Creates a chromosome from explicit genes.
    ///
    /// # Errors
    /// [`TimetableError::InvalidChromosome`] if the gene count differs from
    /// the event count or a gene points outside the problem.
    pub fn from_genes(problem: &'p ProblemInstance, genes: Vec<Gene>) -> Result<Self> {
        if genes.len() != problem.event_count() {
            return Err(TimetableError::chromosome(format!(
                "expected {} genes, got {}",
                problem.event_count(),
                genes.len()
            )));
        }
        if let Some((i, gene)) = genes.iter().enumerate().find(|(_, g)| !fits(problem, g)) {
            return Err(TimetableError::chromosome(format!(
                "gene {i} ({gene:?}) is outside the problem"
            )));
        }
        Ok(Self::new_unchecked(problem, genes))
    }

    pub(crate) fn new_unchecked(problem: &'p ProblemInstance, genes: Vec<Gene>) -> Self {
        Self {
            problem,
            genes,
            evaluation: OnceCell::new(),
        }
    }

    pub fn problem(&self) -> &'p ProblemInstance {
        self.problem
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn gene(&self, index: usize) -> Gene {
        self.genes[index]
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Replaces the gene at `index` and invalidates the cached fitness.
    ///
    /// # Errors
    /// [`TimetableError::InvalidChromosome`] if `index` is past the last
    /// event or `gene` points outside the problem. The chromosome is left
    /// untouched in that case.
    pub fn set_gene(&mut self, index: usize, gene: Gene) -> Result<()> {
        if !fits(self.problem, &gene) {
            return Err(TimetableError::chromosome(format!(
                "gene {index} ({gene:?}) is outside the problem"
            )));
        }
        let cell = self.genes.get_mut(index).ok_or_else(|| {
            TimetableError::chromosome(format!(
                "gene index {index} out of range for {} events",
                self.problem.event_count()
            ))
        })?;
        *cell = gene;
        self.invalidate_fitness();
        Ok(())
    }

    /// Drops the cached evaluation; the next read recomputes it.
    pub fn invalidate_fitness(&mut self) {
        self.evaluation.take();
    }

    /// Whether an evaluation is currently cached.
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.get().is_some()
    }

    /// Conflicts and fitness, computed on first use.
    pub fn evaluation(&self) -> Evaluation {
        *self
            .evaluation
            .get_or_init(|| fitness::evaluate(self.problem, &self.genes))
    }

    pub fn conflict_count(&self) -> usize {
        self.evaluation().conflicts
    }

    /// `true` when the timetable has no conflicts (fitness `1.0`).
    pub fn is_perfect(&self) -> bool {
        self.evaluation().is_perfect()
    }

    /// Read-only view of every event with its room and slot, in event order.
    pub fn assignments(&self) -> impl Iterator<Item = ScheduledEvent<'p>> + '_ {
        let problem = self.problem;
        problem
            .events()
            .iter()
            .zip(&self.genes)
            .map(move |(event, gene)| ScheduledEvent {
                event,
                room: problem.room(gene.room),
                slot: gene.slot,
                axis: problem.axis(),
            })
    }
}

fn fits(problem: &ProblemInstance, gene: &Gene) -> bool {
    gene.room < problem.rooms().len() && problem.axis().contains(gene.slot)
}

impl Individual for Chromosome<'_> {
    fn fitness(&self) -> f64 {
        self.evaluation().fitness
    }
}

impl PartialEq for Chromosome<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

impl fmt::Debug for Chromosome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("genes", &self.genes)
            .field("evaluation", &self.evaluation.get())
            .finish()
    }
}

/// One event together with the room and slot a chromosome assigns to it.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledEvent<'p> {
    pub event: &'p Event,
    pub room: &'p Room,
    pub slot: TimeSlot,
    axis: &'p SlotAxis,
}

impl ScheduledEvent<'_> {
    /// Clock label of the assigned slot, e.g. `"09:00 AM"`.
    pub fn slot_label(&self) -> String {
        self.axis.label(self.slot)
    }
}

impl fmt::Display for ScheduledEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> Room {} @ {}",
            self.event.name,
            self.room.id(),
            self.slot_label()
        )
    }
}
