//! Conflict-counting fitness.
//!
//! Two kinds of conflict are counted with equal weight:
//!
//! - **Unavailable room**: an event placed in a room that cannot host it at
//!   the assigned slot (one penalty per event).
//! - **Double booking**: two distinct events sharing both room and slot (one
//!   penalty per unordered pair).
//!
//! Fitness is `1 / (1 + conflicts)`, so it lies in `(0, 1]` and equals
//! `1.0` exactly when the timetable is conflict-free.

use super::chromosome::Gene;
use crate::problem::ProblemInstance;

/// Cached result of evaluating a chromosome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Number of conflicts.
    pub conflicts: usize,
    /// `1 / (1 + conflicts)`.
    pub fitness: f64,
}

impl Evaluation {
    pub fn from_conflicts(conflicts: usize) -> Self {
        Self {
            conflicts,
            fitness: fitness_from_conflicts(conflicts),
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.conflicts == 0
    }
}

/// Maps a conflict count to a fitness in `(0, 1]`.
#[inline]
pub fn fitness_from_conflicts(conflicts: usize) -> f64 {
    1.0 / (1.0 + conflicts as f64)
}

/// Counts the conflicts of `genes`, where `genes[i]` is the assignment of
/// the problem's `i`-th event.
///
/// O(E²) in the number of events and allocation-free.
pub fn count_conflicts(problem: &ProblemInstance, genes: &[Gene]) -> usize {
    let mut conflicts = 0;
    for (i, gene) in genes.iter().enumerate() {
        if !problem.room(gene.room).is_available(gene.slot) {
            conflicts += 1;
        }
        conflicts += genes[i + 1..]
            .iter()
            .filter(|other| other.room == gene.room && other.slot == gene.slot)
            .count();
    }
    conflicts
}

/// Evaluates `genes` against `problem`.
pub fn evaluate(problem: &ProblemInstance, genes: &[Gene]) -> Evaluation {
    Evaluation::from_conflicts(count_conflicts(problem, genes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, Room, SlotAxis, TimeSlot};
    use chrono::NaiveTime;

    /// Room A free at all three slots, room B closed at slot 0.
    fn two_room_problem(events: usize) -> ProblemInstance {
        let axis = SlotAxis::hourly(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();
        let rooms = vec![
            Room::always_available(1, 3),
            Room::always_available(2, 3).with_unavailable(TimeSlot::new(0)),
        ];
        let names: Vec<String> = (1..=events).map(|i| format!("Event {i}")).collect();
        ProblemInstance::new(rooms, Event::from_names(&names), axis).unwrap()
    }

    fn gene(room: usize, slot: usize) -> Gene {
        Gene::new(room, TimeSlot::new(slot))
    }

    #[test]
    fn test_double_booking() {
        let problem = two_room_problem(2);
        let genes = [gene(0, 0), gene(0, 0)];
        let eval = evaluate(&problem, &genes);
        assert_eq!(eval.conflicts, 1);
        assert!((eval.fitness - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unavailable_room() {
        let problem = two_room_problem(2);
        let genes = [gene(1, 0), gene(0, 1)];
        let eval = evaluate(&problem, &genes);
        assert_eq!(eval.conflicts, 1);
        assert!((eval.fitness - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_conflict_free() {
        let problem = two_room_problem(2);
        let eval = evaluate(&problem, &[gene(0, 0), gene(1, 1)]);
        assert!(eval.is_perfect());
        assert_eq!(eval.fitness, 1.0);
    }

    #[test]
    fn test_each_pair_counted_once() {
        let problem = two_room_problem(3);
        // Three events in the same room/slot form three unordered pairs.
        let eval = evaluate(&problem, &[gene(0, 2), gene(0, 2), gene(0, 2)]);
        assert_eq!(eval.conflicts, 3);
    }

    #[test]
    fn test_both_kinds_add_up() {
        let problem = two_room_problem(2);
        // Same unavailable room/slot: two availability penalties plus one pair.
        let eval = evaluate(&problem, &[gene(1, 0), gene(1, 0)]);
        assert_eq!(eval.conflicts, 3);
        assert!((eval.fitness - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_fitness_from_conflicts() {
        assert_eq!(fitness_from_conflicts(0), 1.0);
        assert!((fitness_from_conflicts(1) - 0.5).abs() < 1e-12);
        assert!(fitness_from_conflicts(1_000_000) > 0.0);
    }
}
