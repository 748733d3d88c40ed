//! One-call search entry point.
//!
//! [`run_search`] turns a flat [`SearchRequest`] (room count, event names,
//! day window) into a [`ProblemInstance`], runs the GA and flattens the best
//! timetable into a [`BestResult`]. Request handling, serialization to the
//! wire and rendering are left to the caller.

use chrono::{NaiveTime, TimeDelta};
use rand::Rng;

use crate::error::{Result, TimetableError};
use crate::ga::{Chromosome, GaConfig, GaRunner};
use crate::models::{parse_clock, Event, Room, SlotAxis, TimeSlot};
use crate::problem::ProblemInstance;
use crate::random::rng_from_option;

/// Event names used when the caller supplies none of its own.
pub const DEFAULT_EVENT_NAMES: [&str; 8] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Literature",
    "Computer Science",
    "Art",
];

/// A room/slot pair marked as unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoomClosure {
    /// Room id (`1..=room_count`).
    pub room_id: u32,
    /// Slot index.
    pub slot: usize,
}

/// Input of [`run_search`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchRequest {
    /// Number of rooms; rooms get ids `1..=room_count`.
    pub room_count: usize,
    /// Event names in order; events get ids `1..=n`.
    pub event_names: Vec<String>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Slot width in minutes (default 60).
    #[cfg_attr(feature = "serde", serde(default = "default_slot_width"))]
    pub slot_width_minutes: u32,
    /// Room/slot pairs the rooms cannot host. Empty means every room is
    /// available at every slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unavailable: Vec<RoomClosure>,
    /// GA parameters.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub ga: GaConfig,
}

#[cfg(feature = "serde")]
fn default_slot_width() -> u32 {
    60
}

impl SearchRequest {
    pub fn new<S: Into<String>>(
        room_count: usize,
        event_names: impl IntoIterator<Item = S>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            room_count,
            event_names: event_names.into_iter().map(Into::into).collect(),
            start_time,
            end_time,
            slot_width_minutes: 60,
            unavailable: Vec::new(),
            ga: GaConfig::default(),
        }
    }

    /// Like [`SearchRequest::new`] but with clock strings such as
    /// `"09:00 AM"`.
    ///
    /// # Errors
    /// [`TimetableError::InvalidProblemConfig`] if a time does not parse.
    pub fn with_clock_strings<S: Into<String>>(
        room_count: usize,
        event_names: impl IntoIterator<Item = S>,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            room_count,
            event_names,
            parse_clock(start_time)?,
            parse_clock(end_time)?,
        ))
    }

    pub fn with_slot_width_minutes(mut self, minutes: u32) -> Self {
        self.slot_width_minutes = minutes;
        self
    }

    /// Marks room `room_id` as unavailable at `slot`.
    pub fn with_unavailable(mut self, room_id: u32, slot: usize) -> Self {
        self.unavailable.push(RoomClosure { room_id, slot });
        self
    }

    pub fn with_ga_config(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Builds the problem instance described by this request.
    ///
    /// # Errors
    /// [`TimetableError::InvalidProblemConfig`] for a zero room count, an
    /// empty or blank event list, a bad time window or an unavailable-slot
    /// entry that points outside the problem.
    pub fn build_problem(&self) -> Result<ProblemInstance> {
        if self.room_count < 1 {
            return Err(TimetableError::problem("room count must be at least 1"));
        }
        if self.event_names.is_empty() {
            return Err(TimetableError::problem("event list must not be empty"));
        }
        let axis = SlotAxis::new(
            self.start_time,
            self.end_time,
            TimeDelta::minutes(i64::from(self.slot_width_minutes)),
        )?;

        let room_count = u32::try_from(self.room_count).map_err(|_| {
            TimetableError::problem(format!("room count {} is too large", self.room_count))
        })?;
        let mut rooms: Vec<Room> = (1..=room_count)
            .map(|id| Room::always_available(id, axis.len()))
            .collect();
        for closure in &self.unavailable {
            let index = (closure.room_id as usize).wrapping_sub(1);
            if index >= rooms.len() || closure.slot >= axis.len() {
                return Err(TimetableError::problem(format!(
                    "unavailable entry (room {}, slot {}) is outside the problem",
                    closure.room_id, closure.slot
                )));
            }
            rooms[index] = rooms[index]
                .clone()
                .with_unavailable(TimeSlot::new(closure.slot));
        }

        ProblemInstance::new(rooms, Event::from_names(&self.event_names), axis)
    }
}

/// One row of the best timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScheduledAssignment {
    pub event_id: u32,
    pub event_name: String,
    pub room_id: u32,
    /// Start of the slot, e.g. `"09:00 AM"`.
    pub time_slot_label: String,
}

/// Output of [`run_search`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BestResult {
    /// Fitness of the best timetable, in `(0, 1]`.
    pub fitness: f64,
    pub conflict_count: usize,
    /// Generations executed.
    pub generations: usize,
    /// `true` when `conflict_count == 0`.
    pub solved: bool,
    /// One row per event, in event order.
    pub assignments: Vec<ScheduledAssignment>,
}

impl BestResult {
    fn from_chromosome(best: &Chromosome<'_>, generations: usize) -> Self {
        let assignments = best
            .assignments()
            .map(|a| ScheduledAssignment {
                event_id: a.event.id,
                event_name: a.event.name.clone(),
                room_id: a.room.id(),
                time_slot_label: a.slot_label(),
            })
            .collect();
        Self {
            fitness: best.evaluation().fitness,
            conflict_count: best.conflict_count(),
            generations,
            solved: best.is_perfect(),
            assignments,
        }
    }
}

/// Runs one search with a generator seeded from `request.ga.seed`.
///
/// # Errors
/// - [`TimetableError::InvalidProblemConfig`] from problem construction
/// - [`TimetableError::InvalidGaConfig`] from GA parameter validation
/// - [`TimetableError::NoRoomAvailable`] from a random draw
pub fn run_search(request: &SearchRequest) -> Result<BestResult> {
    let mut rng = rng_from_option(request.ga.seed);
    run_search_with_rng(request, &mut rng)
}

/// Runs one search with a caller-owned generator.
pub fn run_search_with_rng<R: Rng>(request: &SearchRequest, rng: &mut R) -> Result<BestResult> {
    let problem = request.build_problem()?;
    log::info!(
        "searching timetable: {} events, {} rooms, {} slots",
        problem.event_count(),
        problem.rooms().len(),
        problem.slot_count()
    );
    let result = GaRunner::run(&problem, &request.ga, rng)?;
    Ok(BestResult::from_chromosome(&result.best, result.generations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn at(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_default_day_builds_eight_slots() {
        let request = SearchRequest::new(3, DEFAULT_EVENT_NAMES, at(9), at(17));
        let problem = request.build_problem().unwrap();
        assert_eq!(problem.slot_count(), 8);
        assert_eq!(problem.rooms().len(), 3);
        assert_eq!(problem.events()[7].name, "Art");
        assert_eq!(problem.events()[7].id, 8);
    }

    #[test]
    fn test_clock_strings() {
        let request =
            SearchRequest::with_clock_strings(3, DEFAULT_EVENT_NAMES, "09:00 AM", "05:00 PM")
                .unwrap();
        assert_eq!(request.start_time, at(9));
        assert_eq!(request.end_time, at(17));
        assert!(SearchRequest::with_clock_strings(1, ["A"], "nine", "05:00 PM").is_err());
    }

    #[test]
    fn test_invalid_requests() {
        let zero_rooms = SearchRequest::new(0, ["A"], at(9), at(10));
        let no_events = SearchRequest::new(1, Vec::<String>::new(), at(9), at(10));
        let backwards = SearchRequest::new(1, ["A"], at(10), at(9));
        let blank = SearchRequest::new(1, [""], at(9), at(10));
        let bad_closure = SearchRequest::new(1, ["A"], at(9), at(10)).with_unavailable(2, 0);

        for request in [zero_rooms, no_events, backwards, blank, bad_closure] {
            let err = run_search(&request).unwrap_err();
            assert!(
                matches!(err, TimetableError::InvalidProblemConfig(_)),
                "unexpected error {err:?}"
            );
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_room_count_beyond_u32_is_rejected() {
        let request = SearchRequest::new(u32::MAX as usize + 1, ["A"], at(9), at(10));
        let err = request.build_problem().unwrap_err();
        assert!(matches!(err, TimetableError::InvalidProblemConfig(_)));
    }

    #[test]
    fn test_unavailable_is_applied() {
        let request = SearchRequest::new(2, ["A"], at(9), at(12)).with_unavailable(2, 0);
        let problem = request.build_problem().unwrap();
        assert!(!problem.rooms()[1].is_available(TimeSlot::new(0)));
        assert!(problem.rooms()[0].is_available(TimeSlot::new(0)));
    }

    #[test]
    fn test_run_search_end_to_end() {
        let request = SearchRequest::new(3, DEFAULT_EVENT_NAMES, at(9), at(17))
            .with_ga_config(GaConfig::default().with_seed(42));
        let result = run_search(&request).unwrap();

        assert!(result.generations <= 200);
        assert_eq!(result.assignments.len(), 8);
        for (i, row) in result.assignments.iter().enumerate() {
            assert_eq!(row.event_id, i as u32 + 1);
            assert!((1..=3).contains(&row.room_id));
            assert!(row.time_slot_label.ends_with("AM") || row.time_slot_label.ends_with("PM"));
        }
        assert!(result.solved);
        assert_eq!(result.fitness, 1.0);
        assert_eq!(result.conflict_count, 0);
    }

    #[test]
    fn test_run_search_with_rng_is_reproducible() {
        let request = SearchRequest::new(2, ["A", "B", "C", "D", "E"], at(8), at(11));
        let a = run_search_with_rng(&request, &mut create_rng(5)).unwrap();
        let b = run_search_with_rng(&request, &mut create_rng(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_room_available_surfaces() {
        // The only room is closed at slot 1.
        let request = SearchRequest::new(1, ["A", "B"], at(9), at(11))
            .with_unavailable(1, 1)
            .with_ga_config(GaConfig::default().with_seed(3));
        let err = run_search(&request).unwrap_err();
        assert_eq!(err, TimetableError::NoRoomAvailable { slot: 1 });
    }
}
