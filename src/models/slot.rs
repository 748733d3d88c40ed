//! Discretized time-slot axis.
//!
//! A day window `[start, end)` is cut into `N = floor((end - start) / width)`
//! slots of equal width. Slots are identified by index only; the clock time
//! is derived from the axis when a label is needed.

use std::fmt;

use chrono::{NaiveTime, TimeDelta};

use crate::error::{Result, TimetableError};

/// Clock format used for slot labels and accepted by [`parse_clock`].
pub const CLOCK_FORMAT: &str = "%I:%M %p";

/// Index of a slot on a [`SlotAxis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSlot(usize);

impl TimeSlot {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// The time window of one run, split into equal-width slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAxis {
    start: NaiveTime,
    end: NaiveTime,
    width: TimeDelta,
    count: usize,
}

impl SlotAxis {
    /// Creates an axis over `[start, end)` with slots of `width`.
    ///
    /// # Errors
    /// [`TimetableError::InvalidProblemConfig`] when `end` is not after
    /// `start`, when `width` is shorter than one second, or when the window
    /// is too short to hold a single slot.
    pub fn new(start: NaiveTime, end: NaiveTime, width: TimeDelta) -> Result<Self> {
        if end <= start {
            return Err(TimetableError::problem(format!(
                "end time {} must be after start time {}",
                end.format(CLOCK_FORMAT),
                start.format(CLOCK_FORMAT)
            )));
        }
        if width < TimeDelta::seconds(1) {
            return Err(TimetableError::problem(
                "slot width must be at least one second",
            ));
        }

        let window = (end - start).num_nanoseconds().unwrap_or(i64::MAX);
        let step = width.num_nanoseconds().unwrap_or(i64::MAX);
        let count = (window / step) as usize;
        if count == 0 {
            return Err(TimetableError::problem(
                "time window is shorter than one slot",
            ));
        }

        Ok(Self {
            start,
            end,
            width,
            count,
        })
    }

    /// Axis with one-hour slots.
    pub fn hourly(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        Self::new(start, end, TimeDelta::hours(1))
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn width(&self) -> TimeDelta {
        self.width
    }

    /// Number of slots `N`.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false` for a constructed axis; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, slot: TimeSlot) -> bool {
        slot.index() < self.count
    }

    /// Iterates over all slots in order.
    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> {
        (0..self.count).map(TimeSlot::new)
    }

    /// Clock time at which `slot` begins.
    pub fn start_of(&self, slot: TimeSlot) -> NaiveTime {
        self.start + self.width * slot.index() as i32
    }

    /// Human-readable label of `slot`, e.g. `"09:00 AM"`.
    pub fn label(&self, slot: TimeSlot) -> String {
        self.start_of(slot).format(CLOCK_FORMAT).to_string()
    }
}

/// Parses a time of day such as `"09:00 AM"` or `"17:30"`.
///
/// # Errors
/// [`TimetableError::InvalidProblemConfig`] if neither format matches.
pub fn parse_clock(text: &str) -> Result<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, CLOCK_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .map_err(|_| TimetableError::problem(format!("unrecognized time of day: {text:?}")))
}
