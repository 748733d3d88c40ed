//! Event model.

use std::fmt;

/// An event to be placed into a room at some slot.
///
/// The event itself carries no assignment: each candidate timetable keeps
/// its own (room, slot) gene at the event's position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Stable identifier, unique within a problem.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
}

impl Event {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Builds events with ids `1..=n` from a list of names.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Vec<Event> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Event::new(i as u32 + 1, name.as_ref()))
            .collect()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
