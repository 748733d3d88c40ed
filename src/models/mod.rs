//! Timetabling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Event`] | Something that needs a room for one slot (lecture, meeting) |
//! | [`Room`] | A place with a per-slot availability bitmap |
//! | [`TimeSlot`] | Index into the discretized day |
//! | [`SlotAxis`] | Start, end and width of the discretized day |

mod event;
mod room;
mod slot;

pub use event::Event;
pub use room::Room;
pub use slot::{parse_clock, SlotAxis, TimeSlot, CLOCK_FORMAT};
