//! Problem instance: the fixed rooms, events and slot axis of one run.
//!
//! A [`ProblemInstance`] is validated once at construction and never
//! changes afterwards. Chromosomes, populations and operators borrow it
//! read-only, so two runs with different instances never observe each
//! other's slot axis or availability data.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{Result, TimetableError};
use crate::ga::Gene;
use crate::models::{Event, Room, SlotAxis, TimeSlot};

/// Immutable description of a timetabling problem.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    rooms: Vec<Room>,
    events: Vec<Event>,
    axis: SlotAxis,
    /// Room indices available at each slot, indexed by slot.
    available_rooms: Vec<Vec<usize>>,
}

impl ProblemInstance {
    /// Builds and validates a problem.
    ///
    /// # Errors
    /// [`TimetableError::InvalidProblemConfig`] if there are no rooms or
    /// events, an event name is blank, two events share an id, or a room's
    /// availability bitmap does not match the number of slots.
    pub fn new(rooms: Vec<Room>, events: Vec<Event>, axis: SlotAxis) -> Result<Self> {
        if rooms.is_empty() {
            return Err(TimetableError::problem("room count must be at least 1"));
        }
        if events.is_empty() {
            return Err(TimetableError::problem("event list must not be empty"));
        }

        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if event.name.trim().is_empty() {
                return Err(TimetableError::problem(format!(
                    "event #{} has an empty name",
                    event.id
                )));
            }
            if !seen.insert(event.id) {
                return Err(TimetableError::problem(format!(
                    "duplicate event id {}",
                    event.id
                )));
            }
        }

        for room in &rooms {
            if room.slot_count() != axis.len() {
                return Err(TimetableError::problem(format!(
                    "room {} has availability for {} slots, expected {}",
                    room.id(),
                    room.slot_count(),
                    axis.len()
                )));
            }
        }

        let available_rooms = axis
            .slots()
            .map(|slot| {
                rooms
                    .iter()
                    .enumerate()
                    .filter(|(_, room)| room.is_available(slot))
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();

        Ok(Self {
            rooms,
            events,
            axis,
            available_rooms,
        })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, index: usize) -> &Room {
        &self.rooms[index]
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn axis(&self) -> &SlotAxis {
        &self.axis
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn slot_count(&self) -> usize {
        self.axis.len()
    }

    /// Indices of the rooms available at `slot`.
    pub fn rooms_available_at(&self, slot: TimeSlot) -> &[usize] {
        self.available_rooms
            .get(slot.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Draws a random gene: a uniform slot over the whole axis, then a
    /// uniform room among those available at that slot.
    ///
    /// # Errors
    /// [`TimetableError::NoRoomAvailable`] if no room is free at the drawn
    /// slot.
    pub fn random_gene<R: Rng>(&self, rng: &mut R) -> Result<Gene> {
        let slot = TimeSlot::new(rng.random_range(0..self.axis.len()));
        let room = self
            .rooms_available_at(slot)
            .choose(rng)
            .copied()
            .ok_or(TimetableError::NoRoomAvailable { slot: slot.index() })?;
        Ok(Gene::new(room, slot))
    }
}
