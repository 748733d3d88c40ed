//! Room model.

use super::TimeSlot;

/// A room with a fixed per-slot availability bitmap.
///
/// `availability[i]` tells whether the room can host an event at slot `i`.
/// The bitmap is built once and never changes during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    id: u32,
    availability: Vec<bool>,
}

impl Room {
    /// Creates a room from an explicit availability bitmap.
    pub fn new(id: u32, availability: Vec<bool>) -> Self {
        Self { id, availability }
    }

    /// Creates a room that is available at every one of `slot_count` slots.
    pub fn always_available(id: u32, slot_count: usize) -> Self {
        Self::new(id, vec![true; slot_count])
    }

    /// Marks `slot` as unavailable. Out-of-range slots are ignored.
    pub fn with_unavailable(mut self, slot: TimeSlot) -> Self {
        if let Some(bit) = self.availability.get_mut(slot.index()) {
            *bit = false;
        }
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether the room can host an event at `slot`.
    ///
    /// Slots outside the bitmap are never available.
    #[inline]
    pub fn is_available(&self, slot: TimeSlot) -> bool {
        self.availability.get(slot.index()).copied().unwrap_or(false)
    }

    /// Length of the availability bitmap.
    pub fn slot_count(&self) -> usize {
        self.availability.len()
    }

    pub fn availability(&self) -> &[bool] {
        &self.availability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_available() {
        let room = Room::always_available(1, 3);
        assert_eq!(room.slot_count(), 3);
        assert!((0..3).all(|i| room.is_available(TimeSlot::new(i))));
    }

    #[test]
    fn test_with_unavailable() {
        let room = Room::always_available(2, 3).with_unavailable(TimeSlot::new(0));
        assert!(!room.is_available(TimeSlot::new(0)));
        assert!(room.is_available(TimeSlot::new(1)));
        assert!(room.is_available(TimeSlot::new(2)));
    }

    #[test]
    fn test_out_of_range_slot_is_unavailable() {
        let room = Room::always_available(1, 2).with_unavailable(TimeSlot::new(9));
        assert_eq!(room.availability(), &[true, true]);
        assert!(!room.is_available(TimeSlot::new(2)));
    }
}
