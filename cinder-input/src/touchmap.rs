//! Touch slot allocation: platform touch identifiers → pointer slots.
//!
//! Platform identifiers are arbitrary integers, unique only while the
//! contact is live and freely reused afterwards. Slots are the small dense
//! indices the state store is built around.

use crate::state::MAX_TOUCHES;

/// Bidirectional map between live touch identifiers and pointer slots,
/// stored slot-side since MAX_TOUCHES is tiny.
#[derive(Default)]
pub struct TouchMap {
    slots: [Option<i32>; MAX_TOUCHES],
}

impl TouchMap {
    pub fn new() -> Self {
        TouchMap::default()
    }

    /// Map a new contact to the lowest free slot. Returns `None` when all
    /// slots are occupied; the caller drops the contact silently.
    pub fn allocate(&mut self, raw_id: i32) -> Option<usize> {
        let free = self.slots.iter().position(|slot| slot.is_none())?;
        self.slots[free] = Some(raw_id);
        Some(free)
    }

    /// Slot currently mapped to a live contact, if any.
    pub fn lookup(&self, raw_id: i32) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(raw_id))
    }

    /// Remove a contact's mapping, returning the slot it held. The platform
    /// may reuse the identifier for a later, unrelated contact.
    pub fn release(&mut self, raw_id: i32) -> Option<usize> {
        let slot = self.lookup(raw_id)?;
        self.slots[slot] = None;
        Some(slot)
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocates_lowest_free_slot() {
        let mut map = TouchMap::new();
        assert_eq!(map.allocate(42), Some(0));
        assert_eq!(map.allocate(7), Some(1));
        map.release(42);
        // slot 0 is free again and preferred
        assert_eq!(map.allocate(99), Some(0));
    }

    #[test]
    fn test_release_round_trip() {
        let mut map = TouchMap::new();
        let slot = map.allocate(42).unwrap();
        assert_eq!(map.lookup(42), Some(slot));
        assert_eq!(map.release(42), Some(slot));
        assert_eq!(map.lookup(42), None);
        assert_eq!(map.release(42), None);
    }

    #[test]
    fn test_id_reuse_after_release() {
        let mut map = TouchMap::new();
        map.allocate(5);
        map.release(5);
        // same platform id, unrelated contact
        assert!(map.allocate(5).is_some());
        assert_eq!(map.live_count(), 1);
    }

    #[test]
    fn test_exhaustion_returns_none() {
        let mut map = TouchMap::new();
        for id in 0..MAX_TOUCHES as i32 {
            assert!(map.allocate(id).is_some());
        }
        assert_eq!(map.allocate(1000), None);
        assert_eq!(map.live_count(), MAX_TOUCHES);
        // the existing mappings are untouched
        assert_eq!(map.lookup(0), Some(0));
        assert_eq!(map.lookup(19), Some(19));
    }
}
