//! Short-term memory: a time-bounded, insertion-ordered store of stimuli.
//!
//! See [`ShortTermMemory`] for more info.

use crate::stimulus::Identifiable;
use crate::Scalar;

/// Ordered collection of `(item, remaining_seconds)` entries.
///
/// Entries are kept in insertion order for deterministic iteration.
/// `add_or_replace` keyed by the item's id replaces the existing entry's
/// payload while resetting its remaining time, without disturbing the
/// position of other entries. `update` decrements every entry's remaining
/// time by the given delta and evicts any entry whose remaining time has
/// dropped below zero, in the same call; an entry resting at exactly zero
/// survives that tick and is evicted on the next.
///
/// # Example
/// ```
/// use nai_goap::prelude::*;
///
/// let mut memory = ShortTermMemory::<Stimulus>::default();
/// memory.add(Stimulus::new(1, "FOOD", 3.0), 3.0);
/// assert!(!memory.is_empty());
///
/// for _ in 0..18 {
///     memory.update(0.16);
/// }
/// assert!(!memory.is_empty());
///
/// memory.update(0.16);
/// assert!(memory.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ShortTermMemory<T> {
    entries: Vec<(T, Scalar)>,
}

impl<T> Default for ShortTermMemory<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> ShortTermMemory<T>
where
    T: Identifiable,
{
    /// Number of items currently held.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new item with the given time-to-live, in seconds.
    pub fn add(&mut self, item: T, ttl_seconds: Scalar) {
        self.entries.push((item, ttl_seconds));
    }

    /// Replaces the entry sharing `item`'s id (resetting its remaining
    /// time) or appends it as a new entry if no such id exists yet.
    pub fn add_or_replace(&mut self, item: T, ttl_seconds: Scalar) {
        let id = item.id();
        if let Some(slot) = self.entries.iter_mut().find(|(stored, _)| stored.id() == id) {
            *slot = (item, ttl_seconds);
        } else {
            self.entries.push((item, ttl_seconds));
        }
    }

    /// Decrements every entry's remaining time by `dt` and evicts entries
    /// whose remaining time has dropped below zero. An entry whose
    /// remaining time lands exactly on zero is kept for this tick and
    /// evicted on the next, so an item added with TTL `T` stays visible for
    /// at least `floor(T / dt)` whole ticks.
    pub fn update(&mut self, dt: Scalar) {
        for (_, remaining) in &mut self.entries {
            *remaining -= dt;
        }
        let before = self.entries.len();
        self.entries.retain(|(_, remaining)| *remaining >= 0.0);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            log::trace!("short-term memory evicted {evicted} expired item(s)");
        }
    }

    /// Visits items in insertion order, stopping early if `f` returns
    /// `false`.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for (item, _) in &self.entries {
            if !f(item) {
                break;
            }
        }
    }

    /// Returns the first item whose id matches, if still present.
    pub fn find_by_id(&self, id: crate::stimulus::StimulusId) -> Option<&T> {
        self.entries
            .iter()
            .find(|(item, _)| item.id() == id)
            .map(|(item, _)| item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stimulus::Stimulus;

    #[test]
    fn empty_on_creation() {
        let memory = ShortTermMemory::<Stimulus>::default();
        assert!(memory.is_empty());
    }

    #[test]
    fn not_empty_after_add() {
        let mut memory = ShortTermMemory::default();
        memory.add(Stimulus::new(1, "NOISE", 0.0), 0.0);
        assert!(!memory.is_empty());
    }

    #[test]
    fn add_or_replace_keeps_single_entry_with_latest_payload() {
        let mut memory = ShortTermMemory::default();
        memory.add(Stimulus::new(7, "FOOD", 0.0).with_value(36), 0.0);
        assert!(!memory.is_empty());

        memory.add_or_replace(Stimulus::new(7, "FOOD", 0.0).with_value(423), 0.0);

        let mut count = 0;
        memory.for_each(|item| {
            count += 1;
            assert_eq!(item.value(), Some(423));
            true
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn for_each_visits_in_insertion_order() {
        let mut memory = ShortTermMemory::default();
        let mut ids = Vec::new();
        for i in 0..5 {
            memory.add(Stimulus::new(i, "A", 0.0), 0.0);
            ids.push(i);
        }
        for i in 5..8 {
            memory.add(Stimulus::new(i, "B", (i % 10) as f32), 0.0);
            ids.push(i);
        }

        let mut visited = Vec::new();
        memory.for_each(|item| {
            visited.push(item.id());
            true
        });
        assert_eq!(visited, ids);
    }

    #[test]
    fn integer_ttl_survives_through_its_exact_tick_count_and_no_further() {
        let mut memory = ShortTermMemory::default();
        memory.add(Stimulus::new(1, "NOISE", 60.0), 60.0);

        for _ in 0..60 {
            memory.update(1.0);
        }
        assert!(!memory.is_empty());

        memory.update(1.0);
        assert!(memory.is_empty());
    }

    #[test]
    fn for_each_can_stop_early() {
        let mut memory = ShortTermMemory::default();
        for i in 0..5 {
            memory.add(Stimulus::new(i, "A", 0.0), 0.0);
        }
        let mut visited = 0;
        memory.for_each(|_| {
            visited += 1;
            visited < 2
        });
        assert_eq!(visited, 2);
    }
}
