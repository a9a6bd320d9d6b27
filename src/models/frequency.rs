use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: u64,
    /// Insertion sequence, used to break ties in rankings
    seq: u64,
}

/// Insertion-ordered occurrence counter
///
/// Rankings are by descending count with ties broken by the order in which
/// keys were first inserted. Removing a key forgets its position; inserting
/// it again places it after every key currently present. Reading a missing
/// key yields 0 and does not insert it.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    slots: HashMap<K, Slot>,
    next_seq: u64,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `key`
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Add `amount` occurrences of `key`, inserting it if absent
    pub fn add(&mut self, key: K, amount: u64) {
        let next_seq = &mut self.next_seq;
        let slot = self.slots.entry(key).or_insert_with(|| {
            let slot = Slot {
                count: 0,
                seq: *next_seq,
            };
            *next_seq += 1;
            slot
        });
        slot.count += amount;
    }

    /// Current count for `key` (0 when absent)
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.slots.get(key).map(|s| s.count).unwrap_or(0)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.slots.contains_key(key)
    }

    /// Delete `key`, returning its count if it was present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.slots.remove(key).map(|s| s.count)
    }

    /// Move all of `removed`'s count onto `added` and delete `removed`
    ///
    /// Returns the count moved (0 if `removed` was absent).
    pub fn transfer(&mut self, removed: &K, added: K) -> u64 {
        let moved = self.get(removed);
        self.add(added, moved);
        self.remove(removed);
        moved
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.slots.values().map(|s| s.count).sum()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> Vec<(K, u64)> {
        let mut ordered: Vec<(&K, &Slot)> = self.slots.iter().collect();
        ordered.sort_by_key(|(_, slot)| slot.seq);
        ordered
            .into_iter()
            .map(|(key, slot)| (key.clone(), slot.count))
            .collect()
    }

    /// The `n` highest-count entries, ties in insertion order
    pub fn most_common(&self, n: usize) -> Vec<(K, u64)> {
        let mut ranked = self.entries();
        // Stable sort keeps insertion order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
