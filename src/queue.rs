use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered key→value map with one-position reordering.
///
/// Backs selection lists where the user's click order is the sequence that
/// matters — e.g. re-sequencing imported contributions before bulk-inserting
/// them with consecutive start times. `order` and `map` always hold the
/// same key set.
#[derive(Debug, Clone)]
pub struct OrderedQueue<K, V> {
    order: Vec<K>,
    map: HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V> OrderedQueue<K, V> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Insert or overwrite. A new key goes to the end of the order; an
    /// existing key keeps its position and only the value changes.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let prev = self.map.insert(key.clone(), value);
        if prev.is_none() {
            self.order.push(key);
        }
        prev
    }

    /// Remove from both the order and the map. Absent keys are a no-op,
    /// so removing twice equals removing once.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.map.remove(key);
        if removed.is_some() {
            self.order.retain(|k| k != key);
        }
        removed
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Keys oldest-insertion-first, modulo explicit shifts.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Values in the same sequence as `keys()`.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().map(|k| &self.map[k])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.map.clear();
    }

    /// Swap the key at `index` with its predecessor. No-op at index 0 and
    /// for out-of-range indices — reorder buttons stay clickable at the
    /// list edges.
    pub fn shift_top(&mut self, index: usize) {
        if index > 0 && index < self.order.len() {
            self.order.swap(index, index - 1);
        }
    }

    /// Swap the key at `index` with its successor. No-op on the last key
    /// and for out-of-range indices.
    pub fn shift_bottom(&mut self, index: usize) {
        if index + 1 < self.order.len() {
            self.order.swap(index, index + 1);
        }
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(keys: &[&str]) -> OrderedQueue<String, u32> {
        let mut q = OrderedQueue::new();
        for (i, k) in keys.iter().enumerate() {
            q.insert(k.to_string(), i as u32);
        }
        q
    }

    fn key_vec(q: &OrderedQueue<String, u32>) -> Vec<&str> {
        q.keys().map(String::as_str).collect()
    }

    #[test]
    fn insertion_order_preserved() {
        let q = queue(&["c", "a", "b"]);
        assert_eq!(key_vec(&q), ["c", "a", "b"]);
        let vals: Vec<_> = q.values().copied().collect();
        assert_eq!(vals, [0, 1, 2]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut q = queue(&["a", "b", "c"]);
        assert_eq!(q.insert("a".into(), 99), Some(0));
        assert_eq!(key_vec(&q), ["a", "b", "c"]);
        assert_eq!(q.get(&"a".into()), Some(&99));
    }

    #[test]
    fn values_align_with_keys_after_shifts() {
        let mut q = queue(&["a", "b", "c", "d"]);
        q.shift_bottom(0);
        q.shift_top(3);
        let keys: Vec<String> = q.keys().cloned().collect();
        let vals: Vec<u32> = q.values().copied().collect();
        for (k, v) in keys.iter().zip(&vals) {
            assert_eq!(q.get(k), Some(v));
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let mut q = queue(&["a", "b"]);
        assert_eq!(q.remove(&"a".into()), Some(0));
        let after_once: Vec<String> = q.keys().cloned().collect();
        assert_eq!(q.remove(&"a".into()), None);
        assert_eq!(key_vec(&q), after_once);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn boundary_shifts_are_noops() {
        let mut q = queue(&["a", "b", "c"]);
        q.shift_top(0);
        assert_eq!(key_vec(&q), ["a", "b", "c"]);
        q.shift_bottom(2);
        assert_eq!(key_vec(&q), ["a", "b", "c"]);
        // Out-of-range: silent no-op, never a panic
        q.shift_top(17);
        q.shift_bottom(17);
        assert_eq!(key_vec(&q), ["a", "b", "c"]);
    }

    #[test]
    fn shift_moves_one_position() {
        let mut q = queue(&["a", "b", "c"]);
        q.shift_top(2);
        assert_eq!(key_vec(&q), ["a", "c", "b"]);
        q.shift_bottom(0);
        assert_eq!(key_vec(&q), ["c", "a", "b"]);
    }

    #[test]
    fn clear_empties_both_structures() {
        let mut q = queue(&["a", "b"]);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.get(&"a".into()), None);
        q.insert("z".into(), 7);
        assert_eq!(key_vec(&q), ["z"]);
    }
}
